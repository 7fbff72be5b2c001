//! Game clock: a millisecond budget that is drained turn by turn. The
//! search reads the remaining time once on entry and polls the elapsed
//! time while it runs.

use std::time::Instant;

pub struct Clock {
    remaining_ms: i64,
    turn_start: Option<Instant>,
}

impl Clock {
    pub fn new(game_duration_ms: i64) -> Self {
        Self {
            remaining_ms: game_duration_ms,
            turn_start: None,
        }
    }

    pub fn ms_remaining(&self) -> i64 {
        self.remaining_ms
    }

    /// Milliseconds since `start_turn`; zero before the first turn starts.
    pub fn ms_elapsed_this_turn(&self) -> i64 {
        match self.turn_start {
            Some(start) => start.elapsed().as_millis() as i64,
            None => 0,
        }
    }

    pub fn start_turn(&mut self) {
        self.turn_start = Some(Instant::now());
    }

    /// Deducts the turn's elapsed time from the budget, clamping at zero.
    pub fn end_turn(&mut self) {
        self.remaining_ms = (self.remaining_ms - self.ms_elapsed_this_turn()).max(0);
        self.turn_start = None;
    }
}
