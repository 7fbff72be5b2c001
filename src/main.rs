use monkfish::chess::Board;
use monkfish::perft::perft;
use monkfish::search::Engine;
use monkfish::time_manager::Clock;

use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Monkfish: a homemade chess engine", author, version)]
struct CmdArgs {
    /// Transposition table size in megabytes
    #[arg(long, value_name = "MB", default_value_t = 16)]
    tt_mb: usize,

    /// Print per-depth search reports
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd_args = CmdArgs::parse();
    let mut engine = Engine::new(cmd_args.tt_mb);
    loop {
        let mut cmdline = String::new();
        if std::io::stdin().read_line(&mut cmdline)? == 0 {
            break;
        }
        let line = cmdline.trim();
        let mut parts = line.splitn(3, ' ');
        match parts.next() {
            Some("go") => {
                let millis = match parts.next() {
                    Some(value) => value.parse::<i64>()?,
                    None => continue,
                };
                let Some(fen) = parts.next() else { continue };
                let mut board = Board::from_fen(fen)?;
                let mut clock = Clock::new(millis);
                clock.start_turn();
                let best = engine.best_move(&mut board, &clock, cmd_args.verbose);
                clock.end_turn();
                match best {
                    Some(mv) => println!("{}", mv.to_uci()),
                    None => bail!("no legal moves in position {fen}"),
                }
            }
            Some("perft") => {
                let depth = match parts.next() {
                    Some(value) => value.parse::<u32>()?,
                    None => continue,
                };
                let Some(fen) = parts.next() else { continue };
                let mut board = Board::from_fen(fen)?;
                println!("{}", perft(&mut board, depth));
            }
            Some("newgame") => {
                engine.new_game();
                println!("newgame ready");
            }
            _ => break,
        }
    }
    Ok(())
}
