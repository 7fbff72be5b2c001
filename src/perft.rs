//! Perft: exhaustive legal-move enumeration, the ground truth for the move
//! generator and for make/unmake reversibility.

use crate::chess::Board;
use crate::moves::MoveList;

/// Counts leaf nodes of the full legal move tree, one make/unmake pair per
/// edge (no bulk counting at the last level).
pub fn perft(board: &mut Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut moves = MoveList::new();
    board.generate_all_legal_moves(&mut moves);
    let mut nodes = 0;
    for &mv in moves.as_slice() {
        board.make_move(mv);
        nodes += perft(board, depth - 1);
        board.unmake_move();
    }
    nodes
}

/// Per-move leaf counts for the root position, for debugging divergences.
pub fn perft_divide(board: &mut Board, depth: u32) -> Vec<(String, u64)> {
    let mut moves = MoveList::new();
    board.generate_all_legal_moves(&mut moves);
    let mut results = Vec::with_capacity(moves.len());
    for &mv in moves.as_slice() {
        board.make_move(mv);
        let nodes = if depth > 1 { perft(board, depth - 1) } else { 1 };
        board.unmake_move();
        results.push((mv.to_uci(), nodes));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_is_one() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 0), 1);
    }

    #[test]
    fn perft_startpos_shallow() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, 1), 20);
        assert_eq!(perft(&mut board, 2), 400);
        assert_eq!(perft(&mut board, 3), 8_902);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::starting_position();
        let divided = perft_divide(&mut board, 3);
        let total: u64 = divided.iter().map(|(_, nodes)| nodes).sum();
        assert_eq!(total, perft(&mut board, 3));
        assert_eq!(divided.len(), 20);
    }
}
