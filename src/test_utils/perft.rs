//! "Perft" leaf counting: the number of distinct move paths at a given
//! depth from the starting position. The reference counts are published at
//! <http://www.aartbik.com/MISC/reversi.html>; matching them is strong
//! evidence the move generator implements the rules exactly.

use crate::Board;

/// Count the leaves of the game tree `depth` plies below the starting
/// position.
pub fn run_perft(depth: u64) -> u64 {
    leaves_below(Board::new(), depth, false)
}

fn leaves_below(board: Board, depth: u64, just_passed: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        // Two passes in a row end the game.
        if just_passed {
            return 1;
        }
        return leaves_below(board.pass(), depth - 1, true);
    }

    moves
        .map(|loc| leaves_below(board.apply_move(loc), depth - 1, false))
        .sum()
}
