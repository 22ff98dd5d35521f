//! A mover-relative board: the pair of bitboards the engine operates on.
//!
//! [`Board`] is as fast and unchecked as the kernels in [`bitboard`]; use
//! [`Game`](crate::Game) when moves come from an untrusted source.

use crate::bitboard::{self, Bitboard, BLACK_START, WHITE_START};
use crate::{utils, Location, LocationList};
use derive_more::{Display, Error};
use std::fmt;

/// The discs on the board, split into the side to move (`own`) and its
/// opponent (`opp`). The two masks never overlap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    own: Bitboard,
    opp: Bitboard,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting position, seen from the first player (Black).
    pub const fn new() -> Self {
        Self {
            own: BLACK_START,
            opp: WHITE_START,
        }
    }

    /// Build a board from raw bitboards. The masks must be disjoint.
    #[inline]
    pub fn from_bitboards(own: Bitboard, opp: Bitboard) -> Self {
        debug_assert!((own & opp).is_empty(), "own and opp must be disjoint");
        Self { own, opp }
    }

    /// The `(own, opp)` pair, mover first.
    #[inline]
    pub fn bitboards(self) -> (Bitboard, Bitboard) {
        (self.own, self.opp)
    }

    /// Forfeit the turn: the same discs, seen from the other side.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            own: self.opp,
            opp: self.own,
        }
    }

    /// The squares where the side to move may place a disc.
    #[inline]
    pub fn legal_moves(self) -> LocationList {
        LocationList::from(bitboard::legal_moves(self.own, self.opp))
    }

    /// Whether the side to move may place a disc on `loc`.
    #[inline]
    pub fn can_place(self, loc: Location) -> bool {
        self.legal_moves().contains(loc)
    }

    /// The opponent discs that placing on `loc` would flip.
    #[inline]
    pub fn flips(self, loc: Location) -> Bitboard {
        bitboard::flips(loc.bitboard(), self.own, self.opp)
    }

    /// Place a disc for the side to move on `loc` and hand the turn over:
    /// the returned board is seen from the next player. `loc` must be a
    /// legal move.
    #[inline]
    pub fn apply_move(self, loc: Location) -> Self {
        let (own, opp) = bitboard::apply_move(loc.bitboard(), self.own, self.opp);
        Self { own: opp, opp: own }
    }

    /// Whether neither side has a legal move.
    #[inline]
    pub fn is_finished(self) -> bool {
        bitboard::is_finished(self.own, self.opp)
    }

    /// Number of discs belonging to the side to move.
    #[inline]
    pub fn mover_discs(self) -> u8 {
        self.own.count_occupied()
    }

    /// Number of discs belonging to the opponent.
    #[inline]
    pub fn opponent_discs(self) -> u8 {
        self.opp.count_occupied()
    }

    /// Disc count difference in favor of the side to move.
    #[inline]
    pub fn disc_difference(self) -> i8 {
        self.mover_discs() as i8 - self.opponent_discs() as i8
    }

    /// Mask of the occupied squares.
    #[inline]
    pub fn occupied(self) -> Bitboard {
        self.own | self.opp
    }

    /// Mask of the empty squares.
    #[inline]
    pub fn empty(self) -> Bitboard {
        !self.occupied()
    }
}

/// A board string does not describe 64 squares of `X` / `O` / `-`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "board string must contain exactly 64 squares")]
    WrongLength,
    #[display(fmt = "unrecognized square character")]
    UnknownSquare,
}

/// Parse a 64-character board string in row-major order from A1: `X` for the
/// side to move, `O` for the opponent, `-` or `.` for empty. Whitespace is
/// ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut own = 0u64;
        let mut opp = 0u64;
        let mut squares = 0usize;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if squares == 64 {
                return Err(ParseBoardError::WrongLength);
            }
            let bit = 1u64 << (63 - squares);
            match c.to_ascii_uppercase() {
                'X' => own |= bit,
                'O' => opp |= bit,
                '-' | '.' => {}
                _ => return Err(ParseBoardError::UnknownSquare),
            }
            squares += 1;
        }

        if squares != 64 {
            return Err(ParseBoardError::WrongLength);
        }
        Ok(Self::from_bitboards(Bitboard::from(own), Bitboard::from(opp)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (own, opp) = (u64::from(self.own), u64::from(self.opp));
        utils::write_grid(f, |square| {
            let bit = 1u64 << (63 - square);
            match (own & bit, opp & bit) {
                (0, 0) => '.',
                (_, 0) => 'X',
                _ => 'O',
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(notation: &str) -> Location {
        notation.parse().unwrap()
    }

    #[test]
    fn start_position_counts() {
        let board = Board::new();
        assert_eq!(board.mover_discs(), 2);
        assert_eq!(board.opponent_discs(), 2);
        assert_eq!(board.disc_difference(), 0);
        assert_eq!(board.occupied().count_occupied(), 4);
    }

    #[test]
    fn start_position_legal_moves() {
        let legal = Board::new().legal_moves();
        assert_eq!(legal.len(), 4);
        for notation in ["D3", "C4", "F5", "E6"] {
            assert!(legal.contains(loc(notation)), "{notation}");
        }
        assert!(!legal.contains(loc("B2")));
    }

    #[test]
    fn apply_move_hands_the_turn_over() {
        let board = Board::new().apply_move(loc("D3"));
        // The new mover is the old opponent, down to a single disc.
        assert_eq!(board.mover_discs(), 1);
        assert_eq!(board.opponent_discs(), 4);
        assert_eq!(board.disc_difference(), -3);
    }

    #[test]
    fn replies_to_the_opening_move() {
        let board = Board::new().apply_move(loc("D3"));
        let legal = board.legal_moves();
        assert_eq!(legal.len(), 3);
        for notation in ["C3", "E3", "C5"] {
            assert!(legal.contains(loc(notation)), "{notation}");
        }
    }

    #[test]
    fn pass_swaps_perspective() {
        let board = Board::new().pass();
        assert_eq!(board.pass(), Board::new());
        assert_eq!(board.bitboards(), (WHITE_START, BLACK_START));
    }

    #[test]
    fn parse_display_round_trip() {
        let board = Board::new().apply_move(loc("D3"));
        let reparsed: Board = board
            .to_string()
            .chars()
            .filter(|c| matches!(c, 'X' | 'O' | '.'))
            .collect::<String>()
            .parse()
            .unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn parse_start_position() {
        let board: Board = "\
            --------\
            --------\
            --------\
            ---OX---\
            ---XO---\
            --------\
            --------\
            --------"
            .parse()
            .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parse_rejects_bad_strings() {
        assert_eq!("---".parse::<Board>(), Err(ParseBoardError::WrongLength));
        assert_eq!(
            "-".repeat(65).parse::<Board>(),
            Err(ParseBoardError::WrongLength)
        );
        assert_eq!(
            ("Q".to_owned() + &"-".repeat(63)).parse::<Board>(),
            Err(ParseBoardError::UnknownSquare)
        );
    }

    #[test]
    fn finished_positions() {
        assert!(!Board::new().is_finished());
        let full = Board::from_bitboards(Bitboard::FULL, Bitboard::from(0));
        assert!(full.is_finished());
    }
}
