//! Game-level logic: players, moves, and a safe, validated [`Game`] with
//! turn bookkeeping and undo.

use crate::{utils, Board, Location, LocationList, ParseLocationError};
use derive_more::{Display, Error};
use std::cmp::Ordering;
use std::fmt;

/// One of the two players. Black moves first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Player {
    #[default]
    Black,
    White,
}

impl std::ops::Not for Player {
    type Output = Self;

    /// The other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::Black => "Black",
            Player::White => "White",
        })
    }
}

/// An action in a game: place a disc, or forfeit the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Place(Location),
    Pass,
}

impl From<Location> for Move {
    fn from(loc: Location) -> Self {
        Self::Place(loc)
    }
}

/// A move string is neither square notation nor "pass".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "expected square notation or \"pass\"")]
pub struct ParseMoveError;

impl From<ParseLocationError> for ParseMoveError {
    fn from(_: ParseLocationError) -> Self {
        ParseMoveError
    }
}

/// Parse "D3" / "pass" (case-insensitive) into a [`Move`].
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Self::Pass);
        }
        Ok(Self::Place(s.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(loc) => write!(f, "{}", loc),
            Move::Pass => f.write_str("PASS"),
        }
    }
}

/// Rejected by [`Game::apply`]: the move is not legal in the current
/// position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum IllegalMoveError {
    #[display(fmt = "the game is already over")]
    GameOver,
    #[display(fmt = "placement is not a legal move")]
    NotALegalMove,
    #[display(fmt = "cannot pass while a placement is available")]
    PassWithMovesAvailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Record {
    board: Board,
    to_move: Player,
    mv: Move,
}

/// A complete game: the current position, whose turn it is, and the move
/// history. Every move is validated before it is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Record>,
}

impl Game {
    /// A fresh game from the starting position, Black to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an arbitrary position with `to_move` on turn. The history
    /// starts empty.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            history: Vec::new(),
        }
    }

    /// The current position, seen from the side to move.
    pub fn board(&self) -> Board {
        self.board
    }

    /// The player on turn.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The squares where the player on turn may place a disc.
    pub fn legal_moves(&self) -> LocationList {
        self.board.legal_moves()
    }

    /// Play a move for the player on turn. A placement must be a legal
    /// move, and a pass is accepted only when no placement exists.
    pub fn apply(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        if self.is_finished() {
            return Err(IllegalMoveError::GameOver);
        }
        match mv {
            Move::Place(loc) if !self.board.can_place(loc) => {
                return Err(IllegalMoveError::NotALegalMove);
            }
            Move::Pass if !self.board.legal_moves().is_empty() => {
                return Err(IllegalMoveError::PassWithMovesAvailable);
            }
            _ => {}
        }

        self.history.push(Record {
            board: self.board,
            to_move: self.to_move,
            mv,
        });
        self.board = match mv {
            Move::Place(loc) => self.board.apply_move(loc),
            Move::Pass => self.board.pass(),
        };
        self.to_move = !self.to_move;
        Ok(())
    }

    /// Take back the most recent move, restoring the previous position.
    /// Returns the move taken back, or `None` if no move has been played.
    pub fn undo(&mut self) -> Option<Move> {
        let record = self.history.pop()?;
        self.board = record.board;
        self.to_move = record.to_move;
        Some(record.mv)
    }

    /// The number of moves played so far, passes included.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|record| record.mv)
    }

    /// Whether neither player has a legal move.
    pub fn is_finished(&self) -> bool {
        self.board.is_finished()
    }

    /// Number of discs `player` has on the board.
    pub fn count(&self, player: Player) -> u8 {
        if player == self.to_move {
            self.board.mover_discs()
        } else {
            self.board.opponent_discs()
        }
    }

    /// The player with more discs, or `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.count(Player::Black).cmp(&self.count(Player::White)) {
            Ordering::Greater => Some(Player::Black),
            Ordering::Less => Some(Player::White),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (own, opp) = self.board.bitboards();
        let (black, white) = match self.to_move {
            Player::Black => (u64::from(own), u64::from(opp)),
            Player::White => (u64::from(opp), u64::from(own)),
        };

        utils::write_grid(f, |square| {
            let bit = 1u64 << (63 - square);
            match (black & bit, white & bit) {
                (0, 0) => '.',
                (_, 0) => 'X',
                _ => 'O',
            }
        })?;
        writeln!(f, "{} to move.", self.to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::Bitboard;

    fn place(notation: &str) -> Move {
        Move::Place(notation.parse().unwrap())
    }

    #[test]
    fn fresh_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::Black);
        assert_eq!(game.count(Player::Black), 2);
        assert_eq!(game.count(Player::White), 2);
        assert_eq!(game.history_len(), 0);
        assert_eq!(game.last_move(), None);
        assert!(!game.is_finished());
    }

    #[test]
    fn opening_move_bookkeeping() {
        let mut game = Game::new();
        game.apply(place("D3")).unwrap();

        assert_eq!(game.to_move(), Player::White);
        assert_eq!(game.count(Player::Black), 4);
        assert_eq!(game.count(Player::White), 1);
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.last_move(), Some(place("D3")));
        assert_eq!(game.winner(), Some(Player::Black));
    }

    #[test]
    fn illegal_placement_is_rejected_without_side_effects() {
        let mut game = Game::new();
        let before = game.clone();
        assert_eq!(
            game.apply(place("B2")),
            Err(IllegalMoveError::NotALegalMove)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn pass_requires_no_legal_moves() {
        let mut game = Game::new();
        assert_eq!(
            game.apply(Move::Pass),
            Err(IllegalMoveError::PassWithMovesAvailable)
        );
    }

    #[test]
    fn forced_pass_is_accepted() {
        // White to move (X below is the mover, White). White's discs on A2
        // and B2 flank nothing, so White must pass; Black then flips A2 by
        // playing A3.
        let board: Board = "\
            O-------\
            XXOOOOOO\
            --------\
            --------\
            --------\
            --------\
            --------\
            --------"
            .parse()
            .unwrap();
        let mut game = Game::from_position(board, Player::White);

        assert!(game.legal_moves().is_empty());
        assert!(!game.is_finished());
        game.apply(Move::Pass).unwrap();

        assert_eq!(game.to_move(), Player::Black);
        assert!(game.legal_moves().contains("A3".parse().unwrap()));
        game.apply(place("A3")).unwrap();
        // A2 flips; B2 is not flanked and stays White.
        assert_eq!(game.count(Player::White), 1);
        assert_eq!(game.count(Player::Black), 9);
    }

    #[test]
    fn moves_after_the_end_are_rejected() {
        let board = Board::from_bitboards(Bitboard::FULL, Bitboard::from(0));
        let mut game = Game::from_position(board, Player::Black);

        assert!(game.is_finished());
        assert_eq!(game.apply(Move::Pass), Err(IllegalMoveError::GameOver));
        assert_eq!(game.winner(), Some(Player::Black));
    }

    #[test]
    fn undo_restores_the_previous_position() {
        let mut game = Game::new();
        let start = game.clone();

        game.apply(place("D3")).unwrap();
        assert_eq!(game.undo(), Some(place("D3")));
        assert_eq!(game, start);
        assert_eq!(game.undo(), None);
    }

    #[test]
    fn parse_moves() {
        assert_eq!("pass".parse::<Move>(), Ok(Move::Pass));
        assert_eq!("PASS".parse::<Move>(), Ok(Move::Pass));
        assert_eq!("d3".parse::<Move>(), Ok(place("D3")));
        assert!("d9".parse::<Move>().is_err());
        assert_eq!(place("D3").to_string(), "D3");
        assert_eq!(Move::Pass.to_string(), "PASS");
    }

    #[test]
    fn display_shows_colors_and_turn() {
        let rendered = Game::new().to_string();
        assert!(rendered.contains("Black to move."));
        // Rank 4 of the start position: White on D4, Black on E4.
        assert!(rendered.contains("4 . . . O X . . ."));
    }
}
