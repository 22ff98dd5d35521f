//! `reversi-core` is a bitboard rules engine for Othello/Reversi.
//!
//! The crate implements three levels of abstraction:
//!
//!  - [`bitboard`] contains the raw engine kernels: legal-move generation,
//!    flip computation and move application over plain 64-bit boards. These
//!    are unchecked and fast; their contracts must be upheld by the caller.
//!    The same operations are also exported through a C FFI.
//!  - [`Board`] wraps a mover-relative pair of bitboards and stays as fast
//!    and unchecked as the kernels underneath it. This is the type engines
//!    want to work with.
//!  - [`Game`] is a high-level, safe interface: it validates every move,
//!    tracks whose turn it is and keeps a history for undo.

pub mod bitboard;
pub mod ffi;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of squares on one edge of the board.
pub const EDGE_LENGTH: usize = 8;

/// The number of squares on the board.
pub const NUM_SQUARES: usize = 64;
