//! Squares on the board and conversions between their representations:
//! one-hot bitboards, bit indices, `(file, rank)` pairs and "D3" notation.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Write};

/// A single square, stored as a one-hot [`Bitboard`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Into)]
pub struct Location(Bitboard);

/// A set of squares, stored as a [`Bitboard`] mask. Iterating yields each
/// set square as a [`Location`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, From, Into)]
pub struct LocationList(Bitboard);

/// A coordinate or notation string does not name a square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "invalid board coordinate")]
pub struct ParseLocationError;

impl Location {
    /// Build a square from 0-based coordinates: `file` 0 is A, `rank` 0 is
    /// rank 1. Returns `None` when either coordinate is off the board.
    pub fn from_square(file: u8, rank: u8) -> Option<Self> {
        if file >= EDGE_LENGTH as u8 || rank >= EDGE_LENGTH as u8 {
            return None;
        }
        Some(Self::from_index(
            (7 - rank) * EDGE_LENGTH as u8 + (7 - file),
        ))
    }

    /// Build a square from its bit index: 0 is H8, 63 is A1.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        debug_assert!(index < 64);
        Self(Bitboard::from(1u64 << index))
    }

    /// Build a square from a one-hot bitboard. Returns `None` unless exactly
    /// one bit is set.
    #[inline]
    pub fn from_bitboard(bitboard: Bitboard) -> Option<Self> {
        if bitboard.count_occupied() == 1 {
            Some(Self(bitboard))
        } else {
            None
        }
    }

    /// The square's bit index: 0 for H8, 63 for A1.
    #[inline]
    pub fn index(self) -> u8 {
        u64::from(self.0).trailing_zeros() as u8
    }

    /// The square as a one-hot bitboard.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        self.0
    }

    /// The square's 0-based `(file, rank)` coordinates.
    pub fn coords(self) -> (u8, u8) {
        let index = self.index();
        let file = 7 - index % EDGE_LENGTH as u8;
        let rank = 7 - index / EDGE_LENGTH as u8;
        (file, rank)
    }
}

/// Parse 1-indexed notation ("D3", "d3") into a [`Location`].
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file_char = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let rank_char = chars.next().ok_or(ParseLocationError)?;
        if chars.next().is_some() {
            return Err(ParseLocationError);
        }

        let file = "ABCDEFGH".find(file_char).ok_or(ParseLocationError)?;
        let rank = "12345678".find(rank_char).ok_or(ParseLocationError)?;
        Self::from_square(file as u8, rank as u8).ok_or(ParseLocationError)
    }
}

/// Convert this [`Location`] into notation ("D3").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (file, rank) = self.coords();
        f.write_char((b'A' + file) as char)?;
        f.write_char((b'1' + rank) as char)
    }
}

impl LocationList {
    /// Returns whether the set is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `loc` is in the set.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        !(self.0 & loc.bitboard()).is_empty()
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.is_empty() {
            return None;
        }

        let bits = u64::from(self.0);
        let next = Bitboard::from(1u64 << bits.trailing_zeros());
        self.0 ^= next;
        Some(Location(next))
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let squares = self
            .into_iter()
            .map(|loc| loc.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "[{}]", squares)
    }
}
