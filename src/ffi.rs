//! C ABI over the bitboard kernels, for embedding the engine in other
//! runtimes. Boards cross the boundary as raw `u64` masks under the same
//! contracts as [`bitboard`](crate::bitboard).

use crate::bitboard::{self, Bitboard};

/// The updated `(own, opp)` pair returned by [`ffi_apply_move`].
#[repr(C)]
pub struct FfiMoveResult {
    pub own: u64,
    pub opp: u64,
}

#[no_mangle]
pub extern "C" fn ffi_legal_moves(own: u64, opp: u64) -> u64 {
    bitboard::legal_moves(Bitboard::from(own), Bitboard::from(opp)).into()
}

#[no_mangle]
pub extern "C" fn ffi_can_place(placement: u64, own: u64, opp: u64) -> bool {
    bitboard::can_place(
        Bitboard::from(placement),
        Bitboard::from(own),
        Bitboard::from(opp),
    )
}

#[no_mangle]
pub extern "C" fn ffi_apply_move(placement: u64, own: u64, opp: u64) -> FfiMoveResult {
    let (own, opp) = bitboard::apply_move(
        Bitboard::from(placement),
        Bitboard::from(own),
        Bitboard::from(opp),
    );
    FfiMoveResult {
        own: own.into(),
        opp: opp.into(),
    }
}

#[no_mangle]
pub extern "C" fn ffi_is_finished(own: u64, opp: u64) -> bool {
    bitboard::is_finished(Bitboard::from(own), Bitboard::from(opp))
}

#[no_mangle]
pub extern "C" fn ffi_popcount(bits: u64) -> u32 {
    Bitboard::from(bits).count_occupied() as u32
}
