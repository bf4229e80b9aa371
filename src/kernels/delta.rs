//! This module contains the kernels that undo prefix-difference (delta) coding.
//!
//! Two variants exist: plain deltas, and deltas that were zig-zag encoded before
//! being written. Both are implemented **in-place** over an owned sequence and
//! accumulate with wrapping arithmetic in the width of the stream, so an
//! overflowing accumulator wraps exactly like the encoder's did.

use num_traits::{PrimInt, Signed, WrappingAdd};

use super::zigzag;
use crate::traits::{HasSigned, HasUnsigned};

//==================================================================================
// 1. Generic Core Logic (In-Place)
//==================================================================================

/// Performs delta decoding (cumulative sum) **in-place** on a mutable slice.
///
/// `data[0]` is kept as is and every later element becomes
/// `data[i] = data[i - 1] + data[i]`.
pub fn decode_in_place<T>(data: &mut [T])
where
    T: PrimInt + WrappingAdd,
{
    if data.len() <= 1 {
        return;
    }
    // Iterate forwards to use the newly-decoded values for subsequent sums
    for i in 1..data.len() {
        data[i] = data[i].wrapping_add(&data[i - 1]);
    }
}

/// Zig-zag decodes each delta, then accumulates it, **in-place**.
pub fn decode_zigzag_in_place<S>(data: &mut [S])
where
    S: PrimInt + Signed + WrappingAdd + HasUnsigned + bytemuck::Pod,
    S::Unsigned: PrimInt + num_traits::Unsigned + HasSigned<Signed = S> + bytemuck::Pod,
{
    let mut previous = S::zero();
    for value in data.iter_mut() {
        previous = previous.wrapping_add(&zigzag::decode_stored(*value));
        *value = previous;
    }
}

//==================================================================================
// 2. Public API (Owned Sequences)
//==================================================================================

/// Reconstructs values from plain deltas.
pub fn decode<T>(mut data: Vec<T>) -> Vec<T>
where
    T: PrimInt + WrappingAdd,
{
    decode_in_place(&mut data);
    data
}

/// Reconstructs values from zig-zag encoded deltas.
pub fn decode_zigzag<S>(mut data: Vec<S>) -> Vec<S>
where
    S: PrimInt + Signed + WrappingAdd + HasUnsigned + bytemuck::Pod,
    S::Unsigned: PrimInt + num_traits::Unsigned + HasSigned<Signed = S> + bytemuck::Pod,
{
    decode_zigzag_in_place(&mut data);
    data
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
