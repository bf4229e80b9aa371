//! This module contains the zig-zag decoding primitive shared by the RLE, delta
//! and plain pipeline passes.
//!
//! Zig-zag is a lossless, bitwise mapping of signed integers onto unsigned ones
//! that keeps small magnitudes small. Streams carry the unsigned form in a
//! signed container (the varint reader reinterprets the bits), so the public
//! helpers here take and return the signed stream type.

use num_traits::{PrimInt, Signed, Unsigned};

use crate::traits::{HasSigned, HasUnsigned};

//==================================================================================
// 1. Generic Core Logic
//==================================================================================

/// Decodes a single unsigned integer back to its signed representation.
///
/// The formula is `(n >>> 1) ^ -(n & 1)`; the shift is logical because it is
/// done in the unsigned type.
pub fn decode_val<U>(n: U) -> U::Signed
where
    U: PrimInt + Unsigned + HasSigned + bytemuck::Pod,
    U::Signed: PrimInt + Signed + bytemuck::Pod,
{
    let shifted: U::Signed = bytemuck::cast(n >> 1);
    let lsb: U::Signed = bytemuck::cast(n & U::one());
    shifted ^ -lsb
}

/// Zig-zag decodes a value stored in its signed stream container.
pub fn decode_stored<S>(z: S) -> S
where
    S: HasUnsigned + bytemuck::Pod,
    S::Unsigned: PrimInt + Unsigned + HasSigned<Signed = S> + bytemuck::Pod,
    S: PrimInt + Signed,
{
    decode_val::<S::Unsigned>(bytemuck::cast(z))
}

//==================================================================================
// 2. Sequence API
//==================================================================================

/// Zig-zag decodes every value of a sequence **in-place**.
pub fn decode_in_place<S>(data: &mut [S])
where
    S: PrimInt + Signed + HasUnsigned + bytemuck::Pod,
    S::Unsigned: PrimInt + Unsigned + HasSigned<Signed = S> + bytemuck::Pod,
{
    for value in data.iter_mut() {
        *value = decode_stored(*value);
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
