//! This module contains the kernels for deinterleaving Morton (Z-order) codes
//! into 2D integer coordinates.
//!
//! A code stores `x` in its even bits and `y` in its odd bits. Each axis is
//! recovered bit by bit, then shifted back onto the signed coordinate domain by
//! subtracting `coordinate_shift`. Output is a flat `[x0, y0, x1, y1, ...]`
//! sequence, twice as long as the input.

use crate::error::MltError;
use crate::types::stream_metadata::{check_morton_bits, MAX_MORTON_BITS};
use crate::types::MortonEncoding;

//==================================================================================
// 1. Core Bit Logic
//==================================================================================

/// Gathers bits `0, 2, 4, ...` of `code` into the low `num_bits` bits of the result.
/// At most 16 bits are gathered.
#[inline]
pub fn decode_axis(code: u32, num_bits: u32) -> u32 {
    let mut coordinate = 0u32;
    for i in 0..num_bits.min(MAX_MORTON_BITS) {
        coordinate |= (code & (1 << (2 * i))) >> i;
    }
    coordinate
}

/// Decodes one Morton code into an `(x, y)` pair.
#[inline]
pub fn decode_code(code: i32, num_bits: u32, coordinate_shift: i32) -> (i32, i32) {
    let code = code as u32;
    let x = (decode_axis(code, num_bits) as i32).wrapping_sub(coordinate_shift);
    let y = (decode_axis(code >> 1, num_bits) as i32).wrapping_sub(coordinate_shift);
    (x, y)
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Decodes a sequence where every element is an independent Morton code.
pub fn decode_codes(codes: &[i32], encoding: &MortonEncoding) -> Result<Vec<i32>, MltError> {
    check_morton_bits(encoding.num_bits)?;

    let mut vertices = Vec::with_capacity(codes.len() * 2);
    for &code in codes {
        let (x, y) = decode_code(code, encoding.num_bits, encoding.coordinate_shift);
        vertices.push(x);
        vertices.push(y);
    }
    Ok(vertices)
}

/// Decodes a sequence where every element is the difference to the previous code.
///
/// The running code starts at 0 and accumulates with wrapping arithmetic; the
/// deltas are between codes, not between coordinates.
pub fn decode_delta(deltas: &[i32], encoding: &MortonEncoding) -> Result<Vec<i32>, MltError> {
    check_morton_bits(encoding.num_bits)?;

    let mut vertices = Vec::with_capacity(deltas.len() * 2);
    let mut previous_code = 0i32;
    for &delta in deltas {
        let code = previous_code.wrapping_add(delta);
        let (x, y) = decode_code(code, encoding.num_bits, encoding.coordinate_shift);
        vertices.push(x);
        vertices.push(y);
        previous_code = code;
    }
    Ok(vertices)
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
