//! This module contains the physical reader for LEB128 (Little-Endian Base 128)
//! variable-length integers.
//!
//! It is the only physical technique the decoder implements. Values are read
//! from a caller-owned `Cursor`, which is left exactly past the last consumed
//! byte so the next stream can be read contiguously from the same buffer. It is
//! fully panic-free.

use num_traits::{PrimInt, Unsigned};
use std::io::Cursor;

use crate::error::MltError;

//==================================================================================
// 1. Single-Value Decoding
//==================================================================================

/// Decodes a single unsigned integer from a LEB128 byte stream cursor.
pub fn decode_one<T>(cursor: &mut Cursor<&[u8]>) -> Result<T, MltError>
where
    T: PrimInt + Unsigned,
{
    let mut result = T::zero();
    let mut shift = 0;
    let total_bits = std::mem::size_of::<T>() * 8;

    loop {
        let pos = cursor.position() as usize;
        let byte = *cursor
            .get_ref()
            .get(pos)
            .ok_or_else(|| MltError::VarintDecode("Unexpected end of buffer".to_string()))?;
        cursor.set_position((pos + 1) as u64);

        let seven_bit_payload = T::from(byte & 0x7F).ok_or_else(|| {
            MltError::VarintDecode("Failed to create 7-bit payload from byte".to_string())
        })?;

        if shift >= total_bits {
            return Err(MltError::VarintDecode(
                "Integer overflow during decoding".to_string(),
            ));
        }

        result = result | (seven_bit_payload << shift);

        if byte & 0x80 == 0 {
            // The last byte may only carry bits that still fit the type.
            if shift + 7 > total_bits && (byte >> (total_bits - shift)) > 0 {
                return Err(MltError::VarintDecode(
                    "Integer overflow during decoding".to_string(),
                ));
            }
            return Ok(result);
        }

        shift += 7;
    }
}

//==================================================================================
// 2. Sequence Decoding
//==================================================================================

/// Decodes `num_values` unsigned integers starting at the cursor position.
///
/// On failure the cursor is rewound to where it started, so a failed stream
/// never leaves the buffer half-consumed.
pub fn decode<T>(cursor: &mut Cursor<&[u8]>, num_values: usize) -> Result<Vec<T>, MltError>
where
    T: PrimInt + Unsigned,
{
    let start = cursor.position();
    // Every value takes at least one byte; don't trust `num_values` further than that.
    let remaining = cursor.get_ref().len().saturating_sub(start as usize);
    let mut values = Vec::with_capacity(num_values.min(remaining));

    for _ in 0..num_values {
        match decode_one::<T>(cursor) {
            Ok(value) => values.push(value),
            Err(e) => {
                cursor.set_position(start);
                return Err(e);
            }
        }
    }
    Ok(values)
}

/// Decodes 32-bit varints and reinterprets each value as `i32`.
pub fn decode_varint_i32(cursor: &mut Cursor<&[u8]>, num_values: usize) -> Result<Vec<i32>, MltError> {
    let values = decode::<u32>(cursor, num_values)?;
    Ok(values.into_iter().map(|v| v as i32).collect())
}

/// Decodes 64-bit varints and reinterprets each value as `i64`.
pub fn decode_varint_i64(cursor: &mut Cursor<&[u8]>, num_values: usize) -> Result<Vec<i64>, MltError> {
    let values = decode::<u64>(cursor, num_values)?;
    Ok(values.into_iter().map(|v| v as i64).collect())
}
