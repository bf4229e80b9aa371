//! This module contains the kernel for expanding run-length encoded sequences.
//!
//! The packed form is a flat sequence of the stream's own width: the first
//! `runs` entries are run lengths and the next `runs` entries are the values
//! they repeat. Runs are expanded in stored order. This module is panic-free.

use num_traits::PrimInt;

use crate::error::MltError;

//==================================================================================
// 1. Public API
//==================================================================================

/// Expands `runs` packed `(run_length, value)` pairs into exactly `num_rle_values` values.
///
/// # Errors
/// Returns `MltError::MalformedStream` if the packed sequence holds fewer than
/// `2 * runs` entries, if a run length is negative, or if the run lengths do
/// not sum to `num_rle_values`. No partial output is returned.
pub fn decode<T>(data: &[T], runs: usize, num_rle_values: usize) -> Result<Vec<T>, MltError>
where
    T: PrimInt,
{
    let packed_len = runs
        .checked_mul(2)
        .ok_or_else(|| MltError::MalformedStream(format!("RLE run count {} overflows", runs)))?;
    if data.len() < packed_len {
        return Err(MltError::MalformedStream(format!(
            "RLE stream holds {} values, but {} runs need {}",
            data.len(),
            runs,
            packed_len
        )));
    }

    let (run_lengths, rest) = data.split_at(runs);
    let run_values = &rest[..runs];

    let mut values = Vec::with_capacity(num_rle_values);
    for (&run_length, &value) in run_lengths.iter().zip(run_values) {
        let run_length = run_length.to_usize().ok_or_else(|| {
            MltError::MalformedStream("RLE run length is negative".to_string())
        })?;
        if run_length > num_rle_values - values.len() {
            return Err(MltError::MalformedStream(format!(
                "RLE runs expand past the declared {} values",
                num_rle_values
            )));
        }
        values.extend(std::iter::repeat(value).take(run_length));
    }

    if values.len() != num_rle_values {
        return Err(MltError::MalformedStream(format!(
            "RLE runs expanded to {} values, but expected {}",
            values.len(),
            num_rle_values
        )));
    }

    Ok(values)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
