//! Stream metadata as consumed by the decoder.
//!
//! The common header fields live on `StreamMetadata`; the fields that only make
//! sense for one logical technique live in the `StreamEncoding` payload. A
//! decoder arm for RLE or Morton matches the payload it needs and reports
//! `MalformedStream` when the stream carries a different one.

use serde::{Deserialize, Serialize};

use super::technique::{LogicalLevelTechnique, PhysicalLevelTechnique};
use crate::error::MltError;

/// Morton codes are held in 32-bit integers, so each axis gets at most half of them.
pub const MAX_MORTON_BITS: u32 = 16;

/// Run-length payload.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RleEncoding {
    /// Number of `(run_length, value)` pairs in the packed stream.
    pub runs: u32,
    /// Length of the stream after expansion.
    pub num_rle_values: u32,
}

/// Morton payload.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MortonEncoding {
    /// Bits per coordinate axis.
    pub num_bits: u32,
    /// Subtracted from both axes after deinterleaving.
    pub coordinate_shift: i32,
}

/// Technique-specific metadata.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StreamEncoding {
    #[default]
    Plain,
    Rle(RleEncoding),
    Morton(MortonEncoding),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct StreamMetadata {
    /// Number of physically-encoded values in the stream.
    pub num_values: u32,
    /// Length of the physically-encoded stream in bytes.
    #[serde(default)]
    pub byte_length: u32,
    pub physical_technique: PhysicalLevelTechnique,
    pub logical_technique1: LogicalLevelTechnique,
    pub logical_technique2: LogicalLevelTechnique,
    #[serde(default)]
    pub encoding: StreamEncoding,
}

impl StreamMetadata {
    /// Metadata for a stream without a technique-specific payload.
    pub fn plain(
        num_values: u32,
        physical_technique: PhysicalLevelTechnique,
        logical_technique1: LogicalLevelTechnique,
        logical_technique2: LogicalLevelTechnique,
    ) -> Self {
        Self {
            num_values,
            byte_length: 0,
            physical_technique,
            logical_technique1,
            logical_technique2,
            encoding: StreamEncoding::Plain,
        }
    }

    /// Metadata for a run-length encoded stream. `num_values` is the packed length.
    pub fn rle(
        num_values: u32,
        physical_technique: PhysicalLevelTechnique,
        logical_technique1: LogicalLevelTechnique,
        logical_technique2: LogicalLevelTechnique,
        runs: u32,
        num_rle_values: u32,
    ) -> Self {
        Self {
            encoding: StreamEncoding::Rle(RleEncoding { runs, num_rle_values }),
            ..Self::plain(num_values, physical_technique, logical_technique1, logical_technique2)
        }
    }

    /// Metadata for a Morton encoded stream.
    pub fn morton(
        num_values: u32,
        physical_technique: PhysicalLevelTechnique,
        logical_technique1: LogicalLevelTechnique,
        logical_technique2: LogicalLevelTechnique,
        num_bits: u32,
        coordinate_shift: i32,
    ) -> Self {
        Self {
            encoding: StreamEncoding::Morton(MortonEncoding { num_bits, coordinate_shift }),
            ..Self::plain(num_values, physical_technique, logical_technique1, logical_technique2)
        }
    }

    pub fn with_byte_length(mut self, byte_length: u32) -> Self {
        self.byte_length = byte_length;
        self
    }

    fn uses(&self, technique: LogicalLevelTechnique) -> bool {
        self.logical_technique1 == technique || self.logical_technique2 == technique
    }

    /// Checks the invariants that tie the technique pair to the payload.
    ///
    /// # Errors
    /// Returns `MltError::MalformedStream` if both techniques are Morton, if a
    /// Morton or RLE technique is declared without the matching payload, or if
    /// the Morton bit width does not fit a 32-bit code.
    pub fn validate(&self) -> Result<(), MltError> {
        if self.logical_technique1 == LogicalLevelTechnique::Morton
            && self.logical_technique2 == LogicalLevelTechnique::Morton
        {
            return Err(MltError::MalformedStream(
                "both logical techniques are Morton".to_string(),
            ));
        }

        if self.uses(LogicalLevelTechnique::Morton)
            && !matches!(self.encoding, StreamEncoding::Morton(_))
        {
            return Err(MltError::MalformedStream(format!(
                "Morton technique declared but payload is {:?}",
                self.encoding
            )));
        }

        if self.uses(LogicalLevelTechnique::Rle) && !matches!(self.encoding, StreamEncoding::Rle(_)) {
            return Err(MltError::MalformedStream(format!(
                "RLE technique declared but payload is {:?}",
                self.encoding
            )));
        }

        if let StreamEncoding::Morton(morton) = self.encoding {
            check_morton_bits(morton.num_bits)?;
        }

        Ok(())
    }
}

pub(crate) fn check_morton_bits(num_bits: u32) -> Result<(), MltError> {
    if num_bits > MAX_MORTON_BITS {
        return Err(MltError::MalformedStream(format!(
            "Morton code with {} bits per axis does not fit 32 bits",
            num_bits
        )));
    }
    Ok(())
}
