//! Physical and logical technique tags, as they appear in stream metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MltError;

/// How raw integers are packed into bytes.
///
/// Only `Varint` is implemented; every other tag is rejected by the decoder
/// with `MltError::UnsupportedTechnique` before any byte is consumed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalLevelTechnique {
    None,
    /// Block-oriented bit-packing (FastPFOR-128).
    FastPfor,
    /// LEB128 variable-length integers.
    Varint,
    /// Adaptive lossless floating-point compression.
    Alp,
}

/// A reversible transform applied on top of the physically-decoded integers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogicalLevelTechnique {
    None,
    Delta,
    /// Delta coding applied separately to the x and y components of a vertex buffer.
    ComponentwiseDelta,
    Rle,
    Morton,
    /// Pseudo-decimal encoding of floating-point values.
    PseudoDecimal,
}

impl TryFrom<u8> for PhysicalLevelTechnique {
    type Error = MltError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::None),
            1 => Ok(Self::FastPfor),
            2 => Ok(Self::Varint),
            3 => Ok(Self::Alp),
            _ => Err(MltError::UnsupportedTechnique(format!(
                "unknown physical level technique tag {}",
                tag
            ))),
        }
    }
}

impl TryFrom<u8> for LogicalLevelTechnique {
    type Error = MltError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::None),
            1 => Ok(Self::Delta),
            2 => Ok(Self::ComponentwiseDelta),
            3 => Ok(Self::Rle),
            4 => Ok(Self::Morton),
            5 => Ok(Self::PseudoDecimal),
            _ => Err(MltError::UnsupportedTechnique(format!(
                "unknown logical level technique tag {}",
                tag
            ))),
        }
    }
}

impl fmt::Display for PhysicalLevelTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl fmt::Display for LogicalLevelTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
