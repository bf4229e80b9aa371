// In: src/error.rs

//! This module defines the single, unified error type for the entire mlt decoder.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Every failure is fatal for the stream being decoded: the input is either
//! corrupt, produced by an incompatible encoder, or uses a technique this crate
//! does not implement. Nothing here is transient, so nothing is retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MltError {
    // =========================================================================
    // === Semantic Errors (Specific to the decoding pipeline)
    // =========================================================================
    /// A physical or logical technique that is not implemented for this width.
    #[error("Unsupported technique: {0}")]
    UnsupportedTechnique(String),

    /// The metadata and the data disagree, or the metadata violates its own
    /// invariants.
    #[error("Malformed stream: {0}")]
    MalformedStream(String),

    // =========================================================================
    // === Low-Level Kernel Errors
    // =========================================================================
    #[error("Varint decoding error: {0}")]
    VarintDecode(String),

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// A `DecoderConfig` could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
