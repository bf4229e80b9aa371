// In: src/config.rs

//! The single source of truth for decoder configuration.
//!
//! `DecoderConfig` is created once at the application boundary (in code or from
//! a JSON document) and handed to `IntegerDecoder`. The decoder only ever reads
//! it, so a single instance can be shared freely between threads.

use serde::{Deserialize, Serialize};

use crate::error::MltError;

/// Limits and checks applied by `IntegerDecoder` before touching stream data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DecoderConfig {
    /// Upper bound on `num_values` and `num_rle_values` of a single stream.
    /// Metadata that declares more is rejected as malformed before any buffer
    /// is allocated.
    #[serde(default = "default_max_stream_values")]
    pub max_stream_values: usize,

    /// If true, `StreamMetadata::validate` runs before every stream decode.
    #[serde(default = "default_true")]
    pub validate_metadata: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_stream_values: default_max_stream_values(),
            validate_metadata: true,
        }
    }
}

impl DecoderConfig {
    /// Parses a configuration from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, MltError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rejects a declared stream length above `max_stream_values`.
    pub(crate) fn check_stream_len(&self, declared: usize, what: &str) -> Result<(), MltError> {
        if declared > self.max_stream_values {
            return Err(MltError::MalformedStream(format!(
                "{} declares {} values, limit is {}",
                what, declared, self.max_stream_values
            )));
        }
        Ok(())
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

/// Helper for `serde` to provide a default for `max_stream_values`.
fn default_max_stream_values() -> usize {
    1 << 24
}
