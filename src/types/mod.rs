//! This module defines the core, strongly-typed data representations consumed
//! by the decoding pipeline.
//!
//! Techniques are closed enums and the technique-specific metadata is a sum
//! type, so every decoder `match` is exhaustive and a new technique shows up as
//! a compile error rather than a runtime default case.

pub mod stream_metadata;
pub mod technique;

// Re-export the main types for easier access.
pub use stream_metadata::{MortonEncoding, RleEncoding, StreamEncoding, StreamMetadata};
pub use technique::{LogicalLevelTechnique, PhysicalLevelTechnique};
