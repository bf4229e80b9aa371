//! This file is the root of the `mlt_core` Rust crate.
//!
//! The crate decodes integer columns of MapLibre-style vector tiles: a varint
//! physical layer followed by up to two logical passes (RLE, delta, zig-zag and
//! Morton). Its responsibilities here are strictly limited to declaring the
//! top-level modules and re-exporting the public API.
//!
//! # Example
//! ```
//! use std::io::Cursor;
//! use mlt_core::{IntegerDecoder, LogicalLevelTechnique, PhysicalLevelTechnique, StreamMetadata};
//!
//! // Zig-zag encoded deltas of [5, 3, -2, 10].
//! let bytes = [0x0Au8, 0x03, 0x09, 0x18];
//! let metadata = StreamMetadata::plain(
//!     4,
//!     PhysicalLevelTechnique::Varint,
//!     LogicalLevelTechnique::Delta,
//!     LogicalLevelTechnique::None,
//! );
//!
//! let mut cursor = Cursor::new(&bytes[..]);
//! let values = IntegerDecoder::default()
//!     .decode_int_stream(&mut cursor, &metadata, true)
//!     .unwrap();
//! assert_eq!(values, vec![5, 3, -2, 10]);
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod observability;

pub mod config;
pub mod decoder;
pub mod error;
pub mod kernels;
pub mod types;

pub mod traits;

#[doc(hidden)]
pub use log as __log;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::DecoderConfig;
pub use decoder::IntegerDecoder;
pub use error::MltError;
pub use types::{
    LogicalLevelTechnique, MortonEncoding, PhysicalLevelTechnique, RleEncoding, StreamEncoding,
    StreamMetadata,
};
