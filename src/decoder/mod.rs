//! This module is the public entry point for decoding streams.
//!
//! It owns the orchestration: which physical reader runs, which logical passes
//! follow, in which order, and where zig-zag correction is applied. The actual
//! transforms live in `crate::kernels`.

mod integer;

#[cfg(test)]
mod integer_tests;

pub use integer::IntegerDecoder;
