//! This module collects the pure, stateless decoding kernels.
//!
//! Each kernel owns one reconstruction step and knows nothing about stream
//! metadata; the `decoder` module decides which kernels run and in what order.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Physical layer: bytes to integers.
pub mod varint;

/// Logical layer: integers to integers.
pub mod delta;
pub mod rle;
pub mod zigzag;

/// Logical layer: integers to coordinates.
pub mod morton;
