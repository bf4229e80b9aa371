// In: src/decoder/integer.rs

//! The logical technique dispatcher for integer and coordinate streams.
//!
//! A stream is decoded in two stages: the physical reader turns bytes into a
//! flat integer sequence, then up to two logical passes reverse the encoder's
//! transforms. The 32-bit and 64-bit paths are deliberately separate: they
//! apply the two logical techniques in opposite orders and fold zig-zag
//! correction differently, and both behaviours are part of the wire contract.

use std::io::Cursor;

use crate::config::DecoderConfig;
use crate::error::MltError;
use crate::kernels::{delta, morton, rle, varint, zigzag};
use crate::log_metric;
use crate::types::{
    LogicalLevelTechnique, MortonEncoding, PhysicalLevelTechnique, RleEncoding, StreamEncoding,
    StreamMetadata,
};

/// Decodes integer, long and Morton coordinate streams.
///
/// The decoder holds only its read-only configuration, so one instance can be
/// shared between threads and used for any number of streams.
#[derive(Debug, Clone, Default)]
pub struct IntegerDecoder {
    config: DecoderConfig,
}

impl IntegerDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    //==============================================================================
    // 1. Stream API (bytes in, values out)
    //==============================================================================

    /// Decodes a 32-bit integer stream.
    ///
    /// The second logical technique is reversed first (it was the encoder's
    /// inner transform), then the first one.
    pub fn decode_int_stream(
        &self,
        cursor: &mut Cursor<&[u8]>,
        metadata: &StreamMetadata,
        is_signed: bool,
    ) -> Result<Vec<i32>, MltError> {
        log::debug!(
            "decode_int_stream: {} values, techniques ({}, {}), signed={}",
            metadata.num_values,
            metadata.logical_technique1,
            metadata.logical_technique2,
            is_signed
        );
        let num_values = self.prepare(metadata)?;

        with_rewind(cursor, |cursor| {
            let values = varint::decode_varint_i32(cursor, num_values)?;
            let values = self.decode_int_sequence(
                values,
                metadata.logical_technique2,
                metadata,
                is_signed,
                false,
            )?;
            self.decode_int_sequence(values, metadata.logical_technique1, metadata, is_signed, true)
        })
    }

    /// Decodes a 64-bit integer stream.
    ///
    /// Unlike the 32-bit path, the first logical technique is reversed first.
    pub fn decode_long_stream(
        &self,
        cursor: &mut Cursor<&[u8]>,
        metadata: &StreamMetadata,
        is_signed: bool,
    ) -> Result<Vec<i64>, MltError> {
        log::debug!(
            "decode_long_stream: {} values, techniques ({}, {}), signed={}",
            metadata.num_values,
            metadata.logical_technique1,
            metadata.logical_technique2,
            is_signed
        );
        let num_values = self.prepare(metadata)?;

        with_rewind(cursor, |cursor| {
            let values = varint::decode_varint_i64(cursor, num_values)?;
            let values =
                self.decode_long_sequence(values, metadata.logical_technique1, metadata, is_signed)?;
            self.decode_long_sequence(values, metadata.logical_technique2, metadata, is_signed)
        })
    }

    /// Decodes a delta-coded Morton stream into interleaved `(x, y)` coordinates.
    ///
    /// This is the layout used for point geometries: every physical value is
    /// the difference to the previous Morton code.
    pub fn decode_morton_stream(
        &self,
        cursor: &mut Cursor<&[u8]>,
        metadata: &StreamMetadata,
    ) -> Result<Vec<i32>, MltError> {
        log::debug!("decode_morton_stream: {} codes", metadata.num_values);
        let num_values = self.prepare(metadata)?;
        let encoding = morton_encoding(metadata)?;

        with_rewind(cursor, |cursor| {
            let deltas = varint::decode_varint_i32(cursor, num_values)?;
            morton::decode_delta(&deltas, &encoding)
        })
    }

    //==============================================================================
    // 2. Sequence API (one logical pass)
    //==============================================================================

    /// Applies one logical pass to a 32-bit sequence.
    ///
    /// Zig-zag correction happens in the first pass only (`is_second_pass ==
    /// false`) for RLE and NONE. DELTA folds it into the reconstruction: a
    /// signed second pass accumulates plain deltas, every other case
    /// accumulates zig-zag deltas.
    pub fn decode_int_sequence(
        &self,
        values: Vec<i32>,
        technique: LogicalLevelTechnique,
        metadata: &StreamMetadata,
        is_signed: bool,
        is_second_pass: bool,
    ) -> Result<Vec<i32>, MltError> {
        log_metric!(
            "event"="int_pass",
            "technique"=technique,
            "second_pass"=is_second_pass,
            "len"=values.len()
        );
        let zigzag_pass = is_signed && !is_second_pass;

        match technique {
            LogicalLevelTechnique::Rle => {
                let encoding = self.rle_encoding(metadata)?;
                let mut decoded = rle::decode(
                    &values,
                    encoding.runs as usize,
                    encoding.num_rle_values as usize,
                )?;
                if zigzag_pass {
                    zigzag::decode_in_place(&mut decoded);
                }
                Ok(decoded)
            }
            LogicalLevelTechnique::Delta => {
                if is_second_pass && is_signed {
                    Ok(delta::decode(values))
                } else {
                    Ok(delta::decode_zigzag(values))
                }
            }
            LogicalLevelTechnique::None => {
                let mut values = values;
                if zigzag_pass {
                    zigzag::decode_in_place(&mut values);
                }
                Ok(values)
            }
            LogicalLevelTechnique::Morton => {
                let encoding = morton_encoding(metadata)?;
                morton::decode_codes(&values, &encoding)
            }
            LogicalLevelTechnique::ComponentwiseDelta | LogicalLevelTechnique::PseudoDecimal => {
                Err(MltError::UnsupportedTechnique(format!(
                    "logical technique {} is not supported for integers",
                    technique
                )))
            }
        }
    }

    /// Applies one logical pass to a 64-bit sequence.
    ///
    /// RLE zig-zag decodes its expansion whenever the stream is signed, DELTA
    /// always accumulates zig-zag deltas and NONE is the identity.
    pub fn decode_long_sequence(
        &self,
        values: Vec<i64>,
        technique: LogicalLevelTechnique,
        metadata: &StreamMetadata,
        is_signed: bool,
    ) -> Result<Vec<i64>, MltError> {
        log_metric!("event"="long_pass", "technique"=technique, "len"=values.len());

        match technique {
            LogicalLevelTechnique::Rle => {
                let encoding = self.rle_encoding(metadata)?;
                let mut decoded = rle::decode(
                    &values,
                    encoding.runs as usize,
                    encoding.num_rle_values as usize,
                )?;
                if is_signed {
                    zigzag::decode_in_place(&mut decoded);
                }
                Ok(decoded)
            }
            LogicalLevelTechnique::Delta => Ok(delta::decode_zigzag(values)),
            LogicalLevelTechnique::None => Ok(values),
            LogicalLevelTechnique::Morton
            | LogicalLevelTechnique::ComponentwiseDelta
            | LogicalLevelTechnique::PseudoDecimal => Err(MltError::UnsupportedTechnique(format!(
                "logical technique {} is not supported for longs",
                technique
            ))),
        }
    }

    //==============================================================================
    // 3. Helpers
    //==============================================================================

    /// Checks everything that can be checked before a byte is read and returns
    /// the number of physical values to decode.
    fn prepare(&self, metadata: &StreamMetadata) -> Result<usize, MltError> {
        if metadata.physical_technique != PhysicalLevelTechnique::Varint {
            return Err(MltError::UnsupportedTechnique(format!(
                "physical technique {} is not supported",
                metadata.physical_technique
            )));
        }
        if self.config.validate_metadata {
            metadata.validate()?;
        }
        let num_values = metadata.num_values as usize;
        self.config.check_stream_len(num_values, "stream")?;
        Ok(num_values)
    }

    fn rle_encoding(&self, metadata: &StreamMetadata) -> Result<RleEncoding, MltError> {
        match metadata.encoding {
            StreamEncoding::Rle(encoding) => {
                self.config
                    .check_stream_len(encoding.num_rle_values as usize, "RLE stream")?;
                Ok(encoding)
            }
            other => Err(MltError::MalformedStream(format!(
                "RLE technique requires RLE metadata, got {:?}",
                other
            ))),
        }
    }
}

fn morton_encoding(metadata: &StreamMetadata) -> Result<MortonEncoding, MltError> {
    match metadata.encoding {
        StreamEncoding::Morton(encoding) => Ok(encoding),
        other => Err(MltError::MalformedStream(format!(
            "Morton technique requires Morton metadata, got {:?}",
            other
        ))),
    }
}

/// Runs a stream decode and puts the cursor back where it was if it fails.
fn with_rewind<T, F>(cursor: &mut Cursor<&[u8]>, decode: F) -> Result<T, MltError>
where
    F: FnOnce(&mut Cursor<&[u8]>) -> Result<T, MltError>,
{
    let start = cursor.position();
    let result = decode(cursor);
    if result.is_err() {
        cursor.set_position(start);
    }
    result
}
