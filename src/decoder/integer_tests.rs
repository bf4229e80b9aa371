use std::io::Cursor;

use crate::config::DecoderConfig;
use crate::decoder::IntegerDecoder;
use crate::error::MltError;
use crate::kernels::delta::tests::difference;
use crate::kernels::varint::tests::encode_all;
use crate::kernels::zigzag::tests::{encode_i32, encode_i64};
use crate::types::{LogicalLevelTechnique, PhysicalLevelTechnique, StreamMetadata};

use LogicalLevelTechnique::{ComponentwiseDelta, Delta, Morton, Rle};
use PhysicalLevelTechnique::{FastPfor, Varint};

const NONE: LogicalLevelTechnique = LogicalLevelTechnique::None;

// Test Helpers
fn wire_i32(values: &[i32]) -> Vec<u8> {
    let raw: Vec<u64> = values.iter().map(|&v| v as u32 as u64).collect();
    encode_all(&raw)
}

fn wire_i64(values: &[i64]) -> Vec<u8> {
    let raw: Vec<u64> = values.iter().map(|&v| v as u64).collect();
    encode_all(&raw)
}

fn decode_ints(bytes: &[u8], metadata: &StreamMetadata, is_signed: bool) -> Result<Vec<i32>, MltError> {
    let mut cursor = Cursor::new(bytes);
    let result = IntegerDecoder::default().decode_int_stream(&mut cursor, metadata, is_signed);
    if result.is_ok() {
        assert_eq!(cursor.position() as usize, bytes.len());
    }
    result
}

//==================================================================================
// 1. 32-bit Streams
//==================================================================================

#[test]
fn test_signed_delta_then_none_fixture() {
    // Encoder: deltas [5, -2, -5, 12], then zig-zag -> [10, 3, 9, 24].
    let bytes = [0x0Au8, 0x03, 0x09, 0x18];
    let metadata = StreamMetadata::plain(4, Varint, Delta, NONE);

    // NONE (first pass) zig-zag decodes, DELTA (second pass) sums plain deltas.
    assert_eq!(decode_ints(&bytes, &metadata, true).unwrap(), vec![5, 3, -2, 10]);
}

#[test]
fn test_unsigned_delta_uses_zigzag_deltas() {
    // Unsigned deltas are still zig-zag encoded: [1, 2, 3] -> [2, 4, 6].
    let bytes = [0x02u8, 0x04, 0x06];
    let metadata = StreamMetadata::plain(3, Varint, Delta, NONE);
    assert_eq!(decode_ints(&bytes, &metadata, false).unwrap(), vec![1, 3, 6]);
}

#[test]
fn test_signed_none_none_zigzags_once() {
    let original = vec![0, -1, 1, i32::MIN, i32::MAX];
    let encoded: Vec<i32> = original.iter().map(|&v| encode_i32(v)).collect();
    let metadata = StreamMetadata::plain(5, Varint, NONE, NONE);
    assert_eq!(decode_ints(&wire_i32(&encoded), &metadata, true).unwrap(), original);
}

#[test]
fn test_unsigned_none_none_is_identity() {
    let metadata = StreamMetadata::plain(3, Varint, NONE, NONE);
    let bytes = wire_i32(&[7, 300, -1]);
    assert_eq!(decode_ints(&bytes, &metadata, false).unwrap(), vec![7, 300, -1]);
}

#[test]
fn test_signed_delta_over_rle() {
    // Values 1..=5 have deltas all 1, zig-zag 2, packed as a single run.
    let metadata = StreamMetadata::rle(2, Varint, Delta, Rle, 1, 5);
    let bytes = wire_i32(&[5, 2]);
    assert_eq!(decode_ints(&bytes, &metadata, true).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_unsigned_rle() {
    let metadata = StreamMetadata::rle(4, Varint, Rle, NONE, 2, 5);
    let bytes = wire_i32(&[3, 2, 7, 9]);
    assert_eq!(decode_ints(&bytes, &metadata, false).unwrap(), vec![7, 7, 7, 9, 9]);
}

#[test]
fn test_signed_rle_in_second_pass_zigzags_packed_values() {
    // The NONE pass zig-zag decodes the whole packed sequence, run lengths included.
    let packed: Vec<i32> = [3, 2, -1, 2].iter().map(|&v| encode_i32(v)).collect();
    let metadata = StreamMetadata::rle(4, Varint, Rle, NONE, 2, 5);
    assert_eq!(
        decode_ints(&wire_i32(&packed), &metadata, true).unwrap(),
        vec![-1, -1, -1, 2, 2]
    );
}

#[test]
fn test_signed_rle_in_first_pass_zigzags_expansion() {
    let metadata = StreamMetadata::rle(4, Varint, NONE, Rle, 2, 3);
    let bytes = wire_i32(&[1, 2, encode_i32(-4), encode_i32(6)]);
    assert_eq!(decode_ints(&bytes, &metadata, true).unwrap(), vec![-4, 6, 6]);
}

#[test]
fn test_morton_as_integer_technique_is_direct() {
    let metadata = StreamMetadata::morton(2, Varint, Morton, NONE, 2, 0);
    let bytes = wire_i32(&[2, 3]);
    assert_eq!(decode_ints(&bytes, &metadata, false).unwrap(), vec![0, 1, 1, 1]);
}

#[test]
fn test_int_sequence_delta_pass_selection() {
    let decoder = IntegerDecoder::default();
    let metadata = StreamMetadata::plain(3, Varint, Delta, NONE);
    let zigzagged = vec![4, 1, 6];

    let first_pass = decoder
        .decode_int_sequence(zigzagged.clone(), Delta, &metadata, true, false)
        .unwrap();
    assert_eq!(first_pass, vec![2, 1, 4]);

    let signed_second = decoder
        .decode_int_sequence(zigzagged.clone(), Delta, &metadata, true, true)
        .unwrap();
    assert_eq!(signed_second, vec![4, 5, 11]);

    let unsigned_second = decoder
        .decode_int_sequence(zigzagged, Delta, &metadata, false, true)
        .unwrap();
    assert_eq!(unsigned_second, vec![2, 1, 4]);
}

#[test]
fn test_int_sequence_none_second_pass_skips_zigzag() {
    let decoder = IntegerDecoder::default();
    let metadata = StreamMetadata::plain(2, Varint, NONE, NONE);
    let values = decoder
        .decode_int_sequence(vec![3, 4], NONE, &metadata, true, true)
        .unwrap();
    assert_eq!(values, vec![3, 4]);
}

#[test]
fn test_int_unsupported_logical_technique() {
    let metadata = StreamMetadata::plain(2, Varint, ComponentwiseDelta, NONE);
    let bytes = wire_i32(&[1, 2]);
    let mut cursor = Cursor::new(&bytes[..]);
    let result = IntegerDecoder::default().decode_int_stream(&mut cursor, &metadata, false);
    assert!(matches!(result, Err(MltError::UnsupportedTechnique(_))));
    assert_eq!(cursor.position(), 0);
}

//==================================================================================
// 2. 64-bit Streams
//==================================================================================

#[test]
fn test_long_delta_roundtrip() {
    let original: Vec<i64> = vec![100, -50, 1 << 40, i64::MIN, i64::MAX];
    let encoded: Vec<i64> = difference(&original).into_iter().map(encode_i64).collect();
    let bytes = wire_i64(&encoded);
    let metadata = StreamMetadata::plain(5, Varint, Delta, NONE);

    let mut cursor = Cursor::new(&bytes[..]);
    let decoded = IntegerDecoder::default()
        .decode_long_stream(&mut cursor, &metadata, true)
        .unwrap();
    assert_eq!(decoded, original);
    assert_eq!(cursor.position() as usize, bytes.len());
}

#[test]
fn test_long_signed_rle_zigzags_values_only() {
    let metadata = StreamMetadata::rle(4, Varint, Rle, NONE, 2, 3);
    let bytes = wire_i64(&[2, 1, encode_i64(-7), encode_i64(8)]);
    let mut cursor = Cursor::new(&bytes[..]);
    let decoded = IntegerDecoder::default()
        .decode_long_stream(&mut cursor, &metadata, true)
        .unwrap();
    assert_eq!(decoded, vec![-7, -7, 8]);
}

#[test]
fn test_long_signed_none_is_identity() {
    let metadata = StreamMetadata::plain(2, Varint, NONE, NONE);
    let bytes = wire_i64(&[u32::MAX as i64 + 1, 3]);
    let mut cursor = Cursor::new(&bytes[..]);
    let decoded = IntegerDecoder::default()
        .decode_long_stream(&mut cursor, &metadata, true)
        .unwrap();
    // NONE never zig-zag decodes on the 64-bit path.
    assert_eq!(decoded, vec![u32::MAX as i64 + 1, 3]);
}

#[test]
fn test_long_order_is_technique1_first() {
    // technique1 = RLE expands [2 x 3]; technique2 = DELTA then sums zig-zag deltas.
    let metadata = StreamMetadata::rle(2, Varint, Rle, Delta, 1, 3);
    let bytes = wire_i64(&[3, encode_i64(2)]);
    let mut cursor = Cursor::new(&bytes[..]);
    let decoded = IntegerDecoder::default()
        .decode_long_stream(&mut cursor, &metadata, false)
        .unwrap();
    assert_eq!(decoded, vec![2, 4, 6]);
}

#[test]
fn test_long_morton_is_unsupported() {
    let metadata = StreamMetadata::morton(1, Varint, Morton, NONE, 4, 0);
    let bytes = wire_i64(&[1]);
    let mut cursor = Cursor::new(&bytes[..]);
    let result = IntegerDecoder::default().decode_long_stream(&mut cursor, &metadata, false);
    assert!(matches!(result, Err(MltError::UnsupportedTechnique(_))));
}

//==================================================================================
// 3. Morton Streams
//==================================================================================

#[test]
fn test_morton_stream_is_delta_coded() {
    let metadata = StreamMetadata::morton(2, Varint, Morton, NONE, 2, 0);
    let bytes = [0x02u8, 0x01];
    let mut cursor = Cursor::new(&bytes[..]);
    let vertices = IntegerDecoder::default()
        .decode_morton_stream(&mut cursor, &metadata)
        .unwrap();
    assert_eq!(vertices, vec![0, 1, 1, 1]);
    assert_eq!(cursor.position(), 2);
}

#[test]
fn test_morton_stream_requires_morton_metadata() {
    let metadata = StreamMetadata::plain(2, Varint, NONE, NONE);
    let bytes = [0x02u8, 0x01];
    let mut cursor = Cursor::new(&bytes[..]);
    let result = IntegerDecoder::default().decode_morton_stream(&mut cursor, &metadata);
    assert!(matches!(result, Err(MltError::MalformedStream(_))));
    assert_eq!(cursor.position(), 0);
}

//==================================================================================
// 4. Failure Handling & Cursor Contract
//==================================================================================

#[test]
fn test_unsupported_physical_technique_consumes_nothing() {
    let bytes = wire_i32(&[1, 2, 3]);
    let metadata = StreamMetadata::plain(3, FastPfor, NONE, NONE);
    let decoder = IntegerDecoder::default();

    let mut cursor = Cursor::new(&bytes[..]);
    let result = decoder.decode_int_stream(&mut cursor, &metadata, false);
    assert!(matches!(result, Err(MltError::UnsupportedTechnique(_))));
    assert_eq!(cursor.position(), 0);

    let result = decoder.decode_long_stream(&mut cursor, &metadata, false);
    assert!(matches!(result, Err(MltError::UnsupportedTechnique(_))));
    assert_eq!(cursor.position(), 0);

    let morton = StreamMetadata::morton(3, PhysicalLevelTechnique::None, Morton, NONE, 4, 0);
    let result = decoder.decode_morton_stream(&mut cursor, &morton);
    assert!(matches!(result, Err(MltError::UnsupportedTechnique(_))));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_rle_without_payload_is_malformed() {
    let bytes = wire_i32(&[3, 2, 7, 9]);
    let metadata = StreamMetadata::plain(4, Varint, Rle, NONE);

    // Caught by metadata validation.
    assert!(matches!(decode_ints(&bytes, &metadata, false), Err(MltError::MalformedStream(_))));

    // Caught by the dispatcher when validation is off.
    let decoder = IntegerDecoder::new(DecoderConfig {
        validate_metadata: false,
        ..DecoderConfig::default()
    });
    let mut cursor = Cursor::new(&bytes[..]);
    let result = decoder.decode_int_stream(&mut cursor, &metadata, false);
    assert!(matches!(result, Err(MltError::MalformedStream(_))));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_rle_length_mismatch_rewinds_cursor() {
    let bytes = wire_i32(&[3, 2, 7, 9]);
    let metadata = StreamMetadata::rle(4, Varint, Rle, NONE, 2, 6);
    let mut cursor = Cursor::new(&bytes[..]);
    let result = IntegerDecoder::default().decode_int_stream(&mut cursor, &metadata, false);
    assert!(matches!(result, Err(MltError::MalformedStream(_))));
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_stream_limit_from_config() {
    let decoder = IntegerDecoder::new(DecoderConfig {
        max_stream_values: 2,
        ..DecoderConfig::default()
    });
    let bytes = wire_i32(&[1, 2, 3]);
    let mut cursor = Cursor::new(&bytes[..]);

    let metadata = StreamMetadata::plain(3, Varint, NONE, NONE);
    let result = decoder.decode_int_stream(&mut cursor, &metadata, false);
    assert!(matches!(result, Err(MltError::MalformedStream(_))));
    assert_eq!(cursor.position(), 0);

    // The expanded RLE length is bounded too.
    let rle = StreamMetadata::rle(2, Varint, Rle, NONE, 1, 3);
    let rle_bytes = wire_i32(&[3, 1]);
    let mut cursor = Cursor::new(&rle_bytes[..]);
    let result = decoder.decode_int_stream(&mut cursor, &rle, false);
    assert!(matches!(result, Err(MltError::MalformedStream(_))));
}

#[test]
fn test_truncated_stream_is_varint_error() {
    let metadata = StreamMetadata::plain(3, Varint, NONE, NONE);
    let bytes = [0x01u8, 0x02];
    assert!(matches!(decode_ints(&bytes, &metadata, false), Err(MltError::VarintDecode(_))));
}

#[test]
fn test_consecutive_streams_share_one_buffer() {
    let mut bytes = wire_i32(&[encode_i32(-3), encode_i32(4)]);
    bytes.extend(wire_i64(&[2, 1, 300, 500]));
    bytes.extend([0x02, 0x01]);

    let decoder = IntegerDecoder::default();
    let mut cursor = Cursor::new(&bytes[..]);

    let ints = decoder
        .decode_int_stream(&mut cursor, &StreamMetadata::plain(2, Varint, NONE, NONE), true)
        .unwrap();
    assert_eq!(ints, vec![-3, 4]);

    let longs = decoder
        .decode_long_stream(&mut cursor, &StreamMetadata::rle(4, Varint, Rle, NONE, 2, 3), false)
        .unwrap();
    assert_eq!(longs, vec![300, 300, 500]);

    let vertices = decoder
        .decode_morton_stream(&mut cursor, &StreamMetadata::morton(2, Varint, Morton, NONE, 2, 0))
        .unwrap();
    assert_eq!(vertices, vec![0, 1, 1, 1]);

    assert_eq!(cursor.position() as usize, bytes.len());
}
