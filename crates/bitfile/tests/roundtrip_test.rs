//! Integration tests for writing bit-fields to a file and reading them back

use bitfile::{BitFile, BitStream, ByteStream, Mode};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::io::SeekFrom;
use std::path::PathBuf;

const NUM_CALLS: u64 = 5;

/// Helper to get a per-test scratch file
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bitfile_{}_{}", name, std::process::id()))
}

/// Helper producing random (value, width) pairs, widths in `1..=max_width`
fn random_fields(seed: u64, len: usize, max_width: u32) -> Vec<(u64, u32)> {
    let mut r = SmallRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let width = r.gen_range(1..=max_width);
            let value = if width == 64 {
                r.gen::<u64>()
            } else {
                r.gen_range(0..(1u64 << width))
            };
            (value, width)
        })
        .collect()
}

/// Writes chars, single bits, MS-byte-first and LS-byte-first fields
fn write_sample<S: ByteStream>(stream: &mut BitStream<S>) {
    for c in b'A'..b'A' + NUM_CALLS as u8 {
        stream.write_byte(c).unwrap();
    }
    for i in 0..NUM_CALLS {
        stream.write_bit(i % 2 == 0).unwrap();
    }
    for c in b'F'..b'F' + NUM_CALLS as u8 {
        stream.write_byte(c).unwrap();
    }
    for i in 1..=NUM_CALLS {
        stream.write_bits(0x1111_1111 * i, 32).unwrap();
    }
    for i in 1..=NUM_CALLS {
        stream.write_bits_le(0x111 * i, 12).unwrap();
    }
    stream.flush_output().unwrap();
}

fn read_sample<S: ByteStream>(stream: &mut BitStream<S>) {
    for c in b'A'..b'A' + NUM_CALLS as u8 {
        assert_eq!(stream.read_byte().unwrap(), c);
    }
    for i in 0..NUM_CALLS {
        assert_eq!(stream.read_bit().unwrap(), i % 2 == 0);
    }
    for c in b'F'..b'F' + NUM_CALLS as u8 {
        assert_eq!(stream.read_byte().unwrap(), c);
    }
    for i in 1..=NUM_CALLS {
        assert_eq!(stream.read_bits(32).unwrap(), 0x1111_1111 * i);
    }
    for i in 1..=NUM_CALLS {
        assert_eq!(stream.read_bits_le(12).unwrap(), 0x111 * i);
    }
}

#[test]
fn test_random_fields_roundtrip() {
    let path = scratch_path("random_fields");
    let fields = random_fields(0, 2000, 32);

    let mut writer = BitFile::open(&path, "w").unwrap();
    for &(value, width) in &fields {
        writer.write_bits(value, width).unwrap();
    }
    writer.close().unwrap();

    let total_bits: u64 = fields.iter().map(|&(_, width)| width as u64).sum();
    let file_len = std::fs::metadata(&path).unwrap().len();
    assert_eq!(file_len, total_bits.div_ceil(8));

    let mut reader = BitFile::open(&path, "r").unwrap();
    for &(value, width) in &fields {
        assert_eq!(reader.read_bits(width).unwrap(), value);
    }
    reader.close().unwrap();
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_wide_fields_roundtrip() {
    let path = scratch_path("wide_fields");
    let fields = random_fields(1, 500, 64);

    {
        let mut writer = BitFile::open(&path, "w").unwrap();
        for &(value, width) in &fields {
            writer.write_bits(value, width).unwrap();
        }
    }

    let mut reader = BitFile::open(&path, "r").unwrap();
    for &(value, width) in &fields {
        assert_eq!(reader.read_bits(width).unwrap(), value);
    }
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_partial_byte_padding() {
    let path = scratch_path("partial_padding");
    let bits = [true, true, false, true, true];

    let mut writer = BitFile::open(&path, "w").unwrap();
    for &bit in &bits {
        writer.write_bit(bit).unwrap();
    }
    assert_eq!(writer.pending_output_bits(), 5);
    writer.close().unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), vec![0b1101_1000]);

    let mut reader = BitFile::open(&path, "r").unwrap();
    for &bit in &bits {
        assert_eq!(reader.read_bit().unwrap(), bit);
    }
    // The three padding bits are still readable as zeros
    assert_eq!(reader.read_bits(3).unwrap(), 0);
    assert!(reader.read_bit().unwrap_err().is_end_of_stream());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_sample_sequence_all_modes() {
    let path = scratch_path("sample_sequence");

    let mut file = BitFile::open(&path, "w").unwrap();
    write_sample(&mut file);
    file.close().unwrap();

    let mut file = BitFile::open(&path, "r").unwrap();
    read_sample(&mut file);
    file.close().unwrap();

    // Existing content is kept by "r+" and overwritten in place
    let len = std::fs::metadata(&path).unwrap().len();
    let mut file = BitFile::open(&path, "r+").unwrap();
    assert_eq!(file.mode(), Mode::ReadWrite);
    write_sample(&mut file);
    assert_eq!(file.seek(SeekFrom::Start(0)).unwrap(), 0);
    read_sample(&mut file);
    file.close().unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), len);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_typed_fields_roundtrip() {
    let path = scratch_path("typed_fields");

    let mut writer = BitFile::open(&path, "w").unwrap();
    writer.write_field(5u8, 3).unwrap();
    writer.write_field(1000u16, 10).unwrap();
    writer.write_field(u32::MAX, 32).unwrap();
    writer.write_field(42usize, 7).unwrap();
    writer.close().unwrap();

    let mut reader = BitFile::open(&path, "r").unwrap();
    assert_eq!(reader.read_field::<u8>(3).unwrap(), 5);
    assert_eq!(reader.read_field::<u16>(10).unwrap(), 1000);
    assert_eq!(reader.read_field::<u32>(32).unwrap(), u32::MAX);
    assert_eq!(reader.read_field::<usize>(7).unwrap(), 42);
    std::fs::remove_file(&path).unwrap();
}
