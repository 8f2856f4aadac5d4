//! # Error Handling Examples
//!
//! This example demonstrates how each error of the bit stream API surfaces
//! and how callers can react to it.
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run -p bitfile --example error_handling
//! ```

use bitfile::{BitFile, BitFileError, BitStream, Mode};
use std::io::Cursor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("bitfile Error Handling Examples");
    println!("===============================\n");

    // ==================== INVALID MODE STRING ====================
    println!("1. Opening with an unknown mode string...");

    match BitFile::open(std::env::temp_dir().join("bitfile_errors.bin"), "a") {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(BitFileError::InvalidMode(msg)) => {
            println!("   ✓ Caught InvalidMode error");
            println!("   - Message: {}\n", msg);
        }
        Err(e) => println!("   ✗ Unexpected error: {:?}", e),
    }

    // ==================== WRITE ON READ-ONLY ====================
    println!("2. Writing to a read-only stream...");

    let mut reader = BitStream::new(Cursor::new(vec![0xB2]), Mode::ReadOnly);
    match reader.write_bit(true) {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}\n", e),
    }

    // ==================== END OF STREAM ====================
    println!("3. Reading past the end of the stream...");

    let value = reader.read_bits(8)?;
    println!("   - Read {:#04x}", value);
    match reader.read_bit() {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(BitFileError::EndOfStream) => println!("   ✓ Caught EndOfStream\n"),
        Err(e) => println!("   ✗ Unexpected error: {:?}", e),
    }

    // ==================== VALUE TOO WIDE ====================
    println!("4. Writing a value wider than its field...");

    let mut writer = BitStream::new(Cursor::new(Vec::new()), Mode::WriteOnly);
    match writer.write_bits(0x1F, 4) {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(BitFileError::ValueTooWide { value, width }) => {
            println!("   ✓ Caught ValueTooWide");
            println!("   - Value: {:#x}, Width: {}", value, width);
            println!("   - Nothing was written: {} pending bits\n", writer.pending_output_bits());
        }
        Err(e) => println!("   ✗ Unexpected error: {:?}", e),
    }

    // ==================== CLOSED STREAM ====================
    println!("5. Using a stream after close...");

    writer.close()?;
    match writer.write_bit(false) {
        Ok(_) => println!("   ✗ Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}\n", e),
    }

    // ==================== RECOVERY ====================
    println!("6. Counting fields until the stream runs out...");
    println!("   ✓ {}", count_fields(vec![0xFF, 0x00, 0xAB], 5)?);

    println!("\n✓ Error handling examples completed!");
    println!("\n💡 Tips:");
    println!("   - Match on BitFileError::EndOfStream to detect the end of input");
    println!("   - Dropping a stream flushes pending bits, close() reports flush errors");
    println!("   - Values are never truncated; mask them before writing if needed");

    Ok(())
}

/// Reads `width`-bit fields until the input is exhausted
fn count_fields(bytes: Vec<u8>, width: u32) -> Result<String, BitFileError> {
    let mut reader = BitStream::new(Cursor::new(bytes), Mode::ReadOnly);
    let mut count = 0;
    loop {
        match reader.read_bits(width) {
            Ok(_) => count += 1,
            Err(BitFileError::EndOfStream) => break,
            Err(e) => return Err(e),
        }
    }
    Ok(format!("{} complete {}-bit fields", count, width))
}
