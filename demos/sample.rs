//! Example writing and reading back a mix of bytes, bits and bit-fields
//!
//! ## Running This Example
//!
//! ```bash
//! cargo run -p bitfile --example sample
//! ```

use bitfile::{BitFile, BitFileResult, BitStream, ByteStream};
use std::io::SeekFrom;

const NUM_CALLS: u64 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("bitfile - Sample");
    println!("================\n");

    let path = std::env::temp_dir().join("bitfile_sample.bin");

    // Open bit file for writing
    let mut file = BitFile::open(&path, "w")?;
    write_test(&mut file)?;
    file.close()?;

    // Now read back writes
    let mut file = BitFile::open(&path, "r")?;
    read_test(&mut file)?;
    file.close()?;

    // Open bit file for reading and writing
    let mut file = BitFile::open(&path, "r+")?;
    write_test(&mut file)?;
    file.seek(SeekFrom::Start(0))?;
    read_test(&mut file)?;
    file.close()?;

    let size = std::fs::metadata(&path)?.len();
    println!("\n✓ Sample completed ({} bytes in {})", size, path.display());
    std::fs::remove_file(&path)?;

    Ok(())
}

fn write_test<S: ByteStream>(file: &mut BitStream<S>) -> BitFileResult<()> {
    println!("Writing characters:");
    for c in b'A'..b'A' + NUM_CALLS as u8 {
        print!(" {}", c as char);
        file.write_byte(c)?;
    }
    println!();

    println!("Writing bits:");
    let mut bit = true;
    for _ in 0..NUM_CALLS {
        print!(" {}", bit as u8);
        file.write_bit(bit)?;
        bit = !bit;
    }
    println!();

    println!("Writing characters:");
    for c in b'F'..b'F' + NUM_CALLS as u8 {
        print!(" {}", c as char);
        file.write_byte(c)?;
    }
    println!();

    println!("Writing 32 bits MS byte to LS byte:");
    for i in 1..=NUM_CALLS {
        let value = 0x1111_1111 * i;
        println!("  {:#x}", value);
        file.write_bits(value, 32)?;
    }

    println!("Writing 12 bits LS byte to MS byte:");
    for i in 1..=NUM_CALLS {
        let value = 0x111 * i;
        println!("  {:#x}", value);
        file.write_bits_le(value, 12)?;
    }

    // Write out any remaining bits
    file.flush_output()?;
    Ok(())
}

fn read_test<S: ByteStream>(file: &mut BitStream<S>) -> BitFileResult<()> {
    println!("Reading characters:");
    for _ in 0..NUM_CALLS {
        print!(" {}", file.read_byte()? as char);
    }
    println!();

    println!("Reading bits:");
    for _ in 0..NUM_CALLS {
        print!(" {}", file.read_bit()? as u8);
    }
    println!();

    println!("Reading characters:");
    for _ in 0..NUM_CALLS {
        print!(" {}", file.read_byte()? as char);
    }
    println!();

    println!("Reading 32 bits MS byte to LS byte:");
    for _ in 0..NUM_CALLS {
        println!("  {:#x}", file.read_bits(32)?);
    }

    println!("Reading 12 bits LS byte to MS byte:");
    for _ in 0..NUM_CALLS {
        println!("  {:#x}", file.read_bits_le(12)?);
    }
    Ok(())
}
