//! Dump a file as fixed-width bit-fields, most significant bit first

use anyhow::{bail, Context, Result};
use bitfile::{consts::MAX_FIELD_BITS, BitFile, BitFileError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bitdump", about = "Dump a file as fixed-width bit-fields")]
struct Cli {
    /// Input file
    file: PathBuf,
    /// Width of each field in bits (1-64)
    #[arg(short, long, default_value_t = 8)]
    width: u32,
    /// Stop after this many fields
    #[arg(short = 'n', long)]
    count: Option<u64>,
    /// Bits to skip before the first field
    #[arg(short, long, default_value_t = 0)]
    skip: u64,
    /// Fields are stored least-significant byte first
    #[arg(long)]
    le: bool,
    /// Output radix
    #[arg(short, long, value_enum, default_value_t = Radix::Hex)]
    radix: Radix,
}

#[derive(Clone, Copy, ValueEnum)]
enum Radix {
    Bin,
    Dec,
    Hex,
}

fn format_field(value: u64, width: u32, radix: Radix) -> String {
    match radix {
        Radix::Bin => format!("{:0w$b}", value, w = width as usize),
        Radix::Dec => value.to_string(),
        Radix::Hex => format!("{:#0w$x}", value, w = width.div_ceil(4) as usize + 2),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.width == 0 || cli.width > MAX_FIELD_BITS {
        bail!("field width must be between 1 and {}", MAX_FIELD_BITS);
    }

    let mut file = BitFile::open(&cli.file, "r")
        .with_context(|| format!("opening {}", cli.file.display()))?;

    for _ in 0..cli.skip {
        file.read_bit().context("skipping leading bits")?;
    }

    let mut fields = 0u64;
    while cli.count.map_or(true, |max| fields < max) {
        let field = if cli.le {
            file.read_bits_le(cli.width)
        } else {
            file.read_bits(cli.width)
        };
        match field {
            Ok(value) => {
                println!("{:>8}: {}", fields, format_field(value, cli.width, cli.radix));
                fields += 1;
            }
            Err(BitFileError::EndOfStream) => break,
            Err(e) => return Err(e).context("reading field"),
        }
    }

    eprintln!("{} fields of {} bits", fields, cli.width);
    file.close()?;
    Ok(())
}
