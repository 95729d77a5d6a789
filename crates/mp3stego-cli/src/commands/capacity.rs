use std::path::PathBuf;

use clap::Args;
use mp3stego_core::LsbCount;

use crate::cli::parse_lsb_count;
use crate::CliResult;

/// Shows how much data an MP3 file can hide
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// MP3 file to inspect
    #[arg(short = 'i', long = "in", value_name = "mp3 file", required = true)]
    pub cover: PathBuf,

    /// Only show the capacity for this number of bits per byte
    #[arg(short = 'n', long = "lsb", value_name = "bits", value_parser = parse_lsb_count)]
    pub lsb_count: Option<LsbCount>,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let counts: Vec<LsbCount> = match self.lsb_count {
            Some(lsb_count) => vec![lsb_count],
            None => LsbCount::all().collect(),
        };

        for lsb_count in counts {
            let capacity = mp3stego_core::commands::capacity(&self.cover, lsb_count)?;
            println!(
                "{} bit(s) per byte: {} bytes ({} audio data bytes)",
                lsb_count,
                capacity.max_payload_bytes(),
                capacity.total_bytes
            );
        }

        Ok(())
    }
}
