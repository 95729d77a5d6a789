use std::path::PathBuf;

use clap::Args;
use log::info;
use mp3stego_core::{CodecOptions, SteganoError};

use crate::cli::{ask_for_key, KeyArgs};
use crate::CliResult;

/// Unveils data from an MP3 file
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// MP3 file that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "mp3 source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled data will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,

    #[command(flatten)]
    pub key: KeyArgs,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let key = self.key.resolve(self.key.random, false)?;
        let options = CodecOptions::default()
            .with_random(self.key.random)
            .with_key(key);

        let unveiled =
            match mp3stego_core::commands::unveil(&self.media, &self.output_file, options.clone()) {
                // the data turned out to be encrypted, ask for the key once
                Err(SteganoError::CipherKeyInvalid) if self.key.key.is_none() => {
                    let options = options.with_key(ask_for_key(false)?);
                    mp3stego_core::commands::unveil(&self.media, &self.output_file, options)?
                }
                result => result?,
            };
        info!(
            "unveiled {} bytes, hidden with {} bits per byte",
            unveiled.payload.len(),
            unveiled.lsb_count
        );

        Ok(())
    }
}
