use std::path::PathBuf;

use clap::Args;
use mp3stego_core::{CodecOptions, LsbCount};

use crate::cli::{parse_lsb_count, KeyArgs};
use crate::CliResult;

/// Hides data in the audio data of an MP3 file
#[derive(Args, Debug)]
pub struct HideArgs {
    /// MP3 file the data is hidden in, used readonly.
    #[arg(short = 'i', long = "in", value_name = "mp3 file", required = true)]
    pub cover: PathBuf,

    /// Final MP3 will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output mp3 file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the MP3
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,

    /// Number of low bits used per audio data byte, 1 to 4
    #[arg(short = 'n', long = "lsb", value_name = "bits", default_value = "1", value_parser = parse_lsb_count)]
    pub lsb_count: LsbCount,

    /// Encrypt the data with the key before hiding it
    #[arg(short, long)]
    pub encrypt: bool,

    #[command(flatten)]
    pub key: KeyArgs,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        let key = self.key.resolve(self.key.random || self.encrypt, true)?;
        let options = CodecOptions::default()
            .with_lsb_count(self.lsb_count)
            .with_random(self.key.random)
            .with_cipher(self.encrypt)
            .with_key(key);

        match (self.data_file, self.message) {
            (Some(data_file), _) => mp3stego_core::commands::hide(
                &self.cover,
                &data_file,
                &self.write_to_file,
                options,
            ),
            (None, Some(message)) => mp3stego_core::commands::hide_message(
                &self.cover,
                &message,
                &self.write_to_file,
                options,
            ),
            (None, None) => Err(mp3stego_core::SteganoError::MissingSecret),
        }
    }
}
