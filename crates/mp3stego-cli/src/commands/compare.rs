use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Measures the audio quality impact of hiding as PSNR
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Original audio file, MP3 or WAV
    #[arg(value_name = "original")]
    pub original: PathBuf,

    /// Modified audio file, MP3 or WAV
    #[arg(value_name = "modified")]
    pub modified: PathBuf,
}

impl CompareArgs {
    pub fn run(self) -> CliResult<()> {
        let psnr = mp3stego_core::commands::compare(&self.original, &self.modified)?;
        if psnr.is_infinite() {
            println!("PSNR: inf dB (identical audio)");
        } else {
            println!("PSNR: {psnr:.2} dB");
        }

        Ok(())
    }
}
