use std::path::{Path, PathBuf};

use crate::{quality, Result, SteganoError};

pub fn prepare() -> CompareApi {
    CompareApi::default()
}

/// PSNR between an original audio file and its modified version.
#[derive(Default, Debug)]
pub struct CompareApi {
    original: Option<PathBuf>,
    modified: Option<PathBuf>,
}

impl CompareApi {
    pub fn original<A: AsRef<Path>>(mut self, original: A) -> Self {
        self.original = Some(original.as_ref().to_path_buf());
        self
    }

    pub fn modified<A: AsRef<Path>>(mut self, modified: A) -> Self {
        self.modified = Some(modified.as_ref().to_path_buf());
        self
    }

    /// PSNR in dB, `f64::INFINITY` if both decode to the same samples
    pub fn execute(self) -> Result<f64> {
        let Some(original) = self.original else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(modified) = self.modified else {
            return Err(SteganoError::TargetNotSet);
        };

        quality::compare_files(&original, &modified)
    }
}
