use std::path::{Path, PathBuf};

use log::info;

use super::shared::{read_file, write_atomically};
use crate::engine::{self, Unveiled};
use crate::media::CodecOptions;
use crate::{Key, Result, SteganoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, only `random` and `key` matter for unveiling
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the MP3 file that contains the secret
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// Write the unveiled secret to this file
    pub fn into_file(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// The secret was hidden in keyed order
    pub fn with_random(mut self, random: bool) -> Self {
        self.options.random = random;
        self
    }

    /// Set the key used when hiding
    /// If `None` is passed, no key is used
    pub fn using_key<K: Into<Key>>(mut self, key: K) -> Self {
        self.options.key = key.into();
        self
    }

    /// Execute the unveil process and block until it is finished
    ///
    /// Without an output file the secret is only returned.
    pub fn execute(self) -> Result<Unveiled> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let stego = read_file(&secret_media)?;
        let unveiled = engine::unveil(&stego, &self.options)?;

        if let Some(output) = self.output {
            write_atomically(&output, &unveiled.payload)?;
            info!(
                "unveiled {} bytes from {} into {}",
                unveiled.payload.len(),
                secret_media.display(),
                output.display()
            );
        }

        Ok(unveiled)
    }
}
