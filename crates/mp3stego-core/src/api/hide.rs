use std::path::{Path, PathBuf};

use log::info;

use super::shared::{read_file, write_atomically};
use crate::media::{CodecOptions, LsbCount};
use crate::{engine, Key, Result, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Debug)]
enum Secret {
    File(PathBuf),
    Message(String),
}

#[derive(Default, Debug)]
pub struct HideApi {
    secret: Option<Secret>,
    cover: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_lsb_count(mut self, lsb_count: LsbCount) -> Self {
        self.options.lsb_count = lsb_count;
        self
    }

    /// Spread the secret over the whole cover in a keyed order
    pub fn with_random(mut self, random: bool) -> Self {
        self.options.random = random;
        self
    }

    /// Encrypt the secret with the key before hiding it
    pub fn with_cipher(mut self, cipher: bool) -> Self {
        self.options.cipher = cipher;
        self
    }

    /// Set the key used for the keyed order and the cipher
    /// If `None` is passed, no key is used
    pub fn using_key<K: Into<Key>>(mut self, key: K) -> Self {
        self.options.key = key.into();
        self
    }

    /// This is the MP3 file the secret is hidden in, it is never modified
    pub fn with_cover<A: AsRef<Path>>(mut self, cover: A) -> Self {
        self.cover = Some(cover.as_ref().to_path_buf());
        self
    }

    /// Hide the raw content of this file
    pub fn with_secret_file<A: AsRef<Path>>(mut self, secret_file: A) -> Self {
        self.secret = Some(Secret::File(secret_file.as_ref().to_path_buf()));
        self
    }

    /// Hide this text message
    pub fn with_message(mut self, message: &str) -> Self {
        self.secret = Some(Secret::Message(message.to_string()));
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the hide process and block until the output file is in place
    pub fn execute(self) -> Result<()> {
        let Some(cover) = self.cover else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };
        let Some(secret) = self.secret else {
            return Err(SteganoError::MissingSecret);
        };
        self.options.validate()?;

        let secret = match secret {
            Secret::File(file) => read_file(&file)?,
            Secret::Message(message) => message.into_bytes(),
        };
        let cover_data = read_file(&cover)?;

        let stego = engine::hide(&cover_data, &secret, &self.options)?;
        write_atomically(&output, &stego)?;
        info!(
            "hid {} bytes from {} in {}",
            secret.len(),
            cover.display(),
            output.display()
        );

        Ok(())
    }
}
