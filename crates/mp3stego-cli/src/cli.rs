use clap::{Args, Parser, Subcommand};
use dialoguer::Password;
use mp3stego_core::{Key, LsbCount, SteganoError};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
    Compare(compare::CompareArgs),
}

/// Options shared by `hide` and `unveil`
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Spread the data over the whole file in an order derived from the key
    #[arg(short, long)]
    pub random: bool,

    /// Key for the random order and the cipher, asked for when needed but not given
    #[arg(short, long, value_name = "key")]
    pub key: Option<String>,
}

impl KeyArgs {
    /// The given key, or one typed in when `needs_key`
    pub fn resolve(&self, needs_key: bool, confirm: bool) -> CliResult<Key> {
        match &self.key {
            Some(key) => Ok(key.as_str().into()),
            None if needs_key => ask_for_key(confirm),
            None => Ok(Key::default()),
        }
    }
}

pub fn parse_lsb_count(value: &str) -> Result<LsbCount, String> {
    let count: u8 = value.parse().map_err(|e| format!("{e}"))?;
    LsbCount::new(count).map_err(|e| e.to_string())
}

pub fn ask_for_key(confirm: bool) -> CliResult<Key> {
    let prompt = Password::new().with_prompt("Key");
    let prompt = if confirm {
        prompt.with_confirmation("Repeat key", "Error: the keys don't match")
    } else {
        prompt
    };

    match prompt.interact() {
        Ok(key) => Ok(Key::from(key)),
        Err(dialoguer::Error::IO(e)) => Err(SteganoError::IoError(e)),
    }
}
