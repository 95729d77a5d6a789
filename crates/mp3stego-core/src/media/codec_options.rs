use std::fmt::{self, Display, Formatter};

use crate::media::permutation::SeedState;
use crate::media::sequencer::PositionMode;
use crate::{Key, Result, SteganoError};

/// Number of low bits used per audio data byte, always within `1..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LsbCount(u8);

impl LsbCount {
    pub const ONE: LsbCount = LsbCount(1);
    pub const MAX: LsbCount = LsbCount(4);

    pub fn new(count: u8) -> Result<Self> {
        match count {
            1..=4 => Ok(Self(count)),
            _ => Err(SteganoError::InvalidLsbCount(count)),
        }
    }

    #[inline]
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Mask selecting the low bits of a byte.
    #[inline]
    pub fn mask(&self) -> u8 {
        (1u8 << self.0) - 1
    }

    /// All valid counts in ascending order.
    pub fn all() -> impl Iterator<Item = LsbCount> {
        (1..=4).map(LsbCount)
    }
}

impl Default for LsbCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for LsbCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for LsbCount {
    type Error = SteganoError;

    fn try_from(count: u8) -> Result<Self> {
        Self::new(count)
    }
}

/// Codec configuration for hiding and unveiling.
///
/// Passed by reference into every entry point and never mutated there.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// Bits per audio data byte used for the body.
    pub lsb_count: LsbCount,

    /// Visit body chunks in a keyed pseudo-random order instead of sequentially.
    pub random: bool,

    /// Encrypt the payload with the substitution cipher before embedding.
    pub cipher: bool,

    /// Key for `random` and `cipher`.
    pub key: Key,
}

impl CodecOptions {
    pub fn with_lsb_count(mut self, lsb_count: LsbCount) -> Self {
        self.lsb_count = lsb_count;
        self
    }

    pub fn with_random(mut self, random: bool) -> Self {
        self.random = random;
        self
    }

    pub fn with_cipher(mut self, cipher: bool) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn with_key<K: Into<Key>>(mut self, key: K) -> Self {
        self.key = key.into();
        self
    }

    /// Reject option combinations that need a key but have none.
    pub fn validate(&self) -> Result<()> {
        if self.random && !self.key.is_set() {
            return Err(SteganoError::KeyRequired);
        }
        if self.cipher && !self.key.is_set() {
            return Err(SteganoError::CipherKeyInvalid);
        }

        Ok(())
    }

    /// Body traversal order for these options.
    pub fn position_mode(&self) -> Result<PositionMode> {
        if !self.random {
            return Ok(PositionMode::Sequential);
        }

        match self.key.as_str() {
            Some(key) => Ok(PositionMode::Keyed(SeedState::from_key(key))),
            None => Err(SteganoError::KeyRequired),
        }
    }
}
