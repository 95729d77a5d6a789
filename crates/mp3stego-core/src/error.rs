use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents a cover without a single valid MP3 frame. For example a WAV file or random data
    #[error("No valid MP3 frame found in {scanned_bytes} scanned bytes")]
    FrameParse { scanned_bytes: usize },

    /// Represents a payload that does not fit into the audio data of the cover
    #[error(
        "Capacity Error: the payload requires {required_bits} bits but the cover offers only {available_bits} bits"
    )]
    Capacity {
        required_bits: usize,
        available_bits: usize,
    },

    /// Represents a keyed position mode that was requested without a key
    #[error("Configuration Error: random positions require a non-empty key")]
    KeyRequired,

    /// Represents a cipher that was requested without a usable key
    #[error("Configuration Error: the cipher requires a non-empty key")]
    CipherKeyInvalid,

    /// Represents an envelope that cannot be read back, for example a file without secrets or a wrong key
    #[error(
        "Extraction Error: the envelope declares {declared_bytes} bytes but only {available_bytes} bytes fit the carrier"
    )]
    Extraction {
        declared_bytes: usize,
        available_bytes: usize,
    },

    /// Represents two sample sequences that cannot be compared
    #[error("Sample count mismatch: original has {original} samples, modified has {modified}")]
    SampleLengthMismatch { original: usize, modified: usize },

    /// Represents two audio files with different sample rates
    #[error("Sample rate mismatch: original is {original} Hz, modified is {modified} Hz")]
    SampleRateMismatch { original: u32, modified: u32 },

    /// Represents a LSB count outside of 1..=4
    #[error("Invalid LSB count {0}, only 1 to 4 bits per byte are supported")]
    InvalidLsbCount(u8),

    /// Represents an audio file that could not be decoded into samples
    #[error("Audio decoding error: {0}")]
    AudioDecode(String),

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret file or message")]
    MissingSecret,
}
