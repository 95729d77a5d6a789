//! # mp3stego Core API
//!
//! Hides arbitrary data in the audio data bytes of MP3 frames. Frame headers,
//! CRC words, side information and ID3 tags are never touched, the output
//! stays a valid MP3 file.
//!
//! The building blocks live in [`media`]:
//! - [`media::mp3`] finds frames and the mutable audio data spans
//! - [`media::capacity`] accounts for the embeddable bits
//! - [`media::sequencer`] orders them, sequentially or keyed
//! - [`media::lsb_codec`] writes and reads the payload envelope
//! - [`media::payload::cipher`] optionally encrypts the payload
//!
//! [`engine`] ties them together on byte buffers, [`api`] and [`commands`]
//! work on files. [`quality`] measures the impact of hiding as PSNR.
//!
//! # Usage Examples
//!
//! ## Hide data inside an MP3 file
//!
//! ```rust
//! use mp3stego_core::media::LsbCount;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! mp3stego_core::api::hide::prepare()
//!     .with_message("Hello, World!")   // will hide this message inside the mp3
//!     .with_lsb_count(LsbCount::new(2).unwrap())
//!     .with_cipher(true)                // will encrypt the message with the key
//!     .using_key("SuperSecret42")
//!     .with_cover("tests/audio/plain/carrier.mp3")
//!     .with_output(temp_dir.path().join("carrier-with-secret.mp3"))
//!     .execute()
//!     .expect("Failed to hide message in mp3");
//! ```
//!
//! ## Unveil data from an MP3 file
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let stego = temp_dir.path().join("carrier-with-secret.mp3");
//! # mp3stego_core::api::hide::prepare()
//! #     .with_message("Hello, World!")
//! #     .with_random(true)
//! #     .using_key("SuperSecret42")
//! #     .with_cover("tests/audio/plain/carrier.mp3")
//! #     .with_output(&stego)
//! #     .execute()
//! #     .unwrap();
//!
//! let unveiled = mp3stego_core::api::unveil::prepare()
//!     .from_secret_file(&stego)
//!     .with_random(true)
//!     .using_key("SuperSecret42")
//!     .into_file(temp_dir.path().join("secret-message.txt"))
//!     .execute()
//!     .expect("Failed to unveil message from mp3");
//!
//! assert_eq!(unveiled.payload, b"Hello, World!");
//! ```
//!
//! ## Work on byte buffers
//!
//! ```rust
//! use mp3stego_core::engine;
//! use mp3stego_core::media::CodecOptions;
//!
//! let cover = std::fs::read("tests/audio/plain/carrier.mp3").unwrap();
//! let options = CodecOptions::default().with_random(true).with_key("key");
//!
//! let stego = engine::hide(&cover, b"secret", &options).unwrap();
//! assert_eq!(engine::unveil(&stego, &options).unwrap().payload, b"secret");
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod commands;
pub mod engine;
pub mod error;
pub mod key;
pub mod media;
pub mod quality;
pub mod result;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::engine::Unveiled;
pub use crate::error::SteganoError;
pub use crate::key::Key;
pub use crate::media::{Capacity, CodecOptions, LsbCount, PositionMode};
pub use crate::result::Result;
