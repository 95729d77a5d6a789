//! Byte level hide and unveil.
//!
//! Everything here works on buffers, file handling lives in [`crate::api`].
//! Every check (options, frame parsing, capacity) runs before the output
//! buffer is created.

use log::{debug, info};

use crate::media::capacity::{try_reserve, Capacity};
use crate::media::payload::PayloadEnvelope;
use crate::media::sequencer::sequence;
use crate::media::{lsb_codec, mp3, CodecOptions, LsbCount};
use crate::Result;

/// Result of an unveil run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unveiled {
    pub payload: Vec<u8>,
    /// Lsb count found in the envelope prefix.
    pub lsb_count: LsbCount,
    /// True if the payload was stored encrypted.
    pub cipher_enabled: bool,
}

/// Hide `secret` in the audio data of `cover`.
///
/// Returns the stego stream, it differs from `cover` only in the low
/// `options.lsb_count` bits of audio data bytes.
pub fn hide(cover: &[u8], secret: &[u8], options: &CodecOptions) -> Result<Vec<u8>> {
    options.validate()?;
    let mode = options.position_mode()?;

    let layout = mp3::parse(cover)?;
    let capacity = Capacity::of(&layout.spans, options.lsb_count);
    try_reserve(secret.len(), &capacity)?;

    let envelope = PayloadEnvelope::seal(secret, options)?;
    let sequence = sequence(&layout.spans, options.lsb_count, &mode);
    let stego = lsb_codec::embed(cover, &sequence, &envelope)?;
    info!(
        "hid {} bytes in {} frames, capacity is {} bytes",
        secret.len(),
        layout.frames.len(),
        capacity.max_payload_bytes()
    );

    Ok(stego)
}

/// Unveil the payload hidden in `stego`.
///
/// The lsb count and the cipher flag come from the envelope, only `random`
/// and `key` of `options` are used.
pub fn unveil(stego: &[u8], options: &CodecOptions) -> Result<Unveiled> {
    let mode = options.position_mode()?;

    let layout = mp3::parse(stego)?;
    let envelope = lsb_codec::extract(stego, &layout.spans, &mode)?;
    let lsb_count = envelope.flags.lsb_count;
    let cipher_enabled = envelope.flags.cipher_enabled;
    let payload = envelope.open(&options.key)?;
    debug!(
        "unveiled {} bytes, cipher {cipher_enabled}, lsb count {lsb_count}",
        payload.len()
    );

    Ok(Unveiled {
        payload,
        lsb_count,
        cipher_enabled,
    })
}

/// Capacity of `cover` for `lsb_count`.
pub fn capacity(cover: &[u8], lsb_count: LsbCount) -> Result<Capacity> {
    let layout = mp3::parse(cover)?;

    Ok(Capacity::of(&layout.spans, lsb_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        cover_with_frames, id3v2_tag, MPEG1_L3_128K_CRC, MPEG1_L3_128K_STEREO,
    };
    use crate::SteganoError;

    fn cover() -> Vec<u8> {
        let mut cover = id3v2_tag(64);
        cover.extend(cover_with_frames(&[
            MPEG1_L3_128K_STEREO,
            MPEG1_L3_128K_CRC,
            MPEG1_L3_128K_STEREO,
        ]));
        cover
    }

    #[test]
    fn test_hide_and_unveil() {
        let options = CodecOptions::default()
            .with_lsb_count(LsbCount::new(2).unwrap())
            .with_random(true)
            .with_cipher(true)
            .with_key("SuperSecret42");
        let stego = hide(&cover(), b"Hello World!", &options).unwrap();
        let unveiled = unveil(&stego, &options).unwrap();

        assert_eq!(unveiled.payload, b"Hello World!");
        assert_eq!(unveiled.lsb_count.get(), 2);
        assert!(unveiled.cipher_enabled);
    }

    #[test]
    fn test_unveil_takes_lsb_count_from_envelope() {
        let hide_options = CodecOptions::default().with_lsb_count(LsbCount::new(3).unwrap());
        let stego = hide(&cover(), b"Hello World!", &hide_options).unwrap();
        let unveiled = unveil(&stego, &CodecOptions::default()).unwrap();

        assert_eq!(unveiled.payload, b"Hello World!");
        assert_eq!(unveiled.lsb_count.get(), 3);
    }

    #[test]
    fn test_unveil_encrypted_without_key() {
        let options = CodecOptions::default().with_cipher(true).with_key("key");
        let stego = hide(&cover(), b"Hello World!", &options).unwrap();

        assert!(matches!(
            unveil(&stego, &CodecOptions::default()),
            Err(SteganoError::CipherKeyInvalid)
        ));
    }

    #[test]
    fn test_hide_validates_options_first() {
        let options = CodecOptions::default().with_random(true);

        assert!(matches!(
            hide(b"not an mp3", b"secret", &options),
            Err(SteganoError::KeyRequired)
        ));
    }

    #[test]
    fn test_hide_into_non_mp3() {
        assert!(matches!(
            hide(&[0u8; 2048], b"secret", &CodecOptions::default()),
            Err(SteganoError::FrameParse { .. })
        ));
    }

    #[test]
    fn test_hide_too_large_secret() {
        let capacity = capacity(&cover(), LsbCount::ONE).unwrap();
        let secret = vec![0x42u8; capacity.max_payload_bytes() + 1];

        assert!(matches!(
            hide(&cover(), &secret, &CodecOptions::default()),
            Err(SteganoError::Capacity { .. })
        ));
    }

    #[test]
    fn test_capacity() {
        let capacity = capacity(&cover(), LsbCount::MAX).unwrap();

        assert_eq!(capacity.total_bytes, 381 + 379 + 381 - 4 - 3);
        assert_eq!(capacity.body_bits, (381 + 379 + 381 - 7 - 35) * 4);
    }
}
