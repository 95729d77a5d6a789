use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use super::cipher;
use crate::media::capacity::PREFIX_BITS;
use crate::media::{CodecOptions, LsbCount};
use crate::{Key, Result, SteganoError};

/// Bytes needed to hold the packed prefix bits.
pub const PREFIX_BYTES: usize = PREFIX_BITS.div_ceil(8);

const LENGTH_BITS: u32 = 32;
const LSB_COUNT_BITS: u32 = 2;

/// Flags stored in the envelope prefix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnvelopeFlags {
    pub cipher_enabled: bool,
    pub lsb_count: LsbCount,
}

/// Fixed size prefix of an embedded envelope.
///
/// Bit layout, most significant bit first:
///
/// ```text
/// [32 bit body length][1 bit cipher][2 bit lsb count - 1]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopePrefix {
    pub length: u32,
    pub flags: EnvelopeFlags,
}

impl EnvelopePrefix {
    /// Pack the prefix, the unused tail bits of the last byte are zero.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = BitWriter::endian(Vec::with_capacity(PREFIX_BYTES), BigEndian);
        writer.write(LENGTH_BITS, self.length)?;
        writer.write_bit(self.flags.cipher_enabled)?;
        writer.write(LSB_COUNT_BITS, self.flags.lsb_count.get() - 1)?;
        writer.byte_align()?;

        Ok(writer.into_writer())
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut reader = BitReader::endian(bytes, BigEndian);
        let length = reader.read::<u32>(LENGTH_BITS)?;
        let cipher_enabled = reader.read_bit()?;
        let lsb_count = LsbCount::new(reader.read::<u8>(LSB_COUNT_BITS)? + 1)?;

        Ok(Self {
            length,
            flags: EnvelopeFlags {
                cipher_enabled,
                lsb_count,
            },
        })
    }
}

/// What actually gets embedded: flags plus the possibly encrypted secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayloadEnvelope {
    pub flags: EnvelopeFlags,
    pub body: Vec<u8>,
}

impl PayloadEnvelope {
    /// Wrap `secret` for embedding with `options`, encrypting it if requested.
    pub fn seal(secret: &[u8], options: &CodecOptions) -> Result<Self> {
        let body = if options.cipher {
            let key = options.key.as_str().ok_or(SteganoError::CipherKeyInvalid)?;
            cipher::encrypt(secret, key)?
        } else {
            secret.to_vec()
        };

        Ok(Self {
            flags: EnvelopeFlags {
                cipher_enabled: options.cipher,
                lsb_count: options.lsb_count,
            },
            body,
        })
    }

    /// Recover the secret, decrypting the body if the envelope says so.
    pub fn open(self, key: &Key) -> Result<Vec<u8>> {
        if !self.flags.cipher_enabled {
            return Ok(self.body);
        }

        let key = key.as_str().ok_or(SteganoError::CipherKeyInvalid)?;
        cipher::decrypt(&self.body, key)
    }

    pub fn prefix(&self) -> Result<EnvelopePrefix> {
        let length = u32::try_from(self.body.len()).map_err(|_| SteganoError::Capacity {
            required_bits: self.body.len().saturating_mul(8) + PREFIX_BITS,
            available_bits: u32::MAX as usize * 8 + PREFIX_BITS,
        })?;

        Ok(EnvelopePrefix {
            length,
            flags: self.flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_layout() {
        let prefix = EnvelopePrefix {
            length: 0x0102_0304,
            flags: EnvelopeFlags {
                cipher_enabled: true,
                lsb_count: LsbCount::new(3).unwrap(),
            },
        };
        let bytes = prefix.to_bytes().unwrap();

        // cipher bit 1, lsb count 3 - 1 = 0b10, followed by 5 zero bits
        assert_eq!(bytes, vec![0x01, 0x02, 0x03, 0x04, 0b1100_0000]);
        assert_eq!(bytes.len(), PREFIX_BYTES);
        assert_eq!(EnvelopePrefix::from_bytes(&bytes).unwrap(), prefix);
    }

    #[test]
    fn test_prefix_from_short_input() {
        assert!(EnvelopePrefix::from_bytes(&[0x00, 0x01]).is_err());
    }

    #[test]
    fn test_seal_and_open_plain() {
        let options = CodecOptions::default().with_lsb_count(LsbCount::new(2).unwrap());
        let envelope = PayloadEnvelope::seal(b"Hello World!", &options).unwrap();

        assert_eq!(envelope.body, b"Hello World!");
        assert!(!envelope.flags.cipher_enabled);
        assert_eq!(envelope.prefix().unwrap().length, 12);
        assert_eq!(envelope.open(&Key::default()).unwrap(), b"Hello World!");
    }

    #[test]
    fn test_seal_and_open_with_cipher() {
        let options = CodecOptions::default()
            .with_cipher(true)
            .with_key("SuperSecret42");
        let envelope = PayloadEnvelope::seal(b"Hello World!", &options).unwrap();

        assert!(envelope.flags.cipher_enabled);
        assert_ne!(envelope.body, b"Hello World!");
        assert!(matches!(
            envelope.clone().open(&Key::default()),
            Err(SteganoError::CipherKeyInvalid)
        ));
        assert_eq!(
            envelope.open(&"SuperSecret42".into()).unwrap(),
            b"Hello World!"
        );
    }

    #[test]
    fn test_seal_cipher_without_key() {
        let options = CodecOptions::default().with_cipher(true);

        assert!(matches!(
            PayloadEnvelope::seal(b"data", &options),
            Err(SteganoError::CipherKeyInvalid)
        ));
    }
}
