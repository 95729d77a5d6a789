//! Multi bit LSB embedding into MP3 audio data bytes.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use log::debug;

use crate::media::capacity::{enumerate_chunks, Chunk, PREFIX_BITS};
use crate::media::mp3::AudioSpan;
use crate::media::payload::{EnvelopePrefix, PayloadEnvelope, PREFIX_BYTES};
use crate::media::sequencer::{sequence, PositionMode, Sequence};
use crate::media::LsbCount;
use crate::{Result, SteganoError};

/// Write `envelope` into a copy of `cover` following `sequence`.
///
/// The prefix goes into the 1 bit prefix chunks, the body into the body
/// chunks, most significant bit first. A last chunk that is not filled
/// completely gets zeros in its low bits.
pub fn embed(cover: &[u8], sequence: &Sequence, envelope: &PayloadEnvelope) -> Result<Vec<u8>> {
    let prefix = envelope.prefix()?;
    let body_bits = envelope.body.len() * 8;
    if sequence.prefix.len() < PREFIX_BITS || body_bits > sequence.body_bits() {
        return Err(SteganoError::Capacity {
            required_bits: PREFIX_BITS + body_bits,
            available_bits: sequence.prefix.len() + sequence.body_bits(),
        });
    }

    let mut stego = cover.to_vec();
    write_chunks(&mut stego, &sequence.prefix, &prefix.to_bytes()?, PREFIX_BITS)?;
    let used = write_chunks(&mut stego, &sequence.body, &envelope.body, body_bits)?;
    debug!(
        "embedded {} body bytes into {} of {} chunks at {} bits each",
        envelope.body.len(),
        used,
        sequence.body.len(),
        envelope.flags.lsb_count
    );

    Ok(stego)
}

/// Read an envelope back from `stego`.
///
/// The prefix is read sequentially at 1 bit per byte, the body order is then
/// rebuilt with the lsb count stored in the prefix.
pub fn extract(stego: &[u8], spans: &[AudioSpan], mode: &PositionMode) -> Result<PayloadEnvelope> {
    let prefix_chunks: Vec<Chunk> = enumerate_chunks(spans, LsbCount::ONE)
        .take(PREFIX_BITS)
        .collect();
    if prefix_chunks.len() < PREFIX_BITS {
        return Err(SteganoError::Extraction {
            declared_bytes: PREFIX_BYTES,
            available_bytes: prefix_chunks.len() / 8,
        });
    }
    let prefix = EnvelopePrefix::from_bytes(&read_chunks(stego, &prefix_chunks, PREFIX_BITS)?)?;

    let sequence = sequence(spans, prefix.flags.lsb_count, mode);
    let declared_bytes = prefix.length as usize;
    let available_bytes = sequence.body_bits() / 8;
    if declared_bytes > available_bytes {
        return Err(SteganoError::Extraction {
            declared_bytes,
            available_bytes,
        });
    }

    let body = read_chunks(stego, &sequence.body, declared_bytes * 8)?;
    debug!(
        "extracted {} body bytes at {} bits per byte",
        body.len(),
        prefix.flags.lsb_count
    );

    Ok(PayloadEnvelope {
        flags: prefix.flags,
        body,
    })
}

/// Returns the number of chunks written to.
fn write_chunks(target: &mut [u8], chunks: &[Chunk], bits: &[u8], bit_count: usize) -> Result<usize> {
    let mut reader = BitReader::endian(bits, BigEndian);
    let mut remaining = bit_count;
    let mut used = 0;

    for chunk in chunks {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(chunk.width as usize) as u32;
        let value = reader.read::<u8>(take)? << (chunk.width as u32 - take);
        let mask = (1u8 << chunk.width) - 1;

        let byte = &mut target[chunk.byte_offset];
        *byte = (*byte & !mask) | value;

        remaining -= take as usize;
        used += 1;
    }

    Ok(used)
}

fn read_chunks(source: &[u8], chunks: &[Chunk], bit_count: usize) -> Result<Vec<u8>> {
    let mut writer = BitWriter::endian(Vec::with_capacity(bit_count.div_ceil(8)), BigEndian);
    let mut remaining = bit_count;

    for chunk in chunks {
        if remaining == 0 {
            break;
        }
        let take = remaining.min(chunk.width as usize) as u32;
        let mask = (1u8 << chunk.width) - 1;
        let value = (source[chunk.byte_offset] & mask) >> (chunk.width as u32 - take);
        writer.write(take, value)?;

        remaining -= take as usize;
    }
    writer.byte_align()?;

    Ok(writer.into_writer())
}
