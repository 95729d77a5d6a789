//! Capacity accounting over audio data spans.
//!
//! The envelope prefix always takes the first [`PREFIX_BITS`] mutable bytes at
//! 1 bit each, the body uses every remaining byte at the configured width.

use log::debug;

use crate::media::mp3::AudioSpan;
use crate::media::LsbCount;
use crate::{Result, SteganoError};

/// Bits of the envelope prefix: 32 bit length, cipher flag, 2 bit lsb count.
pub const PREFIX_BITS: usize = 35;

/// One embeddable bit, `bit_index` 0 is the least significant bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitSlot {
    pub byte_offset: usize,
    pub bit_index: u8,
}

/// `width` consecutive low bits of one byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    pub byte_offset: usize,
    pub width: u8,
}

impl Chunk {
    /// Bit slots of this chunk, most significant first.
    pub fn slots(self) -> impl Iterator<Item = BitSlot> + Clone {
        (0..self.width).rev().map(move |bit_index| BitSlot {
            byte_offset: self.byte_offset,
            bit_index,
        })
    }
}

/// Iterator over the chunks of a list of spans, ascending by byte offset.
#[derive(Clone, Debug)]
pub struct Chunks<'s> {
    spans: &'s [AudioSpan],
    width: u8,
    span: usize,
    offset: usize,
}

impl Iterator for Chunks<'_> {
    type Item = Chunk;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let span = self.spans.get(self.span)?;
            if self.offset < span.len {
                let chunk = Chunk {
                    byte_offset: span.start + self.offset,
                    width: self.width,
                };
                self.offset += 1;
                return Some(chunk);
            }
            self.span += 1;
            self.offset = 0;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .spans
            .iter()
            .skip(self.span)
            .map(|s| s.len)
            .sum::<usize>()
            .saturating_sub(self.offset);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

/// One chunk per mutable byte, in ascending order.
pub fn enumerate_chunks(spans: &[AudioSpan], width: LsbCount) -> Chunks<'_> {
    Chunks {
        spans,
        width: width.get(),
        span: 0,
        offset: 0,
    }
}

/// Every embeddable bit slot, ascending by byte, high to low bit within a byte.
///
/// The iterator can be cloned to restart the traversal.
pub fn enumerate_slots(
    spans: &[AudioSpan],
    lsb_count: LsbCount,
) -> impl Iterator<Item = BitSlot> + Clone + '_ {
    enumerate_chunks(spans, lsb_count).flat_map(Chunk::slots)
}

/// Raw number of bits available at `lsb_count` bits per byte.
pub fn capacity_bits(spans: &[AudioSpan], lsb_count: LsbCount) -> usize {
    total_bytes(spans) * lsb_count.get() as usize
}

fn total_bytes(spans: &[AudioSpan]) -> usize {
    spans.iter().map(|s| s.len).sum()
}

/// Capacity of a cover for one lsb count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacity {
    /// Mutable audio data bytes.
    pub total_bytes: usize,
    pub lsb_count: LsbCount,
    pub prefix_bits: usize,
    /// Bits left for the body once the prefix bytes are taken.
    pub body_bits: usize,
}

impl Capacity {
    pub fn of(spans: &[AudioSpan], lsb_count: LsbCount) -> Self {
        let total_bytes = total_bytes(spans);
        let capacity = Capacity {
            total_bytes,
            lsb_count,
            prefix_bits: PREFIX_BITS,
            body_bits: total_bytes.saturating_sub(PREFIX_BITS) * lsb_count.get() as usize,
        };
        debug!("{capacity:?}");

        capacity
    }

    /// Bytes usable by the body.
    pub fn body_bytes(&self) -> usize {
        self.total_bytes.saturating_sub(PREFIX_BITS)
    }

    /// Bits that can actually be written, prefix and body.
    pub fn available_bits(&self) -> usize {
        self.total_bytes.min(self.prefix_bits) + self.body_bits
    }

    /// Largest payload, in bytes, that fits the cover.
    pub fn max_payload_bytes(&self) -> usize {
        if self.total_bytes < self.prefix_bits {
            return 0;
        }

        (self.body_bits / 8).min(u32::MAX as usize)
    }
}

/// Check that an envelope body of `payload_len` bytes fits `capacity`.
pub fn try_reserve(payload_len: usize, capacity: &Capacity) -> Result<()> {
    let required_bits = payload_len
        .saturating_mul(8)
        .saturating_add(capacity.prefix_bits);
    let available_bits = capacity.available_bits();

    if payload_len > u32::MAX as usize || required_bits > available_bits {
        return Err(SteganoError::Capacity {
            required_bits,
            available_bits,
        });
    }

    Ok(())
}
