//! Traversal order of the embeddable chunks.
//!
//! Embedding and extraction both materialize one [`Sequence`] up front and
//! walk it, so they always visit the same bytes in the same order.

use log::debug;

use crate::media::capacity::{enumerate_chunks, Chunk, PREFIX_BITS};
use crate::media::mp3::AudioSpan;
use crate::media::permutation::{Permutation, SeedState};
use crate::media::LsbCount;

/// How the body chunks are ordered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionMode {
    /// Ascending byte offset.
    Sequential,
    /// Keyed pseudo-random permutation of the body chunks.
    Keyed(SeedState),
}

/// Materialized chunk order of one hide or unveil run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    /// 1 bit chunks for the envelope prefix, always sequential.
    pub prefix: Vec<Chunk>,
    /// `lsb_count` bit chunks for the envelope body.
    pub body: Vec<Chunk>,
}

impl Sequence {
    /// Number of bits the body chunks can carry.
    pub fn body_bits(&self) -> usize {
        self.body.iter().map(|c| c.width as usize).sum()
    }
}

/// Build the chunk order for `spans`.
///
/// The first [`PREFIX_BITS`] bytes go to the prefix, every other byte is a
/// body chunk of width `lsb_count`. Keyed mode only permutes the body, bits
/// within a chunk keep their order.
pub fn sequence(spans: &[AudioSpan], lsb_count: LsbCount, mode: &PositionMode) -> Sequence {
    let prefix: Vec<Chunk> = enumerate_chunks(spans, LsbCount::ONE)
        .take(PREFIX_BITS)
        .collect();
    let body: Vec<Chunk> = enumerate_chunks(spans, lsb_count)
        .skip(PREFIX_BITS)
        .collect();

    let body = match mode {
        PositionMode::Sequential => body,
        PositionMode::Keyed(seed) => Permutation::from_seed(*seed, body.len()).apply(&body),
    };
    debug!(
        "sequenced {} prefix and {} body chunks in {:?} order",
        prefix.len(),
        body.len(),
        mode
    );

    Sequence { prefix, body }
}
