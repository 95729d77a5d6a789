#![allow(dead_code)]

use mp3stego_core::media::mp3::FrameHeader;

pub const CARRIER: &str = "tests/audio/plain/carrier.mp3";

/// MPEG-1 Layer III mono, 40 frames of Huffman coded spectral lines (table 1)
/// with empty scale factors, no tags.
pub const TONE: &str = "tests/audio/plain/tone.mp3";

/// Offset of the first frame in [`CARRIER`], right after its ID3v2 tag.
pub const CARRIER_TAG_END: usize = 256;

/// Mutable audio data bytes in [`CARRIER`].
pub const CARRIER_AUDIO_BYTES: usize = 24401;

/// Builds synthetic MP3 streams, frame bodies come from a seeded generator.
pub struct CoverBuilder {
    data: Vec<u8>,
    rng: fastrand::Rng,
}

impl CoverBuilder {
    pub fn new(seed: u64) -> Self {
        Self {
            data: Vec::new(),
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// An ID3v2.4 tag declaring `size` bytes after its 10 byte header.
    pub fn id3v2(mut self, size: usize) -> Self {
        self.data.extend_from_slice(b"ID3\x04\x00\x00");
        for shift in [21, 14, 7, 0] {
            self.data.push(((size >> shift) & 0x7F) as u8);
        }
        // tag content with frame sync lookalikes that must be skipped
        self.data
            .extend((0..size).map(|i| if i % 5 == 0 { 0xFF } else { 0xFB }));
        self
    }

    /// `count` frames with `header`, side information and CRC words are zero.
    pub fn frames(mut self, header: [u8; 4], count: usize) -> Self {
        let parsed = FrameHeader::parse(&header).expect("valid test header");
        for _ in 0..count {
            self.data.extend_from_slice(&header);
            self.data
                .extend(std::iter::repeat(0u8).take(parsed.audio_data_start() - 4));
            let audio_bytes = parsed.frame_length() - parsed.audio_data_start();
            let mut audio = vec![0u8; audio_bytes];
            self.rng.fill(&mut audio);
            self.data.extend(audio);
        }
        self
    }

    pub fn id3v1(mut self) -> Self {
        let mut trailer = vec![0u8; 128];
        trailer[..3].copy_from_slice(b"TAG");
        trailer[3..10].copy_from_slice(b"trailer");
        self.data.extend(trailer);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo.
pub const MPEG1_L3: [u8; 4] = [0xFF, 0xFB, 0x90, 0x40];

/// Same with a CRC word.
pub const MPEG1_L3_CRC: [u8; 4] = [0xFF, 0xFA, 0x90, 0x40];

/// MPEG-2 Layer III, 64 kbps, 22.05 kHz, mono.
pub const MPEG2_L3_MONO: [u8; 4] = [0xFF, 0xF3, 0x80, 0xC0];

/// A cover mixing frame kinds, tags on both ends.
pub fn mixed_cover() -> Vec<u8> {
    CoverBuilder::new(7)
        .id3v2(500)
        .frames(MPEG1_L3, 4)
        .frames(MPEG1_L3_CRC, 3)
        .frames(MPEG1_L3, 3)
        .id3v1()
        .build()
}

pub fn secret(len: usize) -> Vec<u8> {
    let mut rng = fastrand::Rng::with_seed(len as u64);
    let mut secret = vec![0u8; len];
    rng.fill(&mut secret);
    secret
}
