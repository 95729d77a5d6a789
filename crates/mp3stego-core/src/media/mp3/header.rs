//! MPEG audio frame header definitions.
//!
//! Bit layout of the 4 byte header (ISO/IEC 11172-3, 13818-3):
//!
//! ```text
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//! A sync, B version, C layer, D protection (0 = CRC follows),
//! E bitrate index, F sample rate index, G padding, H private,
//! I channel mode, J mode extension, K copyright, L original, M emphasis
//! ```

use byteorder::{BigEndian, ByteOrder};

/// Length of the fixed frame header in bytes.
pub const HEADER_LEN: usize = 4;

/// Length of the optional CRC word following the header.
pub const CRC_LEN: usize = 2;

/// MPEG audio version (header bits B).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MpegVersion {
    Mpeg1,
    Mpeg2,
    Mpeg25,
}

/// MPEG audio layer (header bits C).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Layer {
    I,
    II,
    III,
}

/// Channel mode (header bits I).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

/// Bitrates in kbps for MPEG-1, indexed by layer then bitrate index.
/// `0` marks the free format (index 0) and the reserved value (index 15).
#[rustfmt::skip]
const BITRATES_MPEG1: [[u16; 16]; 3] = [
    [0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0],
    [0, 32, 48, 56,  64,  80,  96, 112, 128, 160, 192, 224, 256, 320, 384, 0],
    [0, 32, 40, 48,  56,  64,  80,  96, 112, 128, 160, 192, 224, 256, 320, 0],
];

/// Bitrates in kbps for MPEG-2 and MPEG-2.5, Layer II and III share one row.
#[rustfmt::skip]
const BITRATES_MPEG2: [[u16; 16]; 3] = [
    [0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0],
    [0,  8, 16, 24, 32, 40, 48,  56,  64,  80,  96, 112, 128, 144, 160, 0],
    [0,  8, 16, 24, 32, 40, 48,  56,  64,  80,  96, 112, 128, 144, 160, 0],
];

/// Sample rates in Hz, index 3 is reserved.
const SAMPLE_RATES: [[u32; 3]; 3] = [
    [44100, 48000, 32000],
    [22050, 24000, 16000],
    [11025, 12000, 8000],
];

/// Decoded and validated MPEG audio frame header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: MpegVersion,
    pub layer: Layer,
    /// True if a 16 bit CRC follows the header.
    pub has_crc: bool,
    pub bitrate_index: u8,
    pub bitrate_kbps: u16,
    pub sample_rate_index: u8,
    pub sample_rate: u32,
    pub has_padding: bool,
    pub channel_mode: ChannelMode,
}

impl FrameHeader {
    /// Returns true if the first 11 bits of `bytes` are the frame sync pattern.
    #[inline]
    pub fn has_sync(bytes: &[u8]) -> bool {
        bytes.len() >= 2 && bytes[0] == 0xFF && bytes[1] & 0xE0 == 0xE0
    }

    /// Decode a header from the first 4 bytes.
    ///
    /// Returns `None` if there is no sync pattern or any field holds a
    /// reserved value (version, layer, bitrate index 0 and 15, sample rate index 3).
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < HEADER_LEN || !Self::has_sync(bytes) {
            return None;
        }
        let raw = BigEndian::read_u32(&bytes[..HEADER_LEN]);

        let version = match (raw >> 19) & 0b11 {
            0b00 => MpegVersion::Mpeg25,
            0b10 => MpegVersion::Mpeg2,
            0b11 => MpegVersion::Mpeg1,
            _ => return None,
        };
        let layer = match (raw >> 17) & 0b11 {
            0b01 => Layer::III,
            0b10 => Layer::II,
            0b11 => Layer::I,
            _ => return None,
        };
        let has_crc = (raw >> 16) & 1 == 0;
        let bitrate_index = ((raw >> 12) & 0xF) as u8;
        let sample_rate_index = ((raw >> 10) & 0b11) as u8;
        let has_padding = (raw >> 9) & 1 == 1;
        let channel_mode = match (raw >> 6) & 0b11 {
            0b00 => ChannelMode::Stereo,
            0b01 => ChannelMode::JointStereo,
            0b10 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        };

        let bitrate_kbps = bitrate_kbps(version, layer, bitrate_index)?;
        let sample_rate = sample_rate(version, sample_rate_index)?;

        Some(FrameHeader {
            version,
            layer,
            has_crc,
            bitrate_index,
            bitrate_kbps,
            sample_rate_index,
            sample_rate,
            has_padding,
            channel_mode,
        })
    }

    /// Number of PCM samples per channel encoded in one frame.
    pub fn samples_per_frame(&self) -> usize {
        match (self.layer, self.version) {
            (Layer::I, _) => 384,
            (Layer::II, _) => 1152,
            (Layer::III, MpegVersion::Mpeg1) => 1152,
            (Layer::III, _) => 576,
        }
    }

    /// Size of a padding slot: 4 bytes for Layer I, 1 byte otherwise.
    fn slot_size(&self) -> usize {
        match self.layer {
            Layer::I => 4,
            _ => 1,
        }
    }

    /// Total frame length in bytes, header included.
    ///
    /// This is the standard formula, truncating:
    /// - Layer I: `(12 * bitrate / sample_rate + padding) * 4`
    /// - Layer II, Layer III MPEG-1: `144 * bitrate / sample_rate + padding`
    /// - Layer III MPEG-2/2.5: `72 * bitrate / sample_rate + padding`
    pub fn frame_length(&self) -> usize {
        let slot = self.slot_size();
        let slots_per_bit = self.samples_per_frame() / 8 / slot;
        let bitrate = self.bitrate_kbps as usize * 1000;
        let padding = usize::from(self.has_padding);

        (slots_per_bit * bitrate / self.sample_rate as usize + padding) * slot
    }

    /// Length of the Layer III side information block, 0 for Layer I and II.
    pub fn side_info_length(&self) -> usize {
        let mono = self.channel_mode == ChannelMode::Mono;
        match (self.layer, self.version, mono) {
            (Layer::III, MpegVersion::Mpeg1, true) => 17,
            (Layer::III, MpegVersion::Mpeg1, false) => 32,
            (Layer::III, _, true) => 9,
            (Layer::III, _, false) => 17,
            _ => 0,
        }
    }

    /// The fixed, never mutated part in front of the CRC: header plus side information.
    pub fn header_length(&self) -> usize {
        HEADER_LEN + self.side_info_length()
    }

    /// Offset of the first audio data byte relative to the frame start.
    pub fn audio_data_start(&self) -> usize {
        self.header_length() + if self.has_crc { CRC_LEN } else { 0 }
    }
}

fn bitrate_kbps(version: MpegVersion, layer: Layer, index: u8) -> Option<u16> {
    let row = match layer {
        Layer::I => 0,
        Layer::II => 1,
        Layer::III => 2,
    };
    let table = match version {
        MpegVersion::Mpeg1 => &BITRATES_MPEG1,
        MpegVersion::Mpeg2 | MpegVersion::Mpeg25 => &BITRATES_MPEG2,
    };

    match table[row][index as usize] {
        0 => None,
        kbps => Some(kbps),
    }
}

fn sample_rate(version: MpegVersion, index: u8) -> Option<u32> {
    let row = match version {
        MpegVersion::Mpeg1 => 0,
        MpegVersion::Mpeg2 => 1,
        MpegVersion::Mpeg25 => 2,
    };

    SAMPLE_RATES[row].get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mpeg1_layer3() {
        let header = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x64]).unwrap();

        assert_eq!(header.version, MpegVersion::Mpeg1);
        assert_eq!(header.layer, Layer::III);
        assert!(!header.has_crc);
        assert_eq!(header.bitrate_index, 9);
        assert_eq!(header.bitrate_kbps, 128);
        assert_eq!(header.sample_rate, 44100);
        assert!(!header.has_padding);
        assert_eq!(header.channel_mode, ChannelMode::JointStereo);
    }

    #[test]
    fn test_frame_length_mpeg1_layer3() {
        let plain = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x00]).unwrap();
        let padded = FrameHeader::parse(&[0xFF, 0xFB, 0x92, 0x00]).unwrap();

        assert_eq!(plain.frame_length(), 417);
        assert_eq!(padded.frame_length(), 418);
    }

    #[test]
    fn test_frame_length_mpeg2_layer3() {
        // MPEG-2, Layer III, 64 kbps, 22050 Hz
        let header = FrameHeader::parse(&[0xFF, 0xF3, 0x80, 0xC0]).unwrap();

        assert_eq!(header.version, MpegVersion::Mpeg2);
        assert_eq!(header.bitrate_kbps, 64);
        assert_eq!(header.sample_rate, 22050);
        assert_eq!(header.frame_length(), 208);
        assert_eq!(header.side_info_length(), 9);
    }

    #[test]
    fn test_frame_length_layer1() {
        // MPEG-1, Layer I, 384 kbps, 48000 Hz, padded
        let header = FrameHeader::parse(&[0xFF, 0xFF, 0xC6, 0x00]).unwrap();

        assert_eq!(header.layer, Layer::I);
        assert_eq!(header.bitrate_kbps, 384);
        assert_eq!(header.sample_rate, 48000);
        assert_eq!(header.frame_length(), (12 * 384_000 / 48000 + 1) * 4);
        assert_eq!(header.side_info_length(), 0);
    }

    #[test]
    fn test_frame_length_layer2() {
        // MPEG-1, Layer II, 192 kbps, 48000 Hz
        let header = FrameHeader::parse(&[0xFF, 0xFD, 0xA4, 0x00]).unwrap();

        assert_eq!(header.layer, Layer::II);
        assert_eq!(header.frame_length(), 576);
    }

    #[test]
    fn test_crc_moves_audio_data() {
        let with_crc = FrameHeader::parse(&[0xFF, 0xFA, 0x90, 0x00]).unwrap();
        let without_crc = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x00]).unwrap();

        assert!(with_crc.has_crc);
        assert_eq!(with_crc.audio_data_start(), without_crc.audio_data_start() + CRC_LEN);
    }

    #[test]
    fn test_side_info_lengths() {
        let stereo = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0x00]).unwrap();
        let mono = FrameHeader::parse(&[0xFF, 0xFB, 0x90, 0xC0]).unwrap();

        assert_eq!(stereo.header_length(), 36);
        assert_eq!(mono.header_length(), 21);
    }

    #[test]
    fn test_reject_reserved_fields() {
        // no sync
        assert_eq!(FrameHeader::parse(&[0xFF, 0x1B, 0x90, 0x00]), None);
        // reserved version
        assert_eq!(FrameHeader::parse(&[0xFF, 0xEB, 0x90, 0x00]), None);
        // reserved layer
        assert_eq!(FrameHeader::parse(&[0xFF, 0xF9, 0x90, 0x00]), None);
        // free format bitrate
        assert_eq!(FrameHeader::parse(&[0xFF, 0xFB, 0x00, 0x00]), None);
        // reserved bitrate
        assert_eq!(FrameHeader::parse(&[0xFF, 0xFB, 0xF0, 0x00]), None);
        // reserved sample rate
        assert_eq!(FrameHeader::parse(&[0xFF, 0xFB, 0x9C, 0x00]), None);
        // too short
        assert_eq!(FrameHeader::parse(&[0xFF, 0xFB, 0x90]), None);
    }
}
