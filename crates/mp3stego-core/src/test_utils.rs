//! Synthetic MP3 streams for unit tests.

use crate::media::mp3::FrameHeader;

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, stereo, no CRC: 417 byte frames.
pub const MPEG1_L3_128K_STEREO: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];

/// Same as [`MPEG1_L3_128K_STEREO`] with a CRC word after the header.
pub const MPEG1_L3_128K_CRC: [u8; 4] = [0xFF, 0xFA, 0x90, 0x00];

/// Same as [`MPEG1_L3_128K_STEREO`] with the padding bit set: 418 byte frames.
pub const MPEG1_L3_128K_PADDED: [u8; 4] = [0xFF, 0xFB, 0x92, 0x00];

/// One frame for `header`, the body filled with bytes that never form a sync pattern.
pub fn frame(header: [u8; 4]) -> Vec<u8> {
    let length = FrameHeader::parse(&header)
        .expect("test header is valid")
        .frame_length();
    let mut frame: Vec<u8> = (0..length).map(|i| (i * 7 % 251) as u8).collect();
    frame[..4].copy_from_slice(&header);

    frame
}

pub fn cover_with_frames(headers: &[[u8; 4]]) -> Vec<u8> {
    headers.iter().flat_map(|h| frame(*h)).collect()
}

/// An ID3v2.4 tag with `size` payload bytes, 10 + `size` bytes in total.
pub fn id3v2_tag(size: usize) -> Vec<u8> {
    let mut tag = vec![0u8; 10 + size];
    tag[..3].copy_from_slice(b"ID3");
    tag[3] = 4;
    for i in 0..4 {
        tag[6 + i] = ((size >> (7 * (3 - i))) & 0x7F) as u8;
    }

    tag
}
