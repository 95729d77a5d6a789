//! Frame walking for MP3 covers.
//!
//! Produces the list of frames and the audio data spans that are safe to
//! mutate. Everything else, tags, headers, CRC words and side information,
//! stays untouched.

use std::ops::Range;

use log::{debug, trace};

use super::header::{FrameHeader, HEADER_LEN};
use super::id3;
use crate::error::SteganoError;
use crate::result::Result;

/// Magics of a Xing or LAME Info tag at the start of the first frame's audio data.
const INFO_TAG_MAGICS: [&[u8; 4]; 2] = [b"Xing", b"Info"];

/// One MPEG audio frame found in the cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Offset of the sync pattern.
    pub offset: usize,
    /// Header plus side information, the CRC word is not included.
    pub header_length: usize,
    pub audio_data_offset: usize,
    pub audio_data_length: usize,
    pub header: FrameHeader,
}

impl Frame {
    fn new(offset: usize, header: FrameHeader) -> Self {
        let audio_data_offset = offset + header.audio_data_start();
        Frame {
            offset,
            header_length: header.header_length(),
            audio_data_offset,
            audio_data_length: offset + header.frame_length() - audio_data_offset,
            header,
        }
    }

    pub fn frame_length(&self) -> usize {
        self.header.frame_length()
    }

    /// Offset right after the frame.
    pub fn end(&self) -> usize {
        self.offset + self.frame_length()
    }

    pub fn has_crc(&self) -> bool {
        self.header.has_crc
    }

    pub fn has_padding(&self) -> bool {
        self.header.has_padding
    }

    pub fn audio_data(&self) -> AudioSpan {
        AudioSpan {
            start: self.audio_data_offset,
            len: self.audio_data_length,
        }
    }
}

/// A contiguous run of audio data bytes that may be mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioSpan {
    pub start: usize,
    pub len: usize,
}

impl AudioSpan {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Result of parsing a cover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mp3Layout {
    /// First byte after a leading ID3v2 tag, 0 without tag.
    pub tag_end: usize,
    /// First byte of a trailing ID3v1 tag, the input length without tag.
    pub trailer_start: usize,
    pub frames: Vec<Frame>,
    /// True if the first frame holds a Xing or Info tag instead of audio.
    pub info_tag: bool,
    /// Ascending, non overlapping, adjacent spans merged.
    ///
    /// Covers the audio data of every frame except an info tag frame, minus
    /// the bytes the tag markers are detected at.
    pub spans: Vec<AudioSpan>,
}

impl Mp3Layout {
    /// Total number of mutable bytes.
    pub fn embeddable_bytes(&self) -> usize {
        self.spans.iter().map(|s| s.len).sum()
    }

    /// Returns true if the byte at `offset` lies within an audio data span.
    pub fn is_mutable(&self, offset: usize) -> bool {
        let idx = self.spans.partition_point(|s| s.end() <= offset);
        self.spans
            .get(idx)
            .map(|s| s.range().contains(&offset))
            .unwrap_or(false)
    }
}

/// Parse the MP3 structure of `data`.
///
/// Sync candidates with reserved header values, or whose frame would not
/// fit the remaining data, are skipped one byte at a time because the sync
/// pattern can occur inside tags or garbage between frames.
///
/// # Errors
/// `SteganoError::FrameParse` if not a single frame was found.
pub fn parse(data: &[u8]) -> Result<Mp3Layout> {
    let tag_end = id3::id3v2_end(data);
    let trailer_start = id3::id3v1_start(data, tag_end);
    let scan = &data[..trailer_start];

    let mut frames: Vec<Frame> = Vec::new();
    let mut cursor = tag_end;
    while cursor + HEADER_LEN <= scan.len() {
        if !FrameHeader::has_sync(&scan[cursor..]) {
            cursor += 1;
            continue;
        }
        let Some(header) = FrameHeader::parse(&scan[cursor..]) else {
            trace!("rejecting sync candidate at {cursor}: reserved header field");
            cursor += 1;
            continue;
        };

        let frame_length = header.frame_length();
        if frame_length <= header.audio_data_start() {
            trace!("rejecting sync candidate at {cursor}: no audio data");
            cursor += 1;
            continue;
        }
        if cursor + frame_length > scan.len() {
            trace!("rejecting truncated frame of {frame_length} bytes at {cursor}");
            cursor += 1;
            continue;
        }

        frames.push(Frame::new(cursor, header));
        cursor += frame_length;
    }

    if frames.is_empty() {
        return Err(SteganoError::FrameParse {
            scanned_bytes: trailer_start - tag_end,
        });
    }

    let info_tag = has_info_tag(data, &frames[0]);
    let mut spans = merge_spans(
        frames
            .iter()
            .skip(usize::from(info_tag))
            .map(Frame::audio_data),
    );

    // marker bytes keep their value, a stego stream must parse like its cover
    if !info_tag {
        let start = frames[0].audio_data_offset;
        spans = exclude(spans, start..start + INFO_TAG_MAGICS[0].len());
    }
    if trailer_start == data.len() {
        if let Some(start) = data.len().checked_sub(id3::ID3V1_LEN) {
            spans = exclude(spans, start..start + id3::ID3V1_MAGIC.len());
        }
    }
    debug!(
        "parsed {} frames (info tag: {info_tag}), {} audio spans, skipped {} leading and {} trailing tag bytes",
        frames.len(),
        spans.len(),
        tag_end,
        data.len() - trailer_start
    );

    Ok(Mp3Layout {
        tag_end,
        trailer_start,
        frames,
        info_tag,
        spans,
    })
}

fn has_info_tag(data: &[u8], frame: &Frame) -> bool {
    data[frame.audio_data().range()]
        .get(..4)
        .is_some_and(|magic| INFO_TAG_MAGICS.iter().any(|m| magic == &m[..]))
}

/// Cut `hole` out of `spans`, splitting the span that contains it.
fn exclude(spans: Vec<AudioSpan>, hole: Range<usize>) -> Vec<AudioSpan> {
    spans
        .into_iter()
        .flat_map(|span| {
            let cut_start = hole.start.clamp(span.start, span.end());
            let cut_end = hole.end.clamp(span.start, span.end());
            [
                AudioSpan {
                    start: span.start,
                    len: cut_start - span.start,
                },
                AudioSpan {
                    start: cut_end,
                    len: span.end() - cut_end,
                },
            ]
        })
        .filter(|span| span.len > 0)
        .collect()
}

fn merge_spans(spans: impl Iterator<Item = AudioSpan>) -> Vec<AudioSpan> {
    let mut merged: Vec<AudioSpan> = Vec::new();
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.end() == span.start => last.len += span.len,
            _ => merged.push(span),
        }
    }

    merged
}
