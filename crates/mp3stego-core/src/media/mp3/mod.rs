//! MPEG audio container parsing.

pub mod header;
pub mod id3;
mod parser;

pub use header::{ChannelMode, FrameHeader, Layer, MpegVersion};
pub use parser::{parse, AudioSpan, Frame, Mp3Layout};
