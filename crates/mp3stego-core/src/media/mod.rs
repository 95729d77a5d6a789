pub mod capacity;
pub mod codec_options;
pub mod lsb_codec;
pub mod mp3;
pub mod payload;
pub mod permutation;
pub mod sequencer;

pub use capacity::Capacity;
pub use codec_options::{CodecOptions, LsbCount};
pub use sequencer::PositionMode;
