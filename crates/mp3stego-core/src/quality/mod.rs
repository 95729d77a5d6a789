//! Audio quality impact of hiding, measured as PSNR between two sample sequences.

mod decode;
mod psnr;

pub use decode::{compare_files, decode_file, DecodedAudio};
pub use psnr::{psnr, psnr_with_tolerance, Sample, DEFAULT_LENGTH_TOLERANCE};
