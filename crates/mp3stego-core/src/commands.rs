//! One call per command line action, thin wrappers over [`crate::api`].

use std::path::Path;

use crate::engine::Unveiled;
use crate::media::{Capacity, CodecOptions, LsbCount};
use crate::Result;

/// Hide the content of `secret_file` in `cover`, write the result to `output`.
pub fn hide(
    cover: &Path,
    secret_file: &Path,
    output: &Path,
    options: CodecOptions,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_cover(cover)
        .with_secret_file(secret_file)
        .with_output(output)
        .with_options(options)
        .execute()
}

/// Hide a text message in `cover`, write the result to `output`.
pub fn hide_message(
    cover: &Path,
    message: &str,
    output: &Path,
    options: CodecOptions,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_cover(cover)
        .with_message(message)
        .with_output(output)
        .with_options(options)
        .execute()
}

/// Unveil the secret of `secret_media` into `destination`.
pub fn unveil(
    secret_media: &Path,
    destination: &Path,
    options: CodecOptions,
) -> Result<Unveiled> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .into_file(destination)
        .with_options(options)
        .execute()
}

pub fn capacity(cover: &Path, lsb_count: LsbCount) -> Result<Capacity> {
    crate::api::capacity::prepare()
        .with_cover(cover)
        .with_lsb_count(lsb_count)
        .execute()
}

/// PSNR in dB between `original` and `modified`.
pub fn compare(original: &Path, modified: &Path) -> Result<f64> {
    crate::api::compare::prepare()
        .original(original)
        .modified(modified)
        .execute()
}
