use log::debug;

use crate::{Result, SteganoError};

/// Sample length difference accepted by [`psnr`]: one MPEG-1 Layer III
/// stereo frame, 1152 samples per channel. Decoders disagree by up to a frame
/// on encoder delay and trailing padding.
pub const DEFAULT_LENGTH_TOLERANCE: usize = 2304;

/// A numeric sample format with a known peak magnitude.
pub trait Sample: Copy {
    /// Maximum representable magnitude.
    const PEAK: f64;

    fn to_f64(self) -> f64;
}

impl Sample for i16 {
    const PEAK: f64 = i16::MAX as f64;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f32 {
    const PEAK: f64 = 1.0;

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

/// Peak signal to noise ratio in dB, `f64::INFINITY` for identical input.
///
/// Sequences may differ in length by up to [`DEFAULT_LENGTH_TOLERANCE`]
/// samples, only the common prefix is compared.
pub fn psnr<S: Sample>(original: &[S], modified: &[S]) -> Result<f64> {
    psnr_with_tolerance(original, modified, DEFAULT_LENGTH_TOLERANCE)
}

/// [`psnr`] with an explicit length tolerance.
pub fn psnr_with_tolerance<S: Sample>(
    original: &[S],
    modified: &[S],
    tolerance: usize,
) -> Result<f64> {
    let aligned = original.len().min(modified.len());
    if aligned == 0 || original.len().abs_diff(modified.len()) > tolerance {
        return Err(SteganoError::SampleLengthMismatch {
            original: original.len(),
            modified: modified.len(),
        });
    }

    let squared_error: f64 = original
        .iter()
        .zip(modified.iter())
        .map(|(a, b)| {
            let diff = a.to_f64() - b.to_f64();
            diff * diff
        })
        .sum();
    let mse = squared_error / aligned as f64;
    debug!("mse {mse} over {aligned} samples");

    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(10.0 * (S::PEAK * S::PEAK / mse).log10())
}
