//! Decoding audio files into comparable samples.
//!
//! WAV files are read with `hound`, everything else goes through `symphonia`.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::{debug, error, warn};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::psnr::psnr;
use crate::{Result, SteganoError};

/// Interleaved samples normalized to `-1.0..=1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

/// Decode the audio file at `path`.
pub fn decode_file(path: &Path) -> Result<DecodedAudio> {
    debug!("decoding {}", path.display());
    let is_wav = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"));

    let audio = if is_wav {
        decode_wav(path)?
    } else {
        decode_compressed(path)?
    };
    debug!(
        "decoded {} samples, {} Hz, {} channels",
        audio.samples.len(),
        audio.sample_rate,
        audio.channels
    );

    Ok(audio)
}

/// PSNR in dB between two audio files, `f64::INFINITY` if they decode identically.
///
/// Packets the decoder rejects are skipped with a warning, the length
/// tolerance of [`psnr`] absorbs a skipped frame.
///
/// # Errors
/// `SampleRateMismatch` if the files are not at the same sample rate,
/// `AudioDecode` if a file cannot be read to its end.
pub fn compare_files(original: &Path, modified: &Path) -> Result<f64> {
    let original = decode_file(original)?;
    let modified = decode_file(modified)?;

    if original.sample_rate != modified.sample_rate {
        error!(
            "cannot compare {} Hz with {} Hz",
            original.sample_rate, modified.sample_rate
        );
        return Err(SteganoError::SampleRateMismatch {
            original: original.sample_rate,
            modified: modified.sample_rate,
        });
    }

    psnr(&original.samples, &modified.samples)
}

fn decode_wav(path: &Path) -> Result<DecodedAudio> {
    let mut reader = WavReader::open(path).map_err(decode_error)?;
    let spec = reader.spec();

    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(decode_error)?,
        SampleFormat::Int => {
            let scale = (1u64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(decode_error)?
        }
    };

    Ok(DecodedAudio {
        samples,
        sample_rate: spec.sample_rate,
        channels: spec.channels,
    })
}

fn decode_compressed(path: &Path) -> Result<DecodedAudio> {
    let file = File::open(path).map_err(|source| SteganoError::ReadError { source })?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(extension);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(decode_error)?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| SteganoError::AudioDecode("no audio track found".to_string()))?;
    let track_id = track.id;
    let mut sample_rate = track.codec_params.sample_rate;
    let mut channels = track.codec_params.channels.map(|c| c.count() as u16);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(decode_error)?;

    let mut samples = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(e) => {
                end_of_stream(e)?;
                break;
            }
        };
        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let spec = *decoded.spec();
                sample_rate.get_or_insert(spec.rate);
                channels.get_or_insert(spec.channels.count() as u16);

                let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buffer.copy_interleaved_ref(decoded);
                samples.extend_from_slice(buffer.samples());
            }
            Err(SymphoniaError::DecodeError(e)) => {
                warn!("skipping undecodable packet: {e}");
            }
            Err(e) => return Err(decode_error(e)),
        }
    }

    let sample_rate =
        sample_rate.ok_or_else(|| SteganoError::AudioDecode("unknown sample rate".to_string()))?;
    let channels =
        channels.ok_or_else(|| SteganoError::AudioDecode("unknown channel count".to_string()))?;

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}

/// `Ok` if reading packets stopped at the end of the stream, any other
/// error fails the decode instead of returning a partial sample set.
fn end_of_stream(e: SymphoniaError) -> Result<()> {
    match e {
        SymphoniaError::IoError(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(()),
        e => {
            error!("cannot read packet: {e}");
            Err(decode_error(e))
        }
    }
}

fn decode_error(e: impl std::fmt::Display) -> SteganoError {
    SteganoError::AudioDecode(e.to_string())
}
