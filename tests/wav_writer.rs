//! Writer for WAV files

use std::path::Path;

use hound::*;

/// Writes sample data as mono WAV file in 32-bit float format.
pub fn write(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    samples: &[f32],
    sample_rate: u32,
) -> std::io::Result<()> {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());

    // Create parent directories to the path if they don't exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec).map_err(std::io::Error::other)?;

    for sample in samples {
        writer.write_sample(*sample).map_err(std::io::Error::other)?;
    }

    writer.finalize().map_err(std::io::Error::other)
}
