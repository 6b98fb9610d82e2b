//! Render a pitch and voiceness contour to a WAV file.
//!
//! Control values are updated every 10 ms, upsampled from a coarse contour.

use std::error::Error;

use hound::{SampleFormat, WavSpec, WavWriter};
use simple_logger::SimpleLogger;

use glottis_dsp::glottis::{GlottalSource, GlottisParameters};
use glottis_dsp::noise::simplex::SimplexNoise;
use glottis_dsp::noise::white_noise::WhiteNoise;
use glottis_dsp::utils::{interpolate_steps, Voiceness};
use glottis_dsp::SampleClock;

const SAMPLE_RATE: u32 = 48000;
const STEP_DURATION: f64 = 0.01;
const STEPS_BETWEEN: usize = 9;

const FREQUENCIES: [f32; 6] = [110.0, 130.0, 150.0, 140.0, 120.0, 100.0];
const VOICENESSES: [f32; 6] = [0.2, 0.7, 1.0, 0.9, 0.6, 0.1];

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()?;

    let frequencies: Vec<f32> = interpolate_steps(&FREQUENCIES, STEPS_BETWEEN).collect();
    let voicenesses: Vec<f32> = interpolate_steps(&VOICENESSES, STEPS_BETWEEN).collect();

    let mut source = GlottalSource::new(SimplexNoise::new(1));
    let mut parameters = GlottisParameters {
        vibrato_wobble: 0.3,
        ..Default::default()
    };
    let mut clock = SampleClock::new(SAMPLE_RATE as f64);
    let mut white = WhiteNoise::default();

    let step_length = (STEP_DURATION * SAMPLE_RATE as f64) as usize;
    let mut block = vec![0.0; step_length];
    let mut samples = Vec::with_capacity(step_length * frequencies.len());

    for (&frequency, &voiceness) in frequencies.iter().zip(voicenesses.iter()) {
        parameters.frequency = frequency;
        Voiceness::new(voiceness).apply(&mut parameters);

        source.render(&mut parameters, &mut clock, &mut white, &mut block);
        samples.extend_from_slice(&block);
    }

    let peak = samples.iter().fold(0.0f32, |peak, x| peak.max(x.abs()));
    log::info!(
        "Rendered {} samples ({:.2} s), peak {peak:.3}",
        samples.len(),
        clock.seconds()
    );

    std::fs::create_dir_all("out")?;
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create("out/sequence.wav", spec)?;
    for sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    log::info!("Written to out/sequence.wav");

    Ok(())
}
