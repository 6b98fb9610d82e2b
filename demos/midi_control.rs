//! Glottal source played from a MIDI keyboard.
//!
//! The raw source signal is heard without any vocal tract filtering.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use glottis_dsp::glottis::{GlottalSource, GlottisParameters};
use glottis_dsp::noise::simplex::SimplexNoise;
use glottis_dsp::noise::white_noise::WhiteNoise;
use glottis_dsp::utils::linear_ramp::LinearRamp;
use glottis_dsp::utils::Voiceness;
use glottis_dsp::SampleClock;

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;

/// Portamento and attack/release time in samples.
const GLIDE: usize = (SAMPLE_RATE / 50) as usize;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new());
}

#[derive(Debug)]
struct App {
    source: GlottalSource<SimplexNoise>,
    parameters: GlottisParameters,
    clock: SampleClock,
    white: WhiteNoise,
    frequency: LinearRamp,
    intensity: LinearRamp,
    volume: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            source: GlottalSource::new(SimplexNoise::new(1)),
            parameters: GlottisParameters::default(),
            clock: SampleClock::new(SAMPLE_RATE as f64),
            white: WhiteNoise::default(),
            frequency: LinearRamp::new(140.0),
            intensity: LinearRamp::new(0.0),
            volume: 0.5,
        }
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        Voiceness::new(0.7).apply(&mut self.parameters);
        self.source.init(self.parameters.tenseness);
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        for (left, right) in samples_left.iter_mut().zip(samples_right.iter_mut()) {
            self.parameters.frequency = self.frequency.next();
            self.parameters.intensity = self.intensity.next();
            self.parameters.noise = self.white.next();

            let sample = self.source.process(&mut self.parameters, self.clock.tick());
            let sample = (sample * self.volume).clamp(-1.0, 1.0);

            *left = sample;
            *right = sample;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                // Note off
                self.intensity.set_target(0.0, GLIDE);
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                // Note on
                let frequency = 440.0 * 2.0f32.powf((message[1] as f32 - 69.0) / 12.0);
                self.frequency.set_target(frequency, GLIDE);
                self.intensity.set_target(message[2] as f32 / 127.0, GLIDE);
                log::info!("Note on: {} ({frequency:.1} Hz)", message[1]);
            }
            0x90 => {
                // Note on with zero velocity
                self.intensity.set_target(0.0, GLIDE);
            }
            0xB0 => {
                // Control change
                let value = message[2] as f32 / 127.0;
                match message[1] {
                    21 => {
                        let voiceness = Voiceness::new(value);
                        voiceness.apply(&mut self.parameters);
                        log::info!(
                            "Voiceness: {value} (tenseness {}, loudness {})",
                            voiceness.tenseness(),
                            voiceness.loudness()
                        );
                    }
                    22 => {
                        self.parameters.vibrato_gain = value * 0.05;
                        log::info!("Vibrato gain: {}", self.parameters.vibrato_gain);
                    }
                    23 => {
                        self.parameters.vibrato_frequency = value * 12.0;
                        log::info!(
                            "Vibrato frequency: {}",
                            self.parameters.vibrato_frequency
                        );
                    }
                    24 => {
                        self.parameters.vibrato_wobble = value;
                        log::info!("Wobble: {}", self.parameters.vibrato_wobble);
                    }
                    28 => {
                        self.volume = value;
                        log::info!("Volume: {}", self.volume);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
