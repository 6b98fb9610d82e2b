//! Tests for the host helpers

use glottis_dsp::glottis::GlottisParameters;
use glottis_dsp::utils::linear_ramp::LinearRamp;
use glottis_dsp::utils::{interpolate_steps, Voiceness};
use glottis_dsp::SampleClock;

#[test]
fn voiceness_limits() {
    let silent = Voiceness::new(0.0);
    assert_eq!(silent.tenseness(), 0.0);
    assert_eq!(silent.loudness(), 0.0);

    let full = Voiceness::new(1.0);
    assert_eq!(full.tenseness(), 1.0);
    assert_eq!(full.loudness(), 1.0);

    assert_eq!(Voiceness::new(-0.5), silent);
    assert_eq!(Voiceness::new(2.0), full);
}

#[test]
fn voiceness_midpoint() {
    let half = Voiceness::new(0.5);
    let tenseness = 1.0 - core::f32::consts::FRAC_1_SQRT_2;

    assert!((half.tenseness() - tenseness).abs() < 1e-6);
    assert!((half.loudness() - tenseness.powf(0.25)).abs() < 1e-6);
}

#[test]
fn voiceness_apply() {
    let mut parameters = GlottisParameters::default();
    let voiceness = Voiceness::new(0.8);
    voiceness.apply(&mut parameters);

    assert_eq!(parameters.tenseness, voiceness.tenseness());
    assert_eq!(parameters.loudness, voiceness.loudness());
}

#[test]
fn interpolate_contour() {
    let values: Vec<f32> = interpolate_steps(&[0.0, 1.0, 3.0], 1).collect();
    assert_eq!(values, vec![0.0, 0.5, 1.0, 2.0, 3.0]);

    let values: Vec<f32> = interpolate_steps(&[100.0, 200.0], 3).collect();
    assert_eq!(values, vec![100.0, 125.0, 150.0, 175.0, 200.0]);

    let values: Vec<f32> = interpolate_steps(&[4.0, 2.0], 0).collect();
    assert_eq!(values, vec![4.0, 2.0]);

    assert_eq!(interpolate_steps(&[7.0], 4).collect::<Vec<_>>(), vec![7.0]);
    assert_eq!(interpolate_steps(&[], 4).count(), 0);
}

#[test]
fn ramp_lands_on_target() {
    let mut ramp = LinearRamp::new(0.0);
    ramp.set_target(1.0, 4);

    assert!(ramp.is_ramping());
    assert_eq!(ramp.next(), 0.25);
    assert_eq!(ramp.next(), 0.5);
    assert_eq!(ramp.subsample(0.5), 0.625);
    assert_eq!(ramp.next(), 0.75);
    assert_eq!(ramp.next(), 1.0);
    assert!(!ramp.is_ramping());
    assert_eq!(ramp.next(), 1.0);
}

#[test]
fn ramp_retarget() {
    let mut ramp = LinearRamp::new(100.0);
    ramp.set_target(200.0, 10);
    for _ in 0..5 {
        ramp.next();
    }
    ramp.set_target(50.0, 0);

    assert_eq!(ramp.value(), 50.0);
    assert_eq!(ramp.target(), 50.0);
    assert_eq!(ramp.next(), 50.0);

    ramp.set(80.0);
    assert_eq!(ramp.next(), 80.0);
}

#[test]
fn sample_clock() {
    let mut clock = SampleClock::new(1024.0);

    assert_eq!(clock.tick(), 0.0);
    assert_eq!(clock.tick(), 1.0 / 1024.0);
    assert_eq!(clock.frame(), 2);

    clock.seek(2048);
    assert_eq!(clock.seconds(), 2.0);
    assert_eq!(clock.tick(), 2.0);
    assert_eq!(clock.frame(), 2049);
}
