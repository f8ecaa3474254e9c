//! Integration tests for ripple-io WAV I/O and block processing.

use ripple_core::{Effect, EffectChain, EffectId};
use ripple_effects::{EchoEffect, GainEffect};
use ripple_io::{BlockEngine, WavFormat, WavSpec, read_wav, read_wav_info, write_wav};
use tempfile::NamedTempFile;

/// Generate a sine wave as 16-bit samples.
fn sine_wave(sample_rate: u32, freq_hz: f32, num_samples: usize, amplitude: f32) -> Vec<i16> {
    (0..num_samples)
        .map(|i| {
            let t = i as f32 / sample_rate as f32;
            ((2.0 * std::f32::consts::PI * freq_hz * t).sin() * amplitude) as i16
        })
        .collect()
}

fn echo_chain(sample_rate: f32) -> EffectChain {
    let mut gain = GainEffect::new(EffectId(1));
    gain.set_gain(2.0);
    let mut echo = EchoEffect::new(EffectId(2), sample_rate);
    echo.set_delay(0.1);
    echo.set_enabled(true);

    let mut chain = EffectChain::new();
    chain.add(Box::new(gain));
    chain.add(Box::new(echo));
    chain
}

#[test]
fn float_wav_is_converted_to_i16() {
    let file = NamedTempFile::new().unwrap();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 48000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
    for s in [0.0f32, 0.5, -0.5, 1.5, -1.5] {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();

    let info = read_wav_info(file.path()).unwrap();
    assert_eq!(info.format, WavFormat::IeeeFloat);

    let (samples, spec) = read_wav(file.path()).unwrap();
    assert_eq!(spec.sample_rate, 48000);
    assert_eq!(samples, vec![0, 16384, -16384, i16::MAX, i16::MIN]);
}

#[test]
fn wide_int_wav_is_rescaled() {
    let file = NamedTempFile::new().unwrap();
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 24,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(file.path(), spec).unwrap();
    for s in [0i32, 1 << 22, -(1 << 22), -(1 << 23)] {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();

    let (samples, spec) = read_wav(file.path()).unwrap();
    assert_eq!(spec.bits_per_sample, 24);
    assert_eq!(samples, vec![0, 16384, -16384, i16::MIN]);
}

#[test]
fn block_size_does_not_change_result() {
    let sr = 8000;
    let input = sine_wave(sr, 440.0, sr as usize, 8000.0);

    let whole = BlockEngine::new(input.len())
        .unwrap()
        .process_stream(&mut echo_chain(sr as f32), &input);

    for block_size in [1, 7, 64, 800, 1023] {
        let blocked = BlockEngine::new(block_size)
            .unwrap()
            .process_stream(&mut echo_chain(sr as f32), &input);
        assert_eq!(blocked, whole, "block size {block_size} diverged");
    }
}

#[test]
fn file_to_file_processing() {
    let input_file = NamedTempFile::new().unwrap();
    let output_file = NamedTempFile::new().unwrap();

    let mut impulse = vec![0i16; 4411];
    impulse[0] = 1000;
    write_wav(input_file.path(), &impulse, WavSpec::default()).unwrap();

    let (samples, spec) = read_wav(input_file.path()).unwrap();
    let mut chain = echo_chain(spec.sample_rate as f32);
    let processed = BlockEngine::new(512)
        .unwrap()
        .process_stream(&mut chain, &samples);
    write_wav(output_file.path(), &processed, spec.mono()).unwrap();

    let (result, _) = read_wav(output_file.path()).unwrap();
    assert_eq!(result.len(), 4411);
    assert_eq!(result[0], 2000);
    assert_eq!(result[4410], 1000);
}

#[test]
fn single_boxed_effect_as_processor() {
    let mut effect: ripple_core::BoxedEffect = Box::new(GainEffect::new(EffectId(1)));
    effect.set_enabled(false);
    let out = BlockEngine::new(2).unwrap().process_stream(&mut effect, &[1, 2, 3]);
    assert_eq!(out, vec![1, 2, 3]);
}
