//! Renders a one-bar hat pattern to `hat420.wav`.
//!
//! Seven closed hats on eighth notes, then one open hat on the last step.
//! Run with `cargo run --example render_hat`.

use anyhow::Result;
use hat420::{HatParams, HatVoice};
use hound::{SampleFormat, WavSpec, WavWriter};

const SAMPLE_RATE: u32 = 44_100;

fn main() -> Result<()> {
    // Eighth notes at 120 bpm
    let step = (SAMPLE_RATE / 4) as usize;

    let closed = HatParams {
        amplitude: 0.8,
        sustain: 12.0,
    };
    let open = HatParams {
        amplitude: 0.8,
        sustain: 85.0,
    };

    let mut voice = HatVoice::new();
    let mut strike = vec![0.0f32; step];
    let mut bar = vec![0.0f32; step * 8];

    for beat in 0..8 {
        let last = beat == 7;
        strike.fill(0.0);
        strike[0] = if last { 1.0 } else { 0.8 };

        let out = &mut bar[beat * step..(beat + 1) * step];
        voice.process(if last { &open } else { &closed }, &strike, out);
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create("hat420.wav", spec)?;
    for &sample in &bar {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    println!("wrote hat420.wav ({} samples)", bar.len());
    Ok(())
}
