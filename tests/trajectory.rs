// Cross-module behavior of the public API: block-split continuity, the
// descriptor registry, and the full host lifecycle.

use hat420::{HatParams, HatUnit, HatVoice, PortRole, Registry};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn impulse_train(len: usize, hits: &[(usize, f32)]) -> Vec<f32> {
    let mut input = vec![0.0f32; len];
    for &(at, strength) in hits {
        input[at] = strength;
    }
    input
}

#[test]
fn split_blocks_match_single_block() {
    // The envelope carries across process() calls, so rendering 64 frames in
    // one call or as 24 + 40 must produce identical samples when the noise
    // streams start from the same seed.
    let params = HatParams {
        amplitude: 0.9,
        sustain: 10.0,
    };
    let input = impulse_train(64, &[(0, 1.0), (37, 0.6)]);

    let mut whole_voice = HatVoice::with_rng(StdRng::seed_from_u64(0xDECAF));
    let mut whole = vec![0.0f32; 64];
    whole_voice.process(&params, &input, &mut whole);

    let mut split_voice = HatVoice::with_rng(StdRng::seed_from_u64(0xDECAF));
    let mut split = vec![0.0f32; 64];
    split_voice.process(&params, &input[..24], &mut split[..24]);
    split_voice.process(&params, &input[24..], &mut split[24..]);

    assert_eq!(whole, split);
}

#[test]
fn registry_serves_the_builtin_unit() {
    let registry = Registry::with_builtin();
    let desc = registry.by_label("hat420").expect("builtin registered");

    assert_eq!(desc.unique_id, 42069);
    assert!(desc.hard_rt_capable);
    assert_eq!(desc.ports.len(), 4);

    // A host would size its fader from these hints.
    let sustain = desc.port(PortRole::Sustain).hint;
    assert_eq!((sustain.lower, sustain.upper), (Some(1.0), Some(100.0)));
    assert_eq!(sustain.default_value(), Some(50.5));
}

#[test]
fn unit_lifecycle_renders_audio() {
    let mut unit = HatUnit::with_rng(48_000, StdRng::seed_from_u64(99));
    unit.connect_control(PortRole::Amplitude, 1.0).unwrap();
    unit.connect_control(PortRole::Sustain, 10.0).unwrap();
    unit.connect_audio(PortRole::Input).unwrap();
    unit.connect_audio(PortRole::Output).unwrap();

    let input = impulse_train(128, &[(0, 1.0)]);
    let mut output = vec![0.0f32; 128];
    unit.run(&input, &mut output).unwrap();

    // The strike produces a burst whose energy front-loads the block.
    assert!(output.iter().any(|&s| s != 0.0));
    let head: f32 = output[..32].iter().map(|s| s * s).sum();
    let tail: f32 = output[96..].iter().map(|s| s * s).sum();
    assert!(head > tail, "burst should decay: head={head}, tail={tail}");

    // Drop releases the instance; nothing outlives the unit.
    drop(unit);
}

#[test]
fn rebinding_rearms_the_envelope_end_to_end() {
    let mut unit = HatUnit::with_rng(48_000, StdRng::seed_from_u64(5));
    unit.connect_control(PortRole::Amplitude, 1.0).unwrap();
    unit.connect_control(PortRole::Sustain, 90.0).unwrap();
    unit.connect_audio(PortRole::Input).unwrap();
    unit.connect_audio(PortRole::Output).unwrap();

    let input = impulse_train(32, &[(0, 1.0)]);
    let mut output = vec![0.0f32; 32];
    unit.run(&input, &mut output).unwrap();

    // With sustain at 90 the tail would still be audible here, but the
    // rebind silently restarts the envelope.
    unit.connect_audio(PortRole::Output).unwrap();
    let mut tail = vec![1.0f32; 32];
    unit.run(&[0.0f32; 32], &mut tail).unwrap();
    assert!(tail.iter().all(|&s| s == 0.0));
}
