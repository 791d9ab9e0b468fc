//! The hi-hat voice: white noise shaped by the peak-follower envelope.

use rand::Rng;

use crate::envelope::PeakEnvelope;
use crate::noise::WhiteNoise;

/// Control values read once per processing call.
///
/// These mirror the unit's two control ports. `Default` matches the port
/// metadata defaults: unity gain and a sustain of 50.5, the midpoint of the
/// sustain control range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HatParams {
    /// Output gain. The control is logarithmic and bounded below at 0.
    pub amplitude: f32,
    /// Inverse decay rate in `[1, 100]`; larger values decay slower. Must
    /// stay nonzero, it divides the envelope level on every sample.
    pub sustain: f32,
}

impl Default for HatParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            sustain: 50.5,
        }
    }
}

/// A single hi-hat voice.
///
/// Couples a [`PeakEnvelope`] to a [`WhiteNoise`] source: the input signal
/// drives the envelope, and each output sample is a fresh noise draw scaled
/// by amplitude and the envelope level. Feeding an impulse produces a
/// decaying noise burst; feeding program material produces noise that
/// shadows its transients.
///
/// One voice serves one monophonic stream. Hosts that want several
/// independent hats create one voice per stream; there is no pooling.
///
/// # Examples
///
/// ```
/// use hat420::{HatParams, HatVoice};
///
/// let mut voice = HatVoice::new();
/// let params = HatParams { amplitude: 0.5, ..HatParams::default() };
///
/// let input = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
/// let mut output = [0.0f32; 8];
/// voice.process(&params, &input, &mut output);
///
/// // The noise factor is in [-1, 1), so the gain bounds the output.
/// assert!(output.iter().all(|s| s.abs() <= 0.5));
/// ```
pub struct HatVoice<R: Rng = rand::rngs::ThreadRng> {
    envelope: PeakEnvelope,
    noise: WhiteNoise<R>,
}

impl HatVoice<rand::rngs::ThreadRng> {
    /// Creates a voice backed by the thread-local RNG.
    pub fn new() -> Self {
        Self {
            envelope: PeakEnvelope::new(),
            noise: WhiteNoise::new(),
        }
    }
}

impl Default for HatVoice<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HatVoice<R> {
    /// Creates a voice with a custom RNG.
    ///
    /// A seeded generator makes the output reproducible sample for sample,
    /// which the block-continuity tests rely on.
    ///
    /// # Examples
    ///
    /// ```
    /// use hat420::HatVoice;
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut voice = HatVoice::with_rng(rng);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self {
            envelope: PeakEnvelope::new(),
            noise: WhiteNoise::with_rng(rng),
        }
    }

    /// Current envelope level, for metering or tests.
    pub fn envelope_level(&self) -> f32 {
        self.envelope.level()
    }

    /// Re-arms the envelope from silence. The noise stream is unaffected.
    pub fn reset(&mut self) {
        self.envelope.reset();
    }

    /// Renders one output sample from one input sample.
    pub fn tick(&mut self, params: &HatParams, input: f32) -> f32 {
        let level = self.envelope.advance(input, params.sustain);
        self.noise.next_sample() * params.amplitude * level
    }

    /// Renders a block, one output sample per input sample, in order.
    ///
    /// Processes `min(input.len(), output.len())` frames; empty buffers are
    /// a no-op that leaves the envelope untouched. The envelope carries
    /// across calls, so splitting a block over consecutive calls traces the
    /// same trajectory as a single call.
    ///
    /// Allocation-free and non-blocking, safe for a realtime audio callback.
    pub fn process(&mut self, params: &HatParams, input: &[f32], output: &mut [f32]) {
        for (out, &sample) in output.iter_mut().zip(input) {
            *out = self.tick(params, sample);
        }
    }
}
