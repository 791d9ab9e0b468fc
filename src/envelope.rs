//! Peak-follower envelope with quadratic-ratio decay.

/// An instantaneous-attack peak follower with a nonlinear release.
///
/// The envelope tracks the peaks of an audio-rate input signal: any sample
/// that exceeds the current level becomes the new level immediately, with no
/// smoothing. Between peaks the level falls by the square of its ratio to
/// `sustain`:
///
/// ```text
/// level -= (level / sustain)^2
/// ```
///
/// The feedback is quadratic, so a loud envelope collapses quickly while the
/// quiet tail lingers. That fast-attack, variable-release contour is what
/// gives a struck cymbal its shape, and it differs from both a linear ramp
/// and a single-pole exponential decay.
///
/// # Examples
///
/// ```
/// use hat420::PeakEnvelope;
///
/// let mut env = PeakEnvelope::new();
///
/// // A peak re-triggers the envelope instantly.
/// env.advance(1.0, 10.0);
/// assert_eq!(env.level(), 1.0);
///
/// // Silence lets it decay: 1.0 - (1.0 / 10.0)^2 = 0.99
/// env.advance(0.0, 10.0);
/// assert!((env.level() - 0.99).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PeakEnvelope {
    /// Current envelope level
    level: f32,
}

impl PeakEnvelope {
    /// Creates a new envelope at level 0.
    pub fn new() -> Self {
        Self { level: 0.0 }
    }

    /// Advances the envelope by one input sample and returns the new level.
    ///
    /// Order matters: the decay step runs first, then the re-trigger
    /// comparison against the (already decayed) level. Each call depends on
    /// the previous call's result, so blocks must be walked in sample order.
    ///
    /// `sustain` divides the level, so the caller must keep it nonzero; the
    /// control range is `[1, 100]`. A zero value produces a non-finite level
    /// that persists until a later input re-triggers the envelope.
    pub fn advance(&mut self, input: f32, sustain: f32) -> f32 {
        let ratio = self.level / sustain;
        self.level -= ratio * ratio;

        if input > self.level {
            self.level = input;
        }

        self.level
    }

    /// Current envelope level.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Re-arms the envelope from silence.
    pub fn reset(&mut self) {
        self.level = 0.0;
    }
}
