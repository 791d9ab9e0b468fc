//! The host-facing unit lifecycle: instantiate, connect, run, drop.

use std::fmt;

use rand::Rng;

use super::descriptor::PortRole;
use crate::voice::{HatParams, HatVoice};

/// Errors surfaced by the binding layer.
///
/// The processing core itself is infallible; only wiring mistakes are
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    /// A control value was offered to an audio port, or an audio connection
    /// to a control port.
    KindMismatch(PortRole),
    /// `run` was called before this port had been connected.
    Unconnected(PortRole),
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::KindMismatch(role) => {
                write!(f, "port {role:?} does not accept that connection kind")
            }
            PortError::Unconnected(role) => {
                write!(f, "port {role:?} was never connected")
            }
        }
    }
}

impl std::error::Error for PortError {}

/// A hosted hi-hat instance.
///
/// Wraps one [`HatVoice`] in the four-port contract a plugin host drives:
/// instantiate, connect each port, run blocks, drop. Control ports bind to
/// scalar values held by the unit; audio ports are only marked as wired
/// here, the buffers themselves are passed to [`run`](HatUnit::run) on
/// every call.
///
/// Connecting any port re-arms the envelope from silence, so a rewired
/// unit always starts its envelope from zero. [`reset`](HatUnit::reset) is
/// also available on its own for hosts that want to re-arm without
/// rewiring.
///
/// # Examples
///
/// ```
/// use hat420::{HatUnit, PortRole};
///
/// let mut unit = HatUnit::new(48_000);
/// unit.connect_control(PortRole::Amplitude, 0.8)?;
/// unit.connect_control(PortRole::Sustain, 25.0)?;
/// unit.connect_audio(PortRole::Input)?;
/// unit.connect_audio(PortRole::Output)?;
///
/// let input = [1.0, 0.0, 0.0, 0.0];
/// let mut output = [0.0f32; 4];
/// unit.run(&input, &mut output)?;
/// # Ok::<(), hat420::PortError>(())
/// ```
pub struct HatUnit<R: Rng = rand::rngs::ThreadRng> {
    voice: HatVoice<R>,
    params: HatParams,
    connected: [bool; PortRole::ALL.len()],
    sample_rate: u32,
}

impl HatUnit<rand::rngs::ThreadRng> {
    /// Creates a unit backed by the thread-local RNG.
    ///
    /// The sample rate is recorded for the host's benefit; the decay model
    /// is expressed in samples and does not consult it.
    pub fn new(sample_rate: u32) -> Self {
        Self::with_rng(sample_rate, rand::thread_rng())
    }
}

impl<R: Rng> HatUnit<R> {
    /// Creates a unit with a custom RNG, for reproducible rendering.
    pub fn with_rng(sample_rate: u32, rng: R) -> Self {
        Self {
            voice: HatVoice::with_rng(rng),
            params: HatParams::default(),
            connected: [false; PortRole::ALL.len()],
            sample_rate,
        }
    }

    /// Sample rate given at instantiation.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Control values currently bound, starting from the port defaults.
    pub fn params(&self) -> HatParams {
        self.params
    }

    /// Binds a value to a control port.
    ///
    /// Like every connect, this re-arms the envelope from silence. The
    /// value is not validated against the port's range hint; staying inside
    /// it (in particular keeping sustain nonzero) is the host's obligation.
    pub fn connect_control(&mut self, role: PortRole, value: f32) -> Result<(), PortError> {
        match role {
            PortRole::Amplitude => self.params.amplitude = value,
            PortRole::Sustain => self.params.sustain = value,
            PortRole::Output | PortRole::Input => return Err(PortError::KindMismatch(role)),
        }
        self.mark_connected(role);
        Ok(())
    }

    /// Marks an audio port as wired.
    ///
    /// Buffers are not captured here; they are handed to
    /// [`run`](HatUnit::run) each call. Like every connect, this re-arms
    /// the envelope from silence.
    pub fn connect_audio(&mut self, role: PortRole) -> Result<(), PortError> {
        if !role.is_audio() {
            return Err(PortError::KindMismatch(role));
        }
        self.mark_connected(role);
        Ok(())
    }

    /// Re-arms the envelope from silence without touching the wiring.
    pub fn reset(&mut self) {
        self.voice.reset();
    }

    /// Runs one block over the connected ports.
    ///
    /// Processes `min(input.len(), output.len())` frames in sample order;
    /// empty buffers are a no-op. Fails if any of the four ports was never
    /// connected. Allocation-free once the wiring check passes.
    pub fn run(&mut self, input: &[f32], output: &mut [f32]) -> Result<(), PortError> {
        if let Some(role) = PortRole::ALL
            .into_iter()
            .find(|role| !self.connected[role.index()])
        {
            return Err(PortError::Unconnected(role));
        }

        self.voice.process(&self.params, input, output);
        Ok(())
    }

    fn mark_connected(&mut self, role: PortRole) {
        self.connected[role.index()] = true;
        self.voice.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn wired_unit(seed: u64) -> HatUnit<StdRng> {
        let mut unit = HatUnit::with_rng(44_100, StdRng::seed_from_u64(seed));
        unit.connect_control(PortRole::Amplitude, 1.0).unwrap();
        unit.connect_control(PortRole::Sustain, 10.0).unwrap();
        unit.connect_audio(PortRole::Input).unwrap();
        unit.connect_audio(PortRole::Output).unwrap();
        unit
    }

    #[test]
    fn test_defaults_before_binding() {
        let unit = HatUnit::new(48_000);
        assert_eq!(unit.sample_rate(), 48_000);
        assert_eq!(unit.params(), HatParams::default());
    }

    #[test]
    fn test_control_connection_to_audio_port_fails() {
        let mut unit = HatUnit::new(48_000);
        assert_eq!(
            unit.connect_control(PortRole::Output, 1.0),
            Err(PortError::KindMismatch(PortRole::Output))
        );
        assert_eq!(
            unit.connect_control(PortRole::Input, 1.0),
            Err(PortError::KindMismatch(PortRole::Input))
        );
    }

    #[test]
    fn test_audio_connection_to_control_port_fails() {
        let mut unit = HatUnit::new(48_000);
        assert_eq!(
            unit.connect_audio(PortRole::Sustain),
            Err(PortError::KindMismatch(PortRole::Sustain))
        );
    }

    #[test]
    fn test_run_requires_all_ports() {
        let mut unit = HatUnit::new(48_000);
        let input = [0.0f32; 8];
        let mut output = [0.0f32; 8];

        assert_eq!(
            unit.run(&input, &mut output),
            Err(PortError::Unconnected(PortRole::Amplitude))
        );

        unit.connect_control(PortRole::Amplitude, 1.0).unwrap();
        assert_eq!(
            unit.run(&input, &mut output),
            Err(PortError::Unconnected(PortRole::Sustain))
        );

        unit.connect_control(PortRole::Sustain, 10.0).unwrap();
        unit.connect_audio(PortRole::Output).unwrap();
        assert_eq!(
            unit.run(&input, &mut output),
            Err(PortError::Unconnected(PortRole::Input))
        );

        unit.connect_audio(PortRole::Input).unwrap();
        assert!(unit.run(&input, &mut output).is_ok());
    }

    #[test]
    fn test_run_renders_a_burst() {
        let mut unit = wired_unit(11);
        let mut input = [0.0f32; 64];
        input[0] = 1.0;
        let mut output = [0.0f32; 64];

        unit.run(&input, &mut output).unwrap();
        assert!(output.iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_reconnect_rearms_envelope() {
        let mut unit = wired_unit(12);
        let mut input = [0.0f32; 32];
        input[0] = 1.0;
        let mut output = [0.0f32; 32];
        unit.run(&input, &mut output).unwrap();

        // Rebinding a single control silently restarts the envelope, so a
        // silent block afterwards renders pure silence instead of the tail.
        unit.connect_control(PortRole::Sustain, 80.0).unwrap();
        let mut tail = [1.0f32; 32];
        unit.run(&[0.0; 32], &mut tail).unwrap();
        assert!(tail.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_explicit_reset_rearms_envelope() {
        let mut unit = wired_unit(13);
        let mut input = [0.0f32; 16];
        input[0] = 1.0;
        let mut output = [0.0f32; 16];
        unit.run(&input, &mut output).unwrap();

        unit.reset();
        let mut tail = [1.0f32; 16];
        unit.run(&[0.0; 16], &mut tail).unwrap();
        assert!(tail.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_error_display() {
        let err = PortError::Unconnected(PortRole::Input);
        assert!(err.to_string().contains("never connected"));
        let err = PortError::KindMismatch(PortRole::Output);
        assert!(err.to_string().contains("connection kind"));
    }
}
