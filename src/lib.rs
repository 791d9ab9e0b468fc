//! hat420 - an input-triggered hi-hat noise generator
//!
//! One algorithm: white noise amplitude-modulated by a peak-follower
//! envelope with a quadratic-ratio decay. Feed it an impulse and it answers
//! with a decaying noise burst; feed it program material and the noise
//! shadows the input's transients. Two controls shape the result: output
//! gain and a sustain value that sets how slowly the envelope falls.
//!
//! [`HatVoice`] is the processing core, safe to call from a realtime audio
//! callback. The [`host`] module wraps it in the four-port contract
//! (amplitude, sustain, output, input) that a plugin host drives, together
//! with the port metadata and an explicit descriptor [`Registry`].
//!
//! # Examples
//!
//! ```
//! use hat420::{HatParams, HatVoice};
//!
//! let mut voice = HatVoice::new();
//! let params = HatParams { amplitude: 0.5, sustain: 30.0 };
//!
//! // An impulse triggers the envelope; the tail is decaying noise.
//! let input = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let mut output = [0.0f32; 8];
//! voice.process(&params, &input, &mut output);
//! assert!(output.iter().all(|s| s.abs() <= 0.5));
//! ```

pub mod envelope;
pub mod host;
pub mod noise;
pub mod voice;

// Re-export commonly used types at the crate root
pub use envelope::PeakEnvelope;
pub use host::{HatUnit, PortError, PortRole, Registry, UnitDescriptor};
pub use noise::WhiteNoise;
pub use voice::{HatParams, HatVoice};
