//! White noise source.

use rand::Rng;

/// A white noise source.
///
/// Each sample is an independent draw from a uniform distribution over
/// `[-1.0, 1.0)`. The random source is owned by the instance and is
/// injectable, so tests can substitute a seeded generator for reproducible
/// output while normal use defaults to the thread-local RNG.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    /// Random number generator
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a new white noise source with the default ThreadRng.
    ///
    /// # Examples
    ///
    /// ```
    /// use hat420::WhiteNoise;
    ///
    /// let mut noise = WhiteNoise::new();
    /// let sample = noise.next_sample();
    /// assert!((-1.0..1.0).contains(&sample));
    /// ```
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for WhiteNoise<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise source with a custom RNG.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to use
    ///
    /// # Examples
    ///
    /// ```
    /// use hat420::WhiteNoise;
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let mut noise = WhiteNoise::with_rng(rng);
    /// let sample = noise.next_sample();
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generates the next noise sample.
    pub fn next_sample(&mut self) -> f32 {
        // Uniform over [-1.0, 1.0), fresh draw per sample
        self.rng.gen_range(-1.0..1.0)
    }
}
