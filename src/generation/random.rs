//! Random source consumed by the sampler and kinematics passes.
//!
//! The generator never touches a global RNG: callers own the handle and pass
//! it by `&mut`, so two runs with the same seed see the same stream.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use rand_distr::StandardNormal;

/// Uniform and standard-normal draws from a single sequential stream
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Sample from N(0, 1)
    fn standard_normal(&mut self) -> f64;

    /// Exponential sample with unit scale, by inverse transform of one
    /// uniform draw. `1 - u` lies in `(0, 1]`, so the result is finite.
    fn exponential(&mut self) -> f64 {
        -(1.0 - self.uniform()).ln()
    }
}

impl<R: Rng> RandomSource for R {
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn standard_normal(&mut self) -> f64 {
        self.sample(StandardNormal)
    }
}

/// Build the owned stream handle for a run.
///
/// With `Some(seed)` the stream is fully reproducible; with `None` it is
/// seeded from the thread-local entropy source.
pub fn seeded_rng(seed: Option<u64>) -> ChaChaRng {
    match seed {
        Some(s) => ChaChaRng::seed_from_u64(s),
        None => ChaChaRng::from_rng(&mut rand::rng()),
    }
}
