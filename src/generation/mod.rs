//! Galaxy initial-condition generator.
//!
//! `generate` runs the whole pipeline: validate → sample disk → sample bulge
//! → disk velocities → bulge velocities → assemble. The random stream is
//! consumed in exactly that order, so a seed fixes the output bit for bit.

pub mod states;
pub mod params;
pub mod random;
pub mod sampler;
pub mod kinematics;
pub mod assembler;
pub mod scenario;

use tracing::debug;

use crate::error::GalaxyResult;
use assembler::{assemble, ComponentParts};
use kinematics::{assign_bulge_velocities, assign_disk_velocities};
use params::GalaxyParams;
use random::{seeded_rng, RandomSource};
use sampler::sample_component;
use states::ParticleSet;

/// Generate a particle set from `params`, seeding a fresh stream.
///
/// `None` draws a seed from the thread-local entropy source, so the result
/// is not reproducible.
pub fn generate(params: &GalaxyParams, seed: Option<u64>) -> GalaxyResult<ParticleSet> {
    let mut rng = seeded_rng(seed);
    generate_with(params, &mut rng)
}

/// Generate a particle set from `params` using a caller-owned stream.
///
/// Parameters are validated before the first draw; on error `rng` is left
/// untouched.
pub fn generate_with<R: RandomSource>(params: &GalaxyParams, rng: &mut R) -> GalaxyResult<ParticleSet> {
    params.validate()?;

    let disk = sample_component(&params.disk, rng);
    let bulge = sample_component(&params.bulge, rng);
    debug!(n_disk = disk.len(), n_bulge = bulge.len(), "positions sampled");

    let disk_v = assign_disk_velocities(&disk, params, rng);
    let bulge_v = assign_bulge_velocities(&bulge, params, rng);
    debug!("velocities assigned");

    Ok(assemble(
        ComponentParts {
            params: &params.disk,
            sample: &disk,
            velocities: disk_v,
        },
        ComponentParts {
            params: &params.bulge,
            sample: &bulge,
            velocities: bulge_v,
        },
    ))
}
