//! Concatenation of component arrays into the final `ParticleSet`

use crate::generation::params::ComponentParams;
use crate::generation::sampler::ComponentSample;
use crate::generation::states::{NVec2, Particle, ParticleSet};

/// Positions and velocities for one component, plus its parameters
pub struct ComponentParts<'a> {
    pub params: &'a ComponentParams,
    pub sample: &'a ComponentSample,
    pub velocities: Vec<NVec2>,
}

/// Join disk then bulge, assigning ids `1..=N` in that order and a uniform
/// per-particle mass within each component.
pub fn assemble(disk: ComponentParts<'_>, bulge: ComponentParts<'_>) -> ParticleSet {
    let n_disk = disk.sample.len();
    let n_bulge = bulge.sample.len();
    let mut particles = Vec::with_capacity(n_disk + n_bulge);

    for part in [disk, bulge] {
        let m = part.params.particle_mass();
        let kind = part.params.kind;
        for (x, v) in part.sample.positions.iter().zip(part.velocities) {
            particles.push(Particle {
                id: particles.len() as u64 + 1,
                kind,
                m,
                x: *x,
                v,
            });
        }
    }

    ParticleSet::new(particles, n_disk, n_bulge)
}
