//! Core state types for a generated galaxy.
//!
//! Defines the per-particle record and the ordered particle set:
//! - `Particle`    one body with id, mass, position and velocity (`NVec2`)
//! - `ParticleSet` disk particles first, then bulge particles
//!
//! A `ParticleSet` is built once by the assembler and only read afterwards.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Which galactic component a particle was sampled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Disk,
    Bulge,
}

impl ComponentKind {
    pub fn label(self) -> &'static str {
        match self {
            ComponentKind::Disk => "disk",
            ComponentKind::Bulge => "bulge",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: u64, // 1-based, disk-then-bulge order
    pub kind: ComponentKind, // component the particle belongs to
    pub m: f64, // mass (kg)
    pub x: NVec2, // position (m)
    pub v: NVec2, // velocity (m/s)
}

impl Particle {
    /// Distance from the galactic center
    pub fn radius(&self) -> f64 {
        self.x.norm()
    }
}

/// Ordered, immutable collection of generated particles.
///
/// Invariant: `len() == n_disk() + n_bulge()` and the first `n_disk()`
/// particles are disk particles.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    n_disk: usize,
    n_bulge: usize,
}

impl ParticleSet {
    pub(crate) fn new(particles: Vec<Particle>, n_disk: usize, n_bulge: usize) -> Self {
        debug_assert_eq!(particles.len(), n_disk + n_bulge);
        Self {
            particles,
            n_disk,
            n_bulge,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn n_disk(&self) -> usize {
        self.n_disk
    }

    pub fn n_bulge(&self) -> usize {
        self.n_bulge
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn disk(&self) -> &[Particle] {
        &self.particles[..self.n_disk]
    }

    pub fn bulge(&self) -> &[Particle] {
        &self.particles[self.n_disk..]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Sum of particle masses over the whole set
    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(|p| p.m).sum()
    }
}

impl<'a> IntoIterator for &'a ParticleSet {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
