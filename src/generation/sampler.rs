//! Radial and angular sampling of particle positions
//!
//! Disk radii follow an exponential profile, bulge radii the projected
//! Plummer profile. Each component draws all of its radii first and then all
//! of its angles from the shared stream.

use std::f64::consts::TAU;

use crate::generation::params::ComponentParams;
use crate::generation::random::RandomSource;
use crate::generation::states::{ComponentKind, NVec2};

/// Disk radii are clamped at this many scale lengths
pub const DISK_CUTOFF: f64 = 3.0;
/// Bulge radii are clamped at this many Plummer radii
pub const BULGE_CUTOFF: f64 = 10.0;

/// Polar and Cartesian coordinates for one component, index-aligned
#[derive(Debug, Clone, Default)]
pub struct ComponentSample {
    pub radii: Vec<f64>,
    pub angles: Vec<f64>,
    pub positions: Vec<NVec2>,
}

impl ComponentSample {
    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }
}

/// Draw radii and angles for `component` and convert them to positions.
///
/// Consumes `count` radial draws followed by `count` angular draws.
pub fn sample_component<R: RandomSource>(component: &ComponentParams, rng: &mut R) -> ComponentSample {
    let n = component.count;
    let a = component.scale_radius;

    let radii: Vec<f64> = match component.kind {
        ComponentKind::Disk => (0..n).map(|_| disk_radius(rng.exponential(), a)).collect(),
        ComponentKind::Bulge => (0..n).map(|_| plummer_radius(rng.uniform(), a)).collect(),
    };

    let angles: Vec<f64> = (0..n).map(|_| TAU * rng.uniform()).collect();

    let positions = radii
        .iter()
        .zip(angles.iter())
        .map(|(&r, &theta)| NVec2::new(r * theta.cos(), r * theta.sin()))
        .collect();

    ComponentSample {
        radii,
        angles,
        positions,
    }
}

/// Scale a unit exponential variate by the disk scale length and clamp
pub fn disk_radius(e: f64, scale: f64) -> f64 {
    (scale * e).clamp(0.0, DISK_CUTOFF * scale)
}

/// Inverse transform of the projected Plummer cumulative mass.
///
/// `u -> 0` sends the raw radius to infinity; the clamp maps it to the
/// cutoff. `u -> 1` gives zero.
pub fn plummer_radius(u: f64, scale: f64) -> f64 {
    let raw = scale * (u.powf(-2.0 / 3.0) - 1.0).sqrt();
    if raw.is_nan() {
        // u == 1 up to rounding leaves a tiny negative under the root
        return 0.0;
    }
    raw.clamp(0.0, BULGE_CUTOFF * scale)
}
