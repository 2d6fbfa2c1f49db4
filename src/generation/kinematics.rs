//! Velocity assignment for sampled disk and bulge particles
//!
//! The disk rotates counter-clockwise at an approximate circular speed with
//! Gaussian dispersion on top; the bulge is a pressure-supported isotropic
//! cloud with a single global dispersion.

use crate::generation::params::GalaxyParams;
use crate::generation::random::RandomSource;
use crate::generation::sampler::ComponentSample;
use crate::generation::states::NVec2;

/// Radii below `RADIUS_FLOOR_FRACTION * disk_radius` are raised to it before
/// evaluating the circular speed, which divides by `r`.
pub const RADIUS_FLOOR_FRACTION: f64 = 1.0e-12;

/// Radial and tangential dispersion, as a fraction of `v_circ`
pub const DISK_PLANAR_DISPERSION: f64 = 0.1;
/// Stand-in for out-of-plane motion, as a fraction of `v_circ`
pub const DISK_VERTICAL_DISPERSION: f64 = 0.05;

/// Circular speed at radius `r` in the combined exponential-disk plus
/// Plummer-bulge potential approximation:
///
/// `v = sqrt(G (M_d (1 - e^{-r/a_d} (1 + r/a_d)) + M_b r^2 / (r + a_b)^3) / r)`
///
/// The closed form is a heuristic, not the enclosed mass of the sampled
/// profiles.
pub fn circular_velocity(r: f64, params: &GalaxyParams) -> f64 {
    let a_d = params.disk.scale_radius;
    let a_b = params.bulge.scale_radius;
    let r = r.max(RADIUS_FLOOR_FRACTION * a_d);

    let x = r / a_d;
    let disk_enclosed = params.disk.mass * (1.0 - (-x).exp() * (1.0 + x));
    let bulge_enclosed = params.bulge.mass * r.powi(2) / (r + a_b).powi(3);

    // rounding can push the disk term a hair below zero near the floor
    (params.G * (disk_enclosed + bulge_enclosed) / r).max(0.0).sqrt()
}

/// Global bulge velocity scale, `sqrt(G M_b / a_b)`
pub fn bulge_dispersion(params: &GalaxyParams) -> f64 {
    (params.G * params.bulge.mass / params.bulge.scale_radius).sqrt()
}

/// Velocities for the disk particles in `disk`.
///
/// Draw order: all radial dispersion draws, all tangential dispersion draws,
/// then the vertical stand-in draws for every x and then every y.
pub fn assign_disk_velocities<R: RandomSource>(disk: &ComponentSample, params: &GalaxyParams, rng: &mut R) -> Vec<NVec2> {
    let n = disk.len();

    let v_circ: Vec<f64> = disk.radii.iter().map(|&r| circular_velocity(r, params)).collect();

    let v_r_disp: Vec<f64> = v_circ
        .iter()
        .map(|v| DISK_PLANAR_DISPERSION * v * rng.standard_normal())
        .collect();
    let v_t_disp: Vec<f64> = v_circ
        .iter()
        .map(|v| DISK_PLANAR_DISPERSION * v * rng.standard_normal())
        .collect();

    let mut velocities: Vec<NVec2> = (0..n)
        .map(|i| {
            let (sin, cos) = disk.angles[i].sin_cos();
            NVec2::new(
                -v_circ[i] * sin + v_r_disp[i] * cos - v_t_disp[i] * sin,
                v_circ[i] * cos + v_r_disp[i] * sin + v_t_disp[i] * cos,
            )
        })
        .collect();

    for (v, vc) in velocities.iter_mut().zip(v_circ.iter()) {
        v.x += DISK_VERTICAL_DISPERSION * vc * rng.standard_normal();
    }
    for (v, vc) in velocities.iter_mut().zip(v_circ.iter()) {
        v.y += DISK_VERTICAL_DISPERSION * vc * rng.standard_normal();
    }

    velocities
}

/// Isotropic bulge velocities: every vx draw first, then every vy draw
pub fn assign_bulge_velocities<R: RandomSource>(bulge: &ComponentSample, params: &GalaxyParams, rng: &mut R) -> Vec<NVec2> {
    let n = bulge.len();
    let sigma = bulge_dispersion(params);

    let vx: Vec<f64> = (0..n).map(|_| sigma * rng.standard_normal()).collect();
    let vy: Vec<f64> = (0..n).map(|_| sigma * rng.standard_normal()).collect();

    vx.into_iter().zip(vy).map(|(x, y)| NVec2::new(x, y)).collect()
}
