use std::f64::consts::TAU;

use approx::assert_relative_eq;
use galgen::generation::kinematics::{
    bulge_dispersion, circular_velocity, DISK_PLANAR_DISPERSION, DISK_VERTICAL_DISPERSION,
};
use galgen::generation::sampler::{disk_radius, plummer_radius};
use galgen::NVec2;
use galgen::{generate, generate_with, seeded_rng, ComponentKind, GalaxyError, GalaxyParams, ParticleSet, RandomSource};

const G: f64 = 6.67430e-11;

/// Small SI galaxy used by most tests
pub fn test_params(n_disk: usize, n_bulge: usize) -> GalaxyParams {
    GalaxyParams::new(n_disk, n_bulge, 3.0e20, 1.0e20, 1.0e41, 3.0e40, G)
}

fn disk_mass(set: &ParticleSet) -> f64 {
    set.disk().iter().map(|p| p.m).sum()
}

fn bulge_mass(set: &ParticleSet) -> f64 {
    set.bulge().iter().map(|p| p.m).sum()
}

// ==================================================================================
// Shape and bookkeeping
// ==================================================================================

#[test]
fn particle_count_matches_components() {
    for (n_disk, n_bulge) in [(1, 1), (100, 40), (0, 25), (25, 0), (1000, 400)] {
        let set = generate(&test_params(n_disk, n_bulge), Some(42)).unwrap();
        assert_eq!(set.len(), n_disk + n_bulge);
        assert_eq!(set.n_disk(), n_disk);
        assert_eq!(set.n_bulge(), n_bulge);
    }
}

#[test]
fn ids_are_one_based_and_contiguous() {
    let set = generate(&test_params(300, 120), Some(1)).unwrap();
    let ids: Vec<u64> = set.iter().map(|p| p.id).collect();
    let expected: Vec<u64> = (1..=420).collect();
    assert_eq!(ids, expected);
}

#[test]
fn disk_particles_come_first() {
    let set = generate(&test_params(50, 20), Some(1)).unwrap();
    assert!(set.disk().iter().all(|p| p.kind == ComponentKind::Disk));
    assert!(set.bulge().iter().all(|p| p.kind == ComponentKind::Bulge));
    assert_eq!(set.particles()[49].id, 50);
    assert_eq!(set.bulge()[0].id, 51);
}

#[test]
fn component_masses_are_conserved() {
    let p = test_params(1000, 400);
    let set = generate(&p, Some(3)).unwrap();

    assert_relative_eq!(disk_mass(&set), 1.0e41, max_relative = 1e-12);
    assert_relative_eq!(bulge_mass(&set), 3.0e40, max_relative = 1e-12);
    assert_relative_eq!(set.total_mass(), 1.3e41, max_relative = 1e-12);

    // uniform split within each component
    assert!(set.disk().iter().all(|q| q.m == 1.0e41 / 1000.0));
    assert!(set.bulge().iter().all(|q| q.m == 3.0e40 / 400.0));
}

#[test]
fn radii_respect_cutoffs() {
    let p = test_params(5000, 5000);
    let set = generate(&p, Some(11)).unwrap();

    for q in set.disk() {
        assert!(q.radius() <= 3.0 * 3.0e20 * (1.0 + 1e-12), "disk radius {}", q.radius());
    }
    for q in set.bulge() {
        assert!(q.radius() <= 10.0 * 1.0e20 * (1.0 + 1e-12), "bulge radius {}", q.radius());
    }
}

#[test]
fn output_is_finite() {
    let set = generate(&test_params(2000, 800), Some(5)).unwrap();
    for q in &set {
        assert!(q.x.iter().all(|c| c.is_finite()), "{q:?}");
        assert!(q.v.iter().all(|c| c.is_finite()), "{q:?}");
    }
}

// ==================================================================================
// Reproducibility
// ==================================================================================

#[test]
fn same_seed_is_bit_identical() {
    let p = test_params(500, 200);
    let a = generate(&p, Some(1234)).unwrap();
    let b = generate(&p, Some(1234)).unwrap();

    for (qa, qb) in a.iter().zip(b.iter()) {
        assert_eq!(qa.m.to_bits(), qb.m.to_bits());
        assert_eq!(qa.x.x.to_bits(), qb.x.x.to_bits());
        assert_eq!(qa.x.y.to_bits(), qb.x.y.to_bits());
        assert_eq!(qa.v.x.to_bits(), qb.v.x.to_bits());
        assert_eq!(qa.v.y.to_bits(), qb.v.y.to_bits());
    }
    assert_eq!(a, b);
}

#[test]
fn caller_owned_stream_matches_seeded_generate() {
    let p = test_params(80, 30);
    let mut rng = seeded_rng(Some(9));
    let a = generate_with(&p, &mut rng).unwrap();
    let b = generate(&p, Some(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_move_particles_but_keep_totals() {
    let p = test_params(400, 100);
    let a = generate(&p, Some(1)).unwrap();
    let b = generate(&p, Some(2)).unwrap();

    assert_eq!(a.len(), b.len());
    assert_ne!(
        a.iter().map(|q| q.x).collect::<Vec<_>>(),
        b.iter().map(|q| q.x).collect::<Vec<_>>()
    );
    assert_relative_eq!(a.total_mass(), b.total_mass(), max_relative = 1e-12);
    assert_relative_eq!(disk_mass(&a), disk_mass(&b), max_relative = 1e-12);
}

#[test]
fn unseeded_runs_differ() {
    let p = test_params(100, 50);
    let a = generate(&p, None).unwrap();
    let b = generate(&p, None).unwrap();
    assert_ne!(a, b);
}

#[test]
fn single_bulge_particle_replays_from_stream() {
    let p = GalaxyParams::new(0, 1, 3.0e20, 1.0e20, 1.0e41, 3.0e40, G);
    let set = generate(&p, Some(7)).unwrap();

    assert_eq!(set.len(), 1);
    let q = &set.particles()[0];
    assert_eq!(q.id, 1);
    assert_eq!(q.m, 3.0e40);
    assert!(q.radius() <= 1.0e21);

    // bulge radius, bulge angle, vx draw, vy draw
    let mut rng = seeded_rng(Some(7));
    let r = plummer_radius(rng.uniform(), 1.0e20);
    let theta = TAU * rng.uniform();
    let draw_x = rng.standard_normal();
    let draw_y = rng.standard_normal();

    assert_relative_eq!(q.radius(), r, max_relative = 1e-12);
    assert_relative_eq!(q.x.x, r * theta.cos(), max_relative = 1e-12);

    let sigma = bulge_dispersion(&p);
    let expected = sigma * (draw_x * draw_x + draw_y * draw_y).sqrt();
    assert!(q.v.norm().is_finite());
    assert_relative_eq!(q.v.norm(), expected, max_relative = 1e-12);
}

#[test]
fn disk_and_bulge_replay_from_stream() {
    let (n_disk, n_bulge) = (3, 2);
    let p = test_params(n_disk, n_bulge);
    let set = generate(&p, Some(7)).unwrap();

    let mut rng = seeded_rng(Some(7));
    // disk radii, disk angles, bulge radii, bulge angles, then velocity batches
    let disk_r: Vec<f64> = (0..n_disk).map(|_| disk_radius(rng.exponential(), 3.0e20)).collect();
    let disk_theta: Vec<f64> = (0..n_disk).map(|_| TAU * rng.uniform()).collect();
    let bulge_r: Vec<f64> = (0..n_bulge).map(|_| plummer_radius(rng.uniform(), 1.0e20)).collect();
    let bulge_theta: Vec<f64> = (0..n_bulge).map(|_| TAU * rng.uniform()).collect();
    let n_r: Vec<f64> = (0..n_disk).map(|_| rng.standard_normal()).collect();
    let n_t: Vec<f64> = (0..n_disk).map(|_| rng.standard_normal()).collect();
    let n_x: Vec<f64> = (0..n_disk).map(|_| rng.standard_normal()).collect();
    let n_y: Vec<f64> = (0..n_disk).map(|_| rng.standard_normal()).collect();
    let b_x: Vec<f64> = (0..n_bulge).map(|_| rng.standard_normal()).collect();
    let b_y: Vec<f64> = (0..n_bulge).map(|_| rng.standard_normal()).collect();

    for (i, q) in set.disk().iter().enumerate() {
        let (sin, cos) = disk_theta[i].sin_cos();
        let vc = circular_velocity(disk_r[i], &p);
        let vr = DISK_PLANAR_DISPERSION * vc * n_r[i];
        let vt = DISK_PLANAR_DISPERSION * vc * n_t[i];
        let expected = NVec2::new(
            -vc * sin + vr * cos - vt * sin + DISK_VERTICAL_DISPERSION * vc * n_x[i],
            vc * cos + vr * sin + vt * cos + DISK_VERTICAL_DISPERSION * vc * n_y[i],
        );

        assert_relative_eq!(q.x, NVec2::new(disk_r[i] * cos, disk_r[i] * sin), epsilon = 1e-6, max_relative = 1e-12);
        assert_relative_eq!(q.v, expected, epsilon = 1e-6, max_relative = 1e-12);
    }

    let sigma = bulge_dispersion(&p);
    for (i, q) in set.bulge().iter().enumerate() {
        let (sin, cos) = bulge_theta[i].sin_cos();
        assert_relative_eq!(q.x, NVec2::new(bulge_r[i] * cos, bulge_r[i] * sin), epsilon = 1e-6, max_relative = 1e-12);
        assert_relative_eq!(q.v, NVec2::new(sigma * b_x[i], sigma * b_y[i]), epsilon = 1e-6, max_relative = 1e-12);
    }
}

// ==================================================================================
// Kinematics
// ==================================================================================

#[test]
fn zero_bulge_mass_gives_motionless_bulge() {
    let p = GalaxyParams::new(200, 100, 3.0e20, 1.0e20, 1.0e41, 0.0, G);
    let set = generate(&p, Some(13)).unwrap();
    for q in set.bulge() {
        assert_eq!(q.v.x, 0.0);
        assert_eq!(q.v.y, 0.0);
        assert_eq!(q.m, 0.0);
    }
    assert!(set.disk().iter().all(|q| q.v.norm().is_finite()));
}

#[test]
fn disk_has_net_counter_clockwise_rotation() {
    let set = generate(&test_params(3000, 0), Some(17)).unwrap();
    let lz: f64 = set.disk().iter().map(|q| q.x.x * q.v.y - q.x.y * q.v.x).sum();
    assert!(lz > 0.0);
}

#[test]
fn bulge_has_no_net_rotation() {
    let set = generate(&test_params(0, 5000), Some(19)).unwrap();
    let n = set.len() as f64;
    let sigma = bulge_dispersion(&test_params(0, 5000));
    let mean_vx = set.iter().map(|q| q.v.x).sum::<f64>() / n;
    let mean_vy = set.iter().map(|q| q.v.y).sum::<f64>() / n;
    // 5 standard errors
    assert!(mean_vx.abs() < 5.0 * sigma / n.sqrt());
    assert!(mean_vy.abs() < 5.0 * sigma / n.sqrt());
}

// ==================================================================================
// Validation
// ==================================================================================

#[test]
fn invalid_parameters_fail_before_sampling() {
    let bad = [
        GalaxyParams::new(0, 0, 3.0e20, 1.0e20, 1.0e41, 3.0e40, G),
        GalaxyParams::new(10, 10, 0.0, 1.0e20, 1.0e41, 3.0e40, G),
        GalaxyParams::new(10, 10, 3.0e20, -1.0e20, 1.0e41, 3.0e40, G),
        GalaxyParams::new(10, 10, 3.0e20, 1.0e20, -1.0e41, 3.0e40, G),
        GalaxyParams::new(10, 10, 3.0e20, 1.0e20, 1.0e41, 3.0e40, 0.0),
    ];

    for p in bad {
        let mut rng = seeded_rng(Some(1));
        let mut untouched = seeded_rng(Some(1));
        let result = generate_with(&p, &mut rng);
        assert!(matches!(result, Err(GalaxyError::Configuration(_))), "{p:?}");
        // nothing was drawn
        assert_eq!(rng.uniform().to_bits(), untouched.uniform().to_bits());
    }
}
