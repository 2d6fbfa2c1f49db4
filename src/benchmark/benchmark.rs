use std::time::Instant;

use crate::error::GalaxyResult;
use crate::generation::generate;
use crate::generation::params::{ComponentParams, GalaxyParams};

/// Default galaxy with `n` particles split 10:3 between disk and bulge
fn make_params(n: usize) -> GalaxyParams {
    let n_bulge = (n * 3 / 13).max(1);
    let n_disk = n - n_bulge;
    GalaxyParams {
        disk: ComponentParams {
            count: n_disk,
            ..GalaxyParams::default().disk
        },
        bulge: ComponentParams {
            count: n_bulge,
            ..GalaxyParams::default().bulge
        },
        ..GalaxyParams::default()
    }
}

/// Time `generate` for increasing particle counts
pub fn bench_generate() -> GalaxyResult<()> {
    let ns = [1_000, 10_000, 100_000, 1_000_000];
    let runs = 3; // averaged per N

    for n in ns {
        let params = make_params(n);

        // Warm up
        generate(&params, Some(42))?;

        let t0 = Instant::now();
        for seed in 0..runs {
            generate(&params, Some(seed))?;
        }
        let per_run = t0.elapsed().as_secs_f64() / runs as f64;

        println!("N = {n:8}, generate = {:9.6} s, {:12.0} particles/s", per_run, n as f64 / per_run);
    }

    Ok(())
}

/// Same measurement as comma-separated rows for plotting
pub fn bench_generate_curve() -> GalaxyResult<()> {
    println!("N,ms");

    for n in (10_000..=200_000).step_by(10_000) {
        let params = make_params(n);

        let t0 = Instant::now();
        generate(&params, Some(n as u64))?;
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
