#![allow(non_snake_case)]

pub mod generation;
pub mod configuration;
pub mod output;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use generation::{generate, generate_with};
pub use generation::states::{ComponentKind, NVec2, Particle, ParticleSet};
pub use generation::params::{ComponentParams, GalaxyParams};
pub use generation::random::{seeded_rng, RandomSource};
pub use generation::scenario::GalaxyScenario;

pub use configuration::config::{ComponentConfig, GalaxyConfig, OutputConfig, ParametersConfig};

pub use output::csv::{parse_csv, read_csv_from, write_csv, write_csv_to, ParticleRecord};
pub use output::summary::Summary;

pub use visualization::galaxy_vis2d::run_2d;

pub use benchmark::benchmark::{bench_generate, bench_generate_curve};

pub use error::{GalaxyError, GalaxyResult};
