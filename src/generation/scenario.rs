//! Build a validated generation scenario from configuration
//!
//! Takes a `GalaxyConfig` (YAML-facing) and produces the runtime bundle:
//! - physical parameters (`GalaxyParams`)
//! - the optional seed
//! - output settings
//!
//! Validation happens here, so a `GalaxyScenario` that exists is always safe
//! to hand to `generate`.

use tracing::info;

use crate::configuration::config::{GalaxyConfig, OutputConfig};
use crate::error::GalaxyResult;
use crate::generation::generate;
use crate::generation::params::GalaxyParams;
use crate::generation::states::ParticleSet;

#[derive(Debug, Clone)]
pub struct GalaxyScenario {
    pub params: GalaxyParams,
    pub seed: Option<u64>,
    pub output: OutputConfig,
}

impl GalaxyScenario {
    pub fn build_scenario(cfg: GalaxyConfig) -> GalaxyResult<Self> {
        // Parameters (runtime) from the component and constant sections
        let params = GalaxyParams::new(
            cfg.disk.count,
            cfg.bulge.count,
            cfg.disk.scale_radius,
            cfg.bulge.scale_radius,
            cfg.disk.mass,
            cfg.bulge.mass,
            cfg.parameters.G,
        );
        params.validate()?;

        info!(
            n_disk = params.disk.count,
            n_bulge = params.bulge.count,
            seed = ?cfg.parameters.seed,
            "scenario accepted"
        );

        Ok(Self {
            params,
            seed: cfg.parameters.seed,
            output: cfg.output,
        })
    }

    pub fn generate(&self) -> GalaxyResult<ParticleSet> {
        generate(&self.params, self.seed)
    }
}
