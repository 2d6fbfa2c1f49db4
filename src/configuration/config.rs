//! Configuration types for loading galaxy scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! galaxy scenario. A scenario consists of:
//!
//! - [`ComponentConfig`]  – particle count, scale radius and mass of one component
//! - [`ParametersConfig`] – physical constants and the random seed
//! - [`OutputConfig`]     – where and how the result is emitted
//! - [`GalaxyConfig`]     – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document describes the default
//! Milky-Way-like galaxy in SI units.
//!
//! # YAML format
//!
//! ```yaml
//! disk:
//!   count: 1000
//!   scale_radius: 3.0e20    # m
//!   mass: 1.0e41            # kg
//!
//! bulge:
//!   count: 400
//!   scale_radius: 1.0e20
//!   mass: 3.0e40
//!
//! parameters:
//!   G: 6.67430e-11          # m^3 kg^-1 s^-2
//!   seed: 42                # omit for a non-reproducible run
//!
//! output:
//!   path: "galaxy_initial_conditions.csv"
//!   summary: true           # print statistics after writing
//!   view: false             # open the 2D viewer
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::GalaxyResult;
use crate::generation::params::{
    DEFAULT_BULGE_RADIUS, DEFAULT_DISK_RADIUS, DEFAULT_MASS_BULGE, DEFAULT_MASS_DISK, DEFAULT_N_BULGE, DEFAULT_N_DISK, G_SI,
};

pub const DEFAULT_OUTPUT_PATH: &str = "galaxy_initial_conditions.csv";

/// One galactic component
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComponentConfig {
    pub count: usize, // number of particles
    pub scale_radius: f64, // m
    pub mass: f64, // total mass, kg
}

impl ComponentConfig {
    fn disk_default() -> Self {
        Self {
            count: DEFAULT_N_DISK,
            scale_radius: DEFAULT_DISK_RADIUS,
            mass: DEFAULT_MASS_DISK,
        }
    }

    fn bulge_default() -> Self {
        Self {
            count: DEFAULT_N_BULGE,
            scale_radius: DEFAULT_BULGE_RADIUS,
            mass: DEFAULT_MASS_BULGE,
        }
    }
}

/// Physical constants and reproducibility
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub seed: Option<u64>, // deterministic seed, `None` for an entropy-seeded run
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: G_SI,
            seed: None,
        }
    }
}

/// Output collaborators to run after generation
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String, // CSV destination
    #[serde(default = "default_true")]
    pub summary: bool, // print statistics to the console
    #[serde(default)]
    pub view: bool, // open the 2D viewer
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            summary: true,
            view: false,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GalaxyConfig {
    #[serde(default = "ComponentConfig::disk_default")]
    pub disk: ComponentConfig, // rotating disk
    #[serde(default = "ComponentConfig::bulge_default")]
    pub bulge: ComponentConfig, // central bulge
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            disk: ComponentConfig::disk_default(),
            bulge: ComponentConfig::bulge_default(),
            parameters: ParametersConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GalaxyConfig {
    pub fn from_yaml_str(s: &str) -> GalaxyResult<Self> {
        // serde_yaml reads an empty document as unit, not as an empty map
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> GalaxyResult<Self> {
        let mut text = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut text)?;
        Self::from_yaml_str(&text)
    }
}

fn default_g() -> f64 {
    G_SI
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_true() -> bool {
    true
}
