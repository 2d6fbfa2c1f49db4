//! Physical parameters for galaxy generation
//!
//! `GalaxyParams` holds the component settings:
//! - particle counts, scale radii and total masses for disk and bulge,
//! - the gravitational constant `G`
//!
//! Defaults describe a Milky-Way-like galaxy in SI units.

use crate::error::{GalaxyError, GalaxyResult};
use crate::generation::states::ComponentKind;

pub const DEFAULT_N_DISK: usize = 10_000;
pub const DEFAULT_N_BULGE: usize = 3_000;
pub const DEFAULT_DISK_RADIUS: f64 = 3.0e20; // ~10 kpc
pub const DEFAULT_BULGE_RADIUS: f64 = 1.0e20; // ~3 kpc
pub const DEFAULT_MASS_DISK: f64 = 1.0e41; // ~5e10 solar masses
pub const DEFAULT_MASS_BULGE: f64 = 3.0e40; // ~1.5e10 solar masses
pub const G_SI: f64 = 6.67430e-11; // m^3 kg^-1 s^-2

/// Settings for a single component (disk or bulge)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentParams {
    pub kind: ComponentKind,
    pub count: usize, // number of particles
    pub scale_radius: f64, // exponential scale length (disk) or Plummer radius (bulge), m
    pub mass: f64, // total component mass, kg
}

impl ComponentParams {
    /// Uniform per-particle mass, `mass / count`. Zero for an empty component.
    pub fn particle_mass(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mass / self.count as f64
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyParams {
    pub disk: ComponentParams,
    pub bulge: ComponentParams,
    pub G: f64, // gravitational constant
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self::new(
            DEFAULT_N_DISK,
            DEFAULT_N_BULGE,
            DEFAULT_DISK_RADIUS,
            DEFAULT_BULGE_RADIUS,
            DEFAULT_MASS_DISK,
            DEFAULT_MASS_BULGE,
            G_SI,
        )
    }
}

impl GalaxyParams {
    #[allow(clippy::too_many_arguments)]
    pub fn new(n_disk: usize, n_bulge: usize, disk_radius: f64, bulge_radius: f64, mass_disk: f64, mass_bulge: f64, G: f64) -> Self {
        Self {
            disk: ComponentParams {
                kind: ComponentKind::Disk,
                count: n_disk,
                scale_radius: disk_radius,
                mass: mass_disk,
            },
            bulge: ComponentParams {
                kind: ComponentKind::Bulge,
                count: n_bulge,
                scale_radius: bulge_radius,
                mass: mass_bulge,
            },
            G,
        }
    }

    pub fn total_count(&self) -> usize {
        self.disk.count + self.bulge.count
    }

    /// Reject parameter sets the generator cannot honor.
    ///
    /// Radii and `G` must be finite and strictly positive, masses finite and
    /// non-negative, and at least one particle must be requested.
    pub fn validate(&self) -> GalaxyResult<()> {
        if self.total_count() == 0 {
            return Err(GalaxyError::config("n_disk + n_bulge must be at least 1"));
        }

        for c in [&self.disk, &self.bulge] {
            let name = c.kind.label();
            if !(c.scale_radius.is_finite() && c.scale_radius > 0.0) {
                return Err(GalaxyError::config(format!(
                    "{name} radius must be finite and positive, got {}",
                    c.scale_radius
                )));
            }
            if !(c.mass.is_finite() && c.mass >= 0.0) {
                return Err(GalaxyError::config(format!(
                    "{name} mass must be finite and non-negative, got {}",
                    c.mass
                )));
            }
        }

        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(GalaxyError::config(format!(
                "G must be finite and positive, got {}",
                self.G
            )));
        }

        Ok(())
    }
}
