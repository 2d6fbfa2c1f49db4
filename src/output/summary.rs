//! Console statistics for a generated or loaded particle set

use std::fmt;

use crate::generation::states::ParticleSet;
use crate::output::csv::ParticleRecord;

/// Closed interval `[min, max]` accumulated over samples
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Range {
    fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub n_total: usize,
    pub n_disk: usize,
    pub n_bulge: usize,
    pub mass_total: f64,
    pub mass_disk: f64,
    pub mass_bulge: f64,
    pub x: Range,
    pub y: Range,
    pub vx: Range,
    pub vy: Range,
}

impl Summary {
    pub fn of(set: &ParticleSet) -> Self {
        let records: Vec<ParticleRecord> = set.iter().map(ParticleRecord::from).collect();
        Self::of_records(&records, set.n_disk())
    }

    /// Statistics for rows read from a file, where the first `n_disk` rows are
    /// disk particles
    pub fn of_records(records: &[ParticleRecord], n_disk: usize) -> Self {
        let n_disk = n_disk.min(records.len());
        let (disk, bulge) = records.split_at(n_disk);

        let mut summary = Self {
            n_total: records.len(),
            n_disk,
            n_bulge: bulge.len(),
            mass_total: 0.0,
            mass_disk: disk.iter().map(|r| r.m).sum(),
            mass_bulge: bulge.iter().map(|r| r.m).sum(),
            x: Range::default(),
            y: Range::default(),
            vx: Range::default(),
            vy: Range::default(),
        };
        summary.mass_total = summary.mass_disk + summary.mass_bulge;

        for r in records {
            summary.x.include(r.x.x);
            summary.y.include(r.x.y);
            summary.vx.include(r.v.x);
            summary.vy.include(r.v.y);
        }

        summary
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation Statistics:")?;
        writeln!(f, "Total particles: {}", self.n_total)?;
        writeln!(f, "  Disk particles: {}", self.n_disk)?;
        writeln!(f, "  Bulge particles: {}", self.n_bulge)?;
        writeln!(f, "Total mass: {:.2e} kg", self.mass_total)?;
        writeln!(f, "  Disk mass: {:.2e} kg", self.mass_disk)?;
        writeln!(f, "  Bulge mass: {:.2e} kg", self.mass_bulge)?;
        writeln!(f, "Position range: x [{:.2e}, {:.2e}] m", self.x.min, self.x.max)?;
        writeln!(f, "               y [{:.2e}, {:.2e}] m", self.y.min, self.y.max)?;
        writeln!(f, "Velocity range: vx [{:.2e}, {:.2e}] m/s", self.vx.min, self.vx.max)?;
        write!(f, "               vy [{:.2e}, {:.2e}] m/s", self.vy.min, self.vy.max)
    }
}
