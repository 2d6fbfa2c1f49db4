//! Particle CSV files.
//!
//! Format: header `ID,mass(kg),x(m),y(m),vel_x(m/s),vel_y(m/s)` followed by
//! one row per particle. Reals use Rust's shortest round-trip exponent
//! notation (`1e41`, `-2.5e20`), so a written file parses back bit for bit.
//!
//! `write_csv` writes to `<path>.tmp` and renames it over `path` once every
//! row is flushed; a failed write or rename never leaves a truncated
//! particle file at the destination, nor the temp file beside it.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{GalaxyError, GalaxyResult};
use crate::generation::states::{NVec2, Particle, ParticleSet};

pub const CSV_HEADER: [&str; 6] = ["ID", "mass(kg)", "x(m)", "y(m)", "vel_x(m/s)", "vel_y(m/s)"];

/// One row of a particle file. Component membership is not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleRecord {
    pub id: u64,
    pub m: f64,
    pub x: NVec2,
    pub v: NVec2,
}

impl From<&Particle> for ParticleRecord {
    fn from(p: &Particle) -> Self {
        Self {
            id: p.id,
            m: p.m,
            x: p.x,
            v: p.v,
        }
    }
}

/// Write the header and every particle row to `out`
pub fn write_csv_to<W: Write>(mut out: W, set: &ParticleSet) -> GalaxyResult<()> {
    writeln!(out, "{}", CSV_HEADER.join(","))?;
    for p in set {
        writeln!(out, "{},{:e},{:e},{:e},{:e},{:e}", p.id, p.m, p.x.x, p.x.y, p.v.x, p.v.y)?;
    }
    out.flush()?;
    Ok(())
}

/// Write `set` to `path`, replacing any existing file
pub fn write_csv(path: &Path, set: &ParticleSet) -> GalaxyResult<()> {
    let temp_path = temp_path_for(path);

    let result = File::create(&temp_path)
        .map_err(GalaxyError::from)
        .and_then(|file| write_csv_to(BufWriter::new(file), set))
        .and_then(|()| fs::rename(&temp_path, path).map_err(GalaxyError::from));

    if let Err(e) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    info!(path = %path.display(), particles = set.len(), "wrote initial conditions");
    Ok(())
}

/// Read every particle row from `input`; the first line must be the header
pub fn read_csv_from<R: Read>(input: R) -> GalaxyResult<Vec<ParticleRecord>> {
    let mut records = Vec::new();

    for (idx, line) in BufReader::new(input).lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        if idx == 0 {
            let header: Vec<&str> = line.split(',').map(str::trim).collect();
            if header != CSV_HEADER {
                return Err(GalaxyError::Parse {
                    line: line_no,
                    message: format!("unexpected header `{line}`"),
                });
            }
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        records.push(parse_row(&line, line_no)?);
    }

    Ok(records)
}

/// Read a particle file written by [`write_csv`]
pub fn parse_csv(path: &Path) -> GalaxyResult<Vec<ParticleRecord>> {
    read_csv_from(File::open(path)?)
}

fn parse_row(line: &str, line_no: usize) -> GalaxyResult<ParticleRecord> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != CSV_HEADER.len() {
        return Err(GalaxyError::Parse {
            line: line_no,
            message: format!("expected {} columns, found {}", CSV_HEADER.len(), fields.len()),
        });
    }

    let id = fields[0].parse::<u64>().map_err(|e| GalaxyError::Parse {
        line: line_no,
        message: format!("ID `{}`: {e}", fields[0]),
    })?;

    let mut values = [0.0; 5];
    for (slot, (field, name)) in values.iter_mut().zip(fields[1..].iter().zip(&CSV_HEADER[1..])) {
        *slot = field.parse::<f64>().map_err(|e| GalaxyError::Parse {
            line: line_no,
            message: format!("{name} `{field}`: {e}"),
        })?;
    }

    Ok(ParticleRecord {
        id,
        m: values[0],
        x: NVec2::new(values[1], values[2]),
        v: NVec2::new(values[3], values[4]),
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
