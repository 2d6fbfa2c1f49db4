use galgen::{GalaxyConfig, GalaxyScenario, Summary};
use galgen::{parse_csv, run_2d, write_csv};
use galgen::{bench_generate, bench_generate_curve};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about = "Generate disk + bulge galaxy initial conditions as CSV")]
struct Args {
    /// Scenario YAML; looked up under `scenarios/` when not an existing path
    #[arg(short, default_value = "milky_way.yaml")]
    file_name: String,

    /// Output CSV path (overrides the scenario)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed (overrides the scenario)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Open the 2D viewer after writing
    #[arg(long)]
    view: bool,

    /// Skip the statistics report
    #[arg(long)]
    no_summary: bool,

    /// Print statistics for an existing particle file instead of generating
    #[arg(long, value_name = "CSV", requires = "n_disk")]
    inspect: Option<PathBuf>,

    /// Number of leading disk rows in the `--inspect` file (0 for a bulge-only file)
    #[arg(long)]
    n_disk: Option<usize>,

    /// Time generation for increasing particle counts
    #[arg(long)]
    bench: bool,

    /// Like `--bench`, as CSV rows
    #[arg(long)]
    bench_curve: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")?;
    Ok(())
}

// resolve here to keep main clean
fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn load_config(args: &Args) -> Result<GalaxyConfig> {
    let path = scenario_path(&args.file_name);
    let mut cfg = GalaxyConfig::load(&path).with_context(|| format!("failed to load scenario {}", path.display()))?;

    // command line wins over the file
    if let Some(seed) = args.seed {
        cfg.parameters.seed = Some(seed);
    }
    if let Some(output) = &args.output {
        cfg.output.path = output.display().to_string();
    }
    if args.view {
        cfg.output.view = true;
    }
    if args.no_summary {
        cfg.output.summary = false;
    }

    Ok(cfg)
}

fn inspect(path: &Path, n_disk: usize) -> Result<()> {
    let records = parse_csv(path).with_context(|| format!("failed to read {}", path.display()))?;
    println!("{}", Summary::of_records(&records, n_disk));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose)?;

    if args.bench {
        bench_generate()?;
        return Ok(());
    }
    if args.bench_curve {
        bench_generate_curve()?;
        return Ok(());
    }
    if let (Some(path), Some(n_disk)) = (&args.inspect, args.n_disk) {
        return inspect(path, n_disk);
    }

    let cfg = load_config(&args)?;
    let scenario = GalaxyScenario::build_scenario(cfg)?;
    let set = scenario.generate()?;

    let out_path = PathBuf::from(&scenario.output.path);
    write_csv(&out_path, &set).with_context(|| format!("failed to write {}", out_path.display()))?;
    info!("saved initial conditions to {}", out_path.display());

    if scenario.output.summary {
        println!("{}", Summary::of(&set));
    }

    if scenario.output.view {
        run_2d(set);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn inspect_needs_disk_row_count() {
        assert!(Args::try_parse_from(["galgen", "--inspect", "galaxy.csv"]).is_err());

        let args = Args::try_parse_from(["galgen", "--inspect", "galaxy.csv", "--n-disk", "1000"]).unwrap();
        assert_eq!(args.n_disk, Some(1000));
        assert_eq!(args.inspect, Some(PathBuf::from("galaxy.csv")));
    }
}
