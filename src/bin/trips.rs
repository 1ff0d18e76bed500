//! Runs the three of a kind simulation from the command line.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use trips::{Chart, Simulation, SimulationOptions};

/// Estimates the probability of being dealt a three of a kind in five cards
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of hands to deal
    #[arg(short = 'n', long, default_value_t = 30_000, value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// RNG seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write the SVG chart
    #[arg(short = 'o', long, default_value = "three_of_a_kind.svg")]
    chart: PathBuf,

    /// Skip writing the chart
    #[arg(long)]
    no_chart: bool,

    /// Spread trials over all CPU cores
    #[cfg(feature = "parallel")]
    #[arg(long)]
    parallel: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    const fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Warn;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.level())?;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    let trials = usize::try_from(args.trials).context("trial count does not fit in memory")?;
    let options = SimulationOptions::default()
        .with_trials(trials)
        .with_seed(seed);
    let mut simulation = Simulation::new(options);

    #[cfg(feature = "parallel")]
    let report = if args.parallel {
        simulation.run_parallel(rayon::current_num_threads())
    } else {
        simulation.run()
    };
    #[cfg(not(feature = "parallel"))]
    let report = simulation.run();
    let report = report.context("simulation aborted")?;

    anyhow::ensure!(report.trials > 0, "simulation produced no trials");
    println!("{report}");

    if !args.no_chart {
        Chart::default()
            .save(&report.series, &args.chart)
            .with_context(|| format!("write chart to {}", args.chart.display()))?;
    }

    Ok(())
}
