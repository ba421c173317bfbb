//! `troons` — run a troon rail scenario and print the trailing report window.
//!
//! ```text
//! troons scenario.txt                 # report lines on stdout
//! troons -j 8 --csv trace.csv in.txt  # 8 workers, CSV export alongside
//! RUST_LOG=troon_sim=debug troons in.txt
//! ```
//!
//! Exit codes: `0` success, `1` usage error, `2` input unreadable,
//! `3` malformed input or invalid network, `4` simulation or output failure.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use troon_network::{NetworkError, load_scenario};
use troon_output::{CsvWriter, ReportObserver, TextWriter};
use troon_sim::{SimBuilder, SimError};

const EXIT_USAGE: u8 = 1;
const EXIT_READ:  u8 = 2;
const EXIT_INPUT: u8 = 3;
const EXIT_RUN:   u8 = 4;

/// Troon rail network simulator.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Scenario file: stations, length matrix, line routes, run parameters.
    input: PathBuf,

    /// Worker threads for the per-tick fan-outs (default: one per core).
    #[arg(
        short = 'j',
        long,
        env = "TROONS_THREADS",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    threads: Option<usize>,

    /// Also write every reported troon as a CSV row to this path.
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// The log level for stderr diagnostics; `RUST_LOG` takes precedence.
    /// opts: (error, warn, info, debug, trace)
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

/// A failed run: the process exit code plus the error chain to print.
struct Failure {
    code:  u8,
    error: anyhow::Error,
}

impl Failure {
    fn new(code: u8, error: impl Into<anyhow::Error>) -> Self {
        Self { code, error: error.into() }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_logging(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            eprintln!("troons: {:#}", failure.error);
            ExitCode::from(failure.code)
        }
    }
}

/// Diagnostics go to stderr so stdout carries only report lines.
fn init_logging(level: Level) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .init();
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let path = cli.input.display();

    let scenario = load_scenario(&cli.input).map_err(|e| match e {
        NetworkError::Io(_) => Failure::new(EXIT_READ, anyhow!(e).context(format!("cannot read {path}"))),
        e => Failure::new(EXIT_INPUT, anyhow!(e).context(format!("malformed input in {path}"))),
    })?;

    let mut sim = SimBuilder::from_scenario(scenario)
        .threads(cli.threads)
        .build()
        .map_err(|e| match e {
            SimError::NoSpawnPoint(_) | SimError::MissingLink { .. } => {
                Failure::new(EXIT_INPUT, anyhow!(e).context("invalid network"))
            }
            e => Failure::new(EXIT_RUN, anyhow!(e).context("cannot start simulation")),
        })?;

    info!(
        stations = sim.network.station_count(),
        links = sim.network.link_count(),
        total_ticks = sim.config.total_ticks,
        report_window = sim.config.report_window,
        threads = ?cli.threads,
        "simulation starting"
    );

    let csv = cli
        .csv
        .as_deref()
        .map(|p| {
            CsvWriter::create(p, &sim.network.directory)
                .with_context(|| format!("cannot create {}", p.display()))
        })
        .transpose()
        .map_err(|e| Failure::new(EXIT_RUN, e))?;
    let text = TextWriter::new(std::io::stdout().lock());
    let mut observer = ReportObserver::new((text, csv));

    sim.run(&mut observer)
        .map_err(|e| Failure::new(EXIT_RUN, anyhow!(e).context("simulation failed")))?;
    if let Some(e) = observer.take_error() {
        return Err(Failure::new(EXIT_RUN, anyhow!(e).context("cannot write report")));
    }

    let census = sim.census();
    info!(
        spawned = sim.spawned(),
        queued = census.queued,
        loading = census.loading,
        transiting = census.transiting,
        reports = observer.reports(),
        "simulation finished"
    );
    Ok(())
}
