//! Scenario player: replays a scripted tracking/trigger session through the
//! coordinator and logs every state change.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use portico::options::Options;
use portico::session::scenario::{
    visibility_follows_tracking, MAX_FLICKER_DURATION_MS,
};
use portico::session::{Scenario, ScenarioReport, Session};
use portico::PorticoError;
use serde::Serialize;

/// Replay door-cycle scenarios without a renderer.
#[derive(Parser, Debug)]
#[command(name = "portico", version)]
struct Args {
    /// Scenario TOML file. Defaults to the built-in reference scenario.
    scenario: Option<PathBuf>,

    /// Options TOML file.
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Replay a seeded random flicker scenario instead.
    #[arg(long, conflicts_with = "scenario")]
    random: Option<u64>,

    /// Length of the random scenario, in milliseconds.
    #[arg(
        long,
        default_value_t = 30_000,
        requires = "random",
        value_parser = clap::value_parser!(u64).range(1..=MAX_FLICKER_DURATION_MS)
    )]
    duration_ms: u64,

    /// Write the replay report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the options JSON schema and exit.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PorticoError> {
    if let Some(path) = &args.schema {
        write_json(path, &Options::json_schema())?;
        log::info!("wrote options schema to {}", path.display());
        return Ok(());
    }

    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let scenario = match (&args.scenario, args.random) {
        (Some(path), _) => Scenario::load(path)?,
        (None, Some(seed)) => Scenario::flicker(seed, args.duration_ms),
        (None, None) => Scenario::reference(),
    };

    let mut session = Session::with_options(options);
    let report = scenario.replay(&mut session);
    log_report(&report);

    if let Some(path) = &args.report {
        write_json(path, &report)?;
        log::info!("wrote report to {}", path.display());
    }
    Ok(())
}

fn log_report(report: &ScenarioReport) {
    for record in &report.transitions {
        let s = &record.state;
        log::info!(
            "{:>7} ms  {:?}/{:?}  doors {}  trigger {}  progress {:.3}",
            record.at_ms,
            s.tracking,
            s.animation,
            if s.doors_visible { "shown" } else { "hidden" },
            if s.trigger_enabled { "on" } else { "off" },
            s.door_progress,
        );
    }
    log::info!(
        "'{}': {} frames, {} completed cycles",
        report.name,
        report.frames,
        report.completed_cycles()
    );
    if !visibility_follows_tracking(report) {
        log::warn!("doors were shown while the target was out of view");
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PorticoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(std::io::Error::from)?;
    writer.flush()?;
    Ok(())
}
