//! Replay a JSON script of grid events and print the resulting layout.
//!
//! ```text
//! gridboard-replay <script.json> [--options <options.json>]
//! ```
//!
//! The script is a JSON array of events (`container`, `replace_items`,
//! `drag_end`, `resize_start`, `resize_move`, `resize_end`, `resize_cancel`).
//! Logs go to stderr; set `RUST_LOG=gridboard=debug` for per-intent detail.

use anyhow::{Context, Result, bail};
use gridboard::input::GridEvent;
use gridboard::options::default_options_path;
use gridboard::perf::{Operation, time};
use gridboard::{GridItem, GridOptions, InteractiveGrid};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

struct Args {
    script: PathBuf,
    options: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut script = None;
    let mut options = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--options" => {
                let path = args.next().context("--options requires a path")?;
                options = Some(PathBuf::from(path));
            }
            "-h" | "--help" => {
                println!("usage: gridboard-replay <script.json> [--options <options.json>]");
                std::process::exit(0);
            }
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument: {}", arg),
        }
    }
    Ok(Args {
        script: script.context("missing script path")?,
        options,
    })
}

#[derive(Serialize)]
struct Report<'a> {
    notifications: usize,
    items: &'a [GridItem],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;

    let options = match args.options.as_deref() {
        Some(path) => GridOptions::load(path).with_context(|| format!("loading options from {}", path.display()))?,
        None => match default_options_path() {
            Some(path) => GridOptions::load_or_default(&path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => GridOptions::default(),
        },
    };

    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let events: Vec<GridEvent> = serde_json::from_str(&script).context("parsing event script")?;
    info!(events = events.len(), columns = options.columns, rows = options.rows, "Replaying script");

    let mut grid = InteractiveGrid::new(options);
    let (fired, elapsed_ms) = time(Operation::Replay, || {
        events.into_iter().map(|event| grid.handle_event(event)).filter(|fired| *fired).count()
    });
    info!(fired, elapsed_ms = format!("{:.2}", elapsed_ms), "Replay finished");

    let report = Report {
        notifications: grid.notification_count(),
        items: grid.items(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
