use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use series_scoreboard::input::{SeriesId, load_dump, load_settings};
use series_scoreboard::logging;
use series_scoreboard::model::Settings;
use series_scoreboard::pipeline::stage5_report::write_reports;
use series_scoreboard::report::ReportError;
use series_scoreboard::report::text::render_scoreboard_text;
use series_scoreboard::{Scoreboard, StoreError};

#[derive(Debug, Parser)]
#[command(name = "series-scoreboard", version, about = "Compute competition series scoreboards")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute the scoreboard of one series.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Series dump (JSON, optionally .gz).
    #[arg(long)]
    input: PathBuf,

    #[arg(long)]
    series: SeriesId,

    /// Settings mapping (JSON, optionally .gz); flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Round slug to exclude from scoring, e.g. `distance-2`. Repeatable.
    #[arg(long = "exclude-round", value_name = "SLUG")]
    exclude_rounds: Vec<String>,

    #[arg(long)]
    adjust_to_wind: bool,

    /// Score everyone in a single category.
    #[arg(long)]
    no_split: bool,

    /// Report directory. Without it the text report goes to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Run(args) => run_scoreboard(&args),
    }
}

fn run_scoreboard(args: &RunArgs) -> Result<(), CliError> {
    let settings = resolve_settings(args)?;
    let dump = load_dump(&args.input)?;

    let scoreboard = Scoreboard::new(&dump, args.series, settings);
    let view = scoreboard.view()?;

    let known: Vec<&str> = view
        .rounds_by_discipline
        .iter()
        .flat_map(|(_, rounds)| rounds.iter().map(|r| r.slug()))
        .collect();
    for slug in view.settings.excluded_rounds() {
        if !known.contains(&slug.as_str()) {
            warn!(slug = %slug, "excluded round does not exist in this series");
        }
    }

    match &args.out {
        Some(out_dir) => {
            let paths = write_reports(&view, out_dir)?;
            info!(json = %paths.json.display(), "scoreboard written");
        }
        None => print!("{}", render_scoreboard_text(&view)),
    }
    Ok(())
}

fn resolve_settings(args: &RunArgs) -> Result<Settings, StoreError> {
    let mut settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    settings = settings.with_excluded_rounds(args.exclude_rounds.iter().cloned());
    if args.adjust_to_wind {
        settings = settings.with_adjust_to_wind(true);
    }
    if args.no_split {
        settings = settings.with_split_by_categories(false);
    }
    Ok(settings)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
