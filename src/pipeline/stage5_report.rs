use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::report::ReportError;
use crate::report::json::render_scoreboard_json;
use crate::report::text::render_scoreboard_text;
use crate::report::tsv::render_standings_tsv;
use crate::scoreboard::ScoreboardView;

pub const JSON_REPORT: &str = "scoreboard.json";
pub const TEXT_REPORT: &str = "scoreboard.txt";
pub const TSV_REPORT: &str = "standings.tsv";

#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub text: PathBuf,
    pub tsv: PathBuf,
}

pub fn write_reports(view: &ScoreboardView, out_dir: &Path) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;

    let paths = ReportPaths {
        json: out_dir.join(JSON_REPORT),
        text: out_dir.join(TEXT_REPORT),
        tsv: out_dir.join(TSV_REPORT),
    };

    write_text(&paths.json, &render_scoreboard_json(view)?)?;
    write_text(&paths.text, &render_scoreboard_text(view))?;
    write_text(&paths.tsv, &render_standings_tsv(view))?;

    info!(out_dir = %out_dir.display(), "wrote scoreboard reports");
    Ok(paths)
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
