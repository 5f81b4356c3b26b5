use crate::report::ReportError;
use crate::scoreboard::ScoreboardView;

pub fn render_scoreboard_json(view: &ScoreboardView) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(view)?;
    out.push('\n');
    Ok(out)
}
