pub mod json;
pub mod text;
pub mod tsv;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_rank(rank: Option<usize>) -> String {
    match rank {
        Some(r) => r.to_string(),
        None => "-".to_string(),
    }
}

pub fn format_cell(score: f64, attempted: bool, excluded: bool) -> String {
    if excluded {
        "x".to_string()
    } else if !attempted {
        "-".to_string()
    } else {
        format_score(score)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
