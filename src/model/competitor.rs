use serde::Serialize;

use crate::input::records::{CompetitionId, CompetitorId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub event_id: CompetitionId,
    pub name: String,
    pub section_name: Option<String>,
    pub country_code: Option<String>,
    pub suit_name: Option<String>,
    pub event_place: Option<String>,
}

impl Competitor {
    pub fn in_category(&self, category: &str) -> bool {
        self.section_name
            .as_deref()
            .is_some_and(|name| same_category(name, category))
    }
}

pub fn same_category(a: &str, b: &str) -> bool {
    category_key(a) == category_key(b)
}

pub fn category_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub competitor_id: CompetitorId,
    pub round_slug: String,
    pub score: Option<f64>,
    pub adjusted_score: Option<f64>,
}

impl ScoredResult {
    pub fn effective_score(&self, adjust_to_wind: bool) -> Option<f64> {
        let raw = finite(self.score);
        if adjust_to_wind {
            finite(self.adjusted_score).or(raw)
        } else {
            raw
        }
    }
}

// `+ 0.0` folds -0.0 into 0.0 so equal scores tie.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite()).map(|v| v + 0.0)
}
