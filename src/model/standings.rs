use serde::Serialize;

use crate::input::records::CompetitorId;
use crate::model::competitor::Competitor;

pub const FIXED_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    pub rounds_count: usize,
    pub disciplines_count: usize,
    pub columns_count: usize,
}

impl ColumnLayout {
    // Score and rank per round, one subtotal per discipline, plus the fixed columns.
    pub fn new(rounds_count: usize, disciplines_count: usize) -> Self {
        Self {
            rounds_count,
            disciplines_count,
            columns_count: rounds_count * 2 + disciplines_count + FIXED_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundCell {
    pub slug: String,
    pub score: f64,
    pub rank: Option<usize>,
    pub excluded: bool,
    pub attempted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisciplineTotal {
    pub discipline: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub position: usize,
    pub competitor: Competitor,
    pub cells: Vec<RoundCell>,
    pub discipline_totals: Vec<DisciplineTotal>,
    pub total: f64,
}

impl StandingRow {
    pub fn cell(&self, slug: &str) -> Option<&RoundCell> {
        self.cells.iter().find(|c| c.slug == slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standings {
    rows: Vec<StandingRow>,
    layout: ColumnLayout,
}

impl Standings {
    pub(crate) fn new(rows: Vec<StandingRow>, layout: ColumnLayout) -> Self {
        Self { rows, layout }
    }

    pub fn rows(&self) -> &[StandingRow] {
        &self.rows
    }

    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    pub fn row_for(&self, competitor: CompetitorId) -> Option<&StandingRow> {
        self.rows.iter().find(|r| r.competitor.id == competitor)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
