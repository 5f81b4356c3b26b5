use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::input::records::CompetitorId;
use crate::model::competitor::{Competitor, ScoredResult};
use crate::model::round::{Round, RoundsByDiscipline};
use crate::model::standings::{ColumnLayout, DisciplineTotal, RoundCell, StandingRow, Standings};

#[derive(Debug, Clone)]
pub struct StandingsInputs<'a> {
    pub category: &'a str,
    pub rounds: &'a [Round],
    pub competitors: &'a [Competitor],
    pub results: &'a [ScoredResult],
    pub adjust_to_wind: bool,
}

pub fn build_standings(inputs: &StandingsInputs<'_>) -> Standings {
    let by_discipline = RoundsByDiscipline::group(inputs.rounds);
    let layout = ColumnLayout::new(inputs.rounds.len(), by_discipline.len());

    let mut lookup: BTreeMap<(CompetitorId, &str), &ScoredResult> = BTreeMap::new();
    for result in inputs.results {
        lookup
            .entry((result.competitor_id, result.round_slug.as_str()))
            .or_insert(result);
    }

    let mut rows: Vec<StandingRow> = inputs
        .competitors
        .iter()
        .map(|competitor| score_row(inputs, &by_discipline, &lookup, competitor))
        .collect();

    rank_rounds(inputs.rounds, &mut rows);

    rows.sort_by(|a, b| compare_scored(a.total, a.competitor.id, b.total, b.competitor.id));
    for (idx, row) in rows.iter_mut().enumerate() {
        row.position = idx + 1;
    }

    debug!(
        category = inputs.category,
        competitors = rows.len(),
        rounds = layout.rounds_count,
        "built standings"
    );
    Standings::new(rows, layout)
}

fn score_row(
    inputs: &StandingsInputs<'_>,
    by_discipline: &RoundsByDiscipline,
    lookup: &BTreeMap<(CompetitorId, &str), &ScoredResult>,
    competitor: &Competitor,
) -> StandingRow {
    let mut cells = Vec::with_capacity(inputs.rounds.len());
    for round in inputs.rounds {
        let score = lookup
            .get(&(competitor.id, round.slug()))
            .and_then(|r| r.effective_score(inputs.adjust_to_wind));
        cells.push(RoundCell {
            slug: round.slug().to_string(),
            score: if round.is_excluded() {
                0.0
            } else {
                score.unwrap_or(0.0)
            },
            rank: None,
            excluded: round.is_excluded(),
            attempted: score.is_some(),
        });
    }

    let discipline_totals = by_discipline
        .iter()
        .map(|(discipline, rounds)| DisciplineTotal {
            discipline: discipline.to_string(),
            total: rounds
                .iter()
                .filter_map(|round| cells.iter().find(|c| c.slug == round.slug()))
                .filter(|c| !c.excluded)
                .fold(0.0, |acc, c| acc + c.score),
        })
        .collect();
    let total = cells
        .iter()
        .filter(|c| !c.excluded)
        .fold(0.0, |acc, c| acc + c.score);

    StandingRow {
        position: 0,
        competitor: competitor.clone(),
        cells,
        discipline_totals,
        total,
    }
}

fn rank_rounds(rounds: &[Round], rows: &mut [StandingRow]) {
    for (col, round) in rounds.iter().enumerate() {
        if round.is_excluded() {
            continue;
        }
        let mut attempted: Vec<(usize, f64, CompetitorId)> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.cells[col].attempted)
            .map(|(idx, row)| (idx, row.cells[col].score, row.competitor.id))
            .collect();
        attempted.sort_by(|a, b| compare_scored(a.1, a.2, b.1, b.2));
        for (rank, (idx, _, _)) in attempted.into_iter().enumerate() {
            rows[idx].cells[col].rank = Some(rank + 1);
        }
    }
}

fn compare_scored(
    score_a: f64,
    id_a: CompetitorId,
    score_b: f64,
    id_b: CompetitorId,
) -> Ordering {
    score_b.total_cmp(&score_a).then_with(|| id_a.cmp(&id_b))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_standings.rs"]
mod tests;
