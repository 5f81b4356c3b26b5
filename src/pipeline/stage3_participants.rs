use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::input::records::{CompetitorId, CompetitorRecord, ResultRecord};
use crate::model::competitor::{Competitor, ScoredResult};
use crate::model::round::{Round, round_slug};

pub fn collect_competitors<'a, I>(records: I, split_by_categories: bool) -> Vec<Competitor>
where
    I: IntoIterator<Item = &'a CompetitorRecord>,
{
    let mut seen: BTreeSet<CompetitorId> = BTreeSet::new();
    let mut out = Vec::new();
    for record in records {
        if !seen.insert(record.id) {
            warn!(competitor_id = record.id, "duplicate competitor; keeping first");
            continue;
        }
        let section_name = record
            .section_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        if split_by_categories && section_name.is_none() {
            warn!(
                competitor_id = record.id,
                event_id = record.event_id,
                "competitor has no section; dropping from category standings"
            );
            continue;
        }
        out.push(Competitor {
            id: record.id,
            event_id: record.event_id,
            name: record
                .profile_name
                .clone()
                .unwrap_or_else(|| format!("Competitor #{}", record.id)),
            section_name,
            country_code: record.country_code.clone(),
            suit_name: suit_label(
                record.manufacturer_name.as_deref(),
                record.suit_name.as_deref(),
            ),
            event_place: record.event_place.clone(),
        });
    }
    out
}

fn suit_label(manufacturer: Option<&str>, suit: Option<&str>) -> Option<String> {
    match (manufacturer, suit) {
        (Some(m), Some(s)) => Some(format!("{m} {s}")),
        (None, Some(s)) => Some(s.to_string()),
        _ => None,
    }
}

pub fn collect_results<'a, I>(
    records: I,
    rounds: &[Round],
    competitors: &[Competitor],
) -> Vec<ScoredResult>
where
    I: IntoIterator<Item = &'a ResultRecord>,
{
    let known_slugs: BTreeSet<&str> = rounds.iter().map(Round::slug).collect();
    let known_competitors: BTreeSet<CompetitorId> = competitors.iter().map(|c| c.id).collect();
    let mut seen: BTreeSet<(CompetitorId, String)> = BTreeSet::new();

    let mut out = Vec::new();
    let mut orphans = 0usize;
    for record in records {
        let slug = match (record.discipline.as_deref(), record.round_number) {
            (Some(discipline), Some(number)) => round_slug(discipline.trim(), number),
            _ => {
                orphans += 1;
                continue;
            }
        };
        if !known_slugs.contains(slug.as_str())
            || !known_competitors.contains(&record.competitor_id)
        {
            orphans += 1;
            continue;
        }
        if !seen.insert((record.competitor_id, slug.clone())) {
            warn!(
                result_id = record.id,
                competitor_id = record.competitor_id,
                round = %slug,
                "duplicate result for round; keeping first"
            );
            continue;
        }
        out.push(ScoredResult {
            competitor_id: record.competitor_id,
            round_slug: slug,
            score: record.score,
            adjusted_score: record.adjusted_score,
        });
    }
    if orphans > 0 {
        debug!(orphans, "dropped results referencing unknown rounds or competitors");
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_participants.rs"]
mod tests;
