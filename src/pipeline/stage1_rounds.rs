use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::input::records::RoundRecord;
use crate::model::round::Round;
use crate::model::settings::Settings;

// Order: number, then earliest creation time of the group, then discipline.
pub fn collect_rounds<'a, I>(records: I, settings: &Settings) -> Vec<Round>
where
    I: IntoIterator<Item = &'a RoundRecord>,
{
    let mut earliest: BTreeMap<(String, u32), DateTime<Utc>> = BTreeMap::new();
    for record in records {
        let discipline = record.discipline.trim();
        if discipline.is_empty() {
            warn!(round_id = record.id, "round without discipline; skipping");
            continue;
        }
        earliest
            .entry((discipline.to_string(), record.number))
            .and_modify(|at| {
                if record.created_at < *at {
                    *at = record.created_at;
                }
            })
            .or_insert(record.created_at);
    }

    let mut keyed: Vec<((String, u32), DateTime<Utc>)> = earliest.into_iter().collect();
    keyed.sort_by(|((da, na), ta), ((db, nb), tb)| {
        na.cmp(nb).then_with(|| ta.cmp(tb)).then_with(|| da.cmp(db))
    });

    keyed
        .into_iter()
        .map(|((discipline, number), _)| build_round(discipline, number, settings))
        .collect()
}

fn build_round(discipline: String, number: u32, settings: &Settings) -> Round {
    let round = Round::new(discipline, number);
    if settings.is_excluded(round.slug()) {
        round.excluded()
    } else {
        round
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_rounds.rs"]
mod tests;
