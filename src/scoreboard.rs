use std::cell::OnceCell;
use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::input::{
    CompetitionId, CompetitionRecord, CompetitorId, RoundId, SeriesId, SeriesStore, StoreError,
};
use crate::model::category::{Category, CategoryGroup, OVERALL_CATEGORY};
use crate::model::competitor::{Competitor, ScoredResult};
use crate::model::round::{Round, RoundsByDiscipline};
use crate::model::settings::Settings;
use crate::model::standings::ColumnLayout;
use crate::pipeline::stage1_rounds::collect_rounds;
use crate::pipeline::stage2_categories::collect_categories;
use crate::pipeline::stage3_participants::{collect_competitors, collect_results};
use crate::pipeline::stage4_standings::{StandingsInputs, build_standings};

// Each store query runs at most once per instance; build a new instance to see new data.
pub struct Scoreboard<'s, S: SeriesStore + ?Sized> {
    store: &'s S,
    series: SeriesId,
    settings: Settings,
    competitions: OnceCell<Vec<CompetitionRecord>>,
    round_ids: OnceCell<Vec<RoundId>>,
    rounds: OnceCell<Vec<Round>>,
    rounds_by_discipline: OnceCell<RoundsByDiscipline>,
    competitors: OnceCell<Vec<Competitor>>,
    results: OnceCell<Vec<ScoredResult>>,
    categories: OnceCell<Vec<Category>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardView {
    pub series_id: SeriesId,
    pub settings: Settings,
    pub rounds_by_discipline: RoundsByDiscipline,
    pub categories: Vec<Category>,
    pub columns_count: usize,
}

impl<'s, S: SeriesStore + ?Sized> Scoreboard<'s, S> {
    pub fn new(store: &'s S, series: SeriesId, settings: Settings) -> Self {
        Self {
            store,
            series,
            settings,
            competitions: OnceCell::new(),
            round_ids: OnceCell::new(),
            rounds: OnceCell::new(),
            rounds_by_discipline: OnceCell::new(),
            competitors: OnceCell::new(),
            results: OnceCell::new(),
            categories: OnceCell::new(),
        }
    }

    pub fn series(&self) -> SeriesId {
        self.series
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rounds(&self) -> Result<&[Round], StoreError> {
        memo(&self.rounds, || {
            let ids = self.competition_ids()?;
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            let records = self.store.rounds(&ids)?;
            // Result lookups need every underlying round row, not just the distinct pairs.
            let _ = self.round_ids.set(records.iter().map(|r| r.id).collect());
            let rounds = collect_rounds(&records, &self.settings);
            debug!(
                series = self.series,
                rows = records.len(),
                rounds = rounds.len(),
                excluded = rounds.iter().filter(|r| r.is_excluded()).count(),
                "collected rounds"
            );
            Ok(rounds)
        })
        .map(Vec::as_slice)
    }

    pub fn rounds_by_discipline(&self) -> Result<&RoundsByDiscipline, StoreError> {
        memo(&self.rounds_by_discipline, || {
            Ok(RoundsByDiscipline::group(self.rounds()?))
        })
    }

    pub fn categories(&self) -> Result<&[Category], StoreError> {
        memo(&self.categories, || {
            let ids = self.competition_ids()?;
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            let groups = if self.settings.split_by_categories() {
                collect_categories(&self.store.sections(&ids)?)
            } else {
                vec![CategoryGroup {
                    name: OVERALL_CATEGORY.to_string(),
                    order: 0.0,
                    section_count: 0,
                }]
            };

            let mut categories = Vec::with_capacity(groups.len());
            for group in &groups {
                categories.push(self.build_category(group)?);
            }
            Ok(categories)
        })
        .map(Vec::as_slice)
    }

    pub fn columns_count(&self) -> Result<usize, StoreError> {
        let layout = ColumnLayout::new(self.rounds()?.len(), self.rounds_by_discipline()?.len());
        Ok(layout.columns_count)
    }

    pub fn view(&self) -> Result<ScoreboardView, StoreError> {
        let view = ScoreboardView {
            series_id: self.series,
            settings: self.settings.clone(),
            rounds_by_discipline: self.rounds_by_discipline()?.clone(),
            categories: self.categories()?.to_vec(),
            columns_count: self.columns_count()?,
        };
        info!(
            series = self.series,
            rounds = view.rounds_by_discipline.iter().map(|(_, r)| r.len()).sum::<usize>(),
            categories = view.categories.len(),
            columns = view.columns_count,
            "scoreboard assembled"
        );
        Ok(view)
    }

    fn build_category(&self, group: &CategoryGroup) -> Result<Category, StoreError> {
        let competitors: Vec<Competitor> = if self.settings.split_by_categories() {
            self.competitors()?
                .iter()
                .filter(|c| c.in_category(&group.name))
                .cloned()
                .collect()
        } else {
            self.competitors()?.to_vec()
        };
        let members: BTreeSet<CompetitorId> = competitors.iter().map(|c| c.id).collect();
        let results: Vec<ScoredResult> = self
            .results()?
            .iter()
            .filter(|r| members.contains(&r.competitor_id))
            .cloned()
            .collect();

        let standings = build_standings(&StandingsInputs {
            category: &group.name,
            rounds: self.rounds()?,
            competitors: &competitors,
            results: &results,
            adjust_to_wind: self.settings.adjust_to_wind(),
        });
        Ok(Category::new(group, standings))
    }

    fn competition_ids(&self) -> Result<Vec<CompetitionId>, StoreError> {
        let competitions = memo(&self.competitions, || {
            let competitions = self.store.competitions(self.series)?;
            if competitions.is_empty() {
                info!(series = self.series, "series has no competitions");
            }
            Ok(competitions)
        })?;
        Ok(competitions.iter().map(|c| c.id).collect())
    }

    fn competitors(&self) -> Result<&[Competitor], StoreError> {
        memo(&self.competitors, || {
            let ids = self.competition_ids()?;
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            let records = self.store.competitors(&ids)?;
            Ok(collect_competitors(&records, self.settings.split_by_categories()))
        })
        .map(Vec::as_slice)
    }

    fn results(&self) -> Result<&[ScoredResult], StoreError> {
        memo(&self.results, || {
            let rounds = self.rounds()?;
            let round_ids = self.round_ids.get().map(Vec::as_slice).unwrap_or(&[]);
            if round_ids.is_empty() {
                return Ok(Vec::new());
            }
            let records = self.store.results(round_ids)?;
            Ok(collect_results(&records, rounds, self.competitors()?))
        })
        .map(Vec::as_slice)
    }
}

fn memo<'c, T>(
    cell: &'c OnceCell<T>,
    init: impl FnOnce() -> Result<T, StoreError>,
) -> Result<&'c T, StoreError> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = init()?;
    Ok(cell.get_or_init(|| value))
}

#[cfg(test)]
#[path = "../tests/src_inline/scoreboard.rs"]
mod tests;
