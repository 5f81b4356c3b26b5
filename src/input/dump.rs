use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::input::records::{
    CompetitionId, CompetitionRecord, CompetitorId, CompetitorRecord, ResultRecord, RoundId,
    RoundRecord, SectionId, SectionRecord, SeriesId,
};
use crate::input::{SeriesStore, StoreError, open_maybe_gz};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesRow {
    pub id: SeriesId,
    pub name: String,
    #[serde(default)]
    pub competition_ids: Vec<CompetitionId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRow {
    pub id: i64,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub manufacturer_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRow {
    pub id: CompetitorId,
    pub event_id: CompetitionId,
    #[serde(default)]
    pub profile_id: Option<i64>,
    #[serde(default)]
    pub suit_id: Option<i64>,
    #[serde(default)]
    pub section_id: Option<SectionId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: i64,
    pub competitor_id: CompetitorId,
    pub round_id: RoundId,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub adjusted_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesDump {
    pub series: Vec<SeriesRow>,
    pub competitions: Vec<CompetitionRecord>,
    pub rounds: Vec<RoundRecord>,
    pub sections: Vec<SectionRecord>,
    pub profiles: Vec<ProfileRow>,
    pub countries: Vec<CountryRow>,
    pub manufacturers: Vec<ManufacturerRow>,
    pub suits: Vec<SuitRow>,
    pub competitors: Vec<CompetitorRow>,
    pub results: Vec<ResultRow>,
}

pub fn load_dump(path: &Path) -> Result<SeriesDump, StoreError> {
    let reader = open_maybe_gz(path)?;
    let dump: SeriesDump =
        serde_json::from_reader(reader).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        series = dump.series.len(),
        competitions = dump.competitions.len(),
        rounds = dump.rounds.len(),
        competitors = dump.competitors.len(),
        results = dump.results.len(),
        "loaded series dump"
    );
    Ok(dump)
}

impl SeriesStore for SeriesDump {
    fn competitions(&self, series: SeriesId) -> Result<Vec<CompetitionRecord>, StoreError> {
        let row = self
            .series
            .iter()
            .find(|s| s.id == series)
            .ok_or(StoreError::UnknownSeries(series))?;
        let by_id: BTreeMap<CompetitionId, &CompetitionRecord> =
            self.competitions.iter().map(|c| (c.id, c)).collect();

        let mut out = Vec::with_capacity(row.competition_ids.len());
        let mut seen = BTreeSet::new();
        for id in &row.competition_ids {
            if !seen.insert(*id) {
                continue;
            }
            match by_id.get(id) {
                Some(record) => out.push((*record).clone()),
                None => debug!(series, competition = id, "series references missing competition"),
            }
        }
        Ok(out)
    }

    fn rounds(&self, competitions: &[CompetitionId]) -> Result<Vec<RoundRecord>, StoreError> {
        let wanted: BTreeSet<CompetitionId> = competitions.iter().copied().collect();
        Ok(self
            .rounds
            .iter()
            .filter(|r| wanted.contains(&r.event_id))
            .cloned()
            .collect())
    }

    fn sections(&self, competitions: &[CompetitionId]) -> Result<Vec<SectionRecord>, StoreError> {
        let wanted: BTreeSet<CompetitionId> = competitions.iter().copied().collect();
        Ok(self
            .sections
            .iter()
            .filter(|s| wanted.contains(&s.event_id))
            .cloned()
            .collect())
    }

    fn competitors(
        &self,
        competitions: &[CompetitionId],
    ) -> Result<Vec<CompetitorRecord>, StoreError> {
        let wanted: BTreeSet<CompetitionId> = competitions.iter().copied().collect();
        let places: BTreeMap<CompetitionId, Option<&str>> = self
            .competitions
            .iter()
            .map(|c| (c.id, c.place.as_deref()))
            .collect();
        let profiles: BTreeMap<i64, &ProfileRow> =
            self.profiles.iter().map(|p| (p.id, p)).collect();
        let countries: BTreeMap<i64, &str> = self
            .countries
            .iter()
            .map(|c| (c.id, c.code.as_str()))
            .collect();
        let manufacturers: BTreeMap<i64, &str> = self
            .manufacturers
            .iter()
            .map(|m| (m.id, m.name.as_str()))
            .collect();
        let suits: BTreeMap<i64, &SuitRow> = self.suits.iter().map(|s| (s.id, s)).collect();
        let sections: BTreeMap<SectionId, &SectionRecord> =
            self.sections.iter().map(|s| (s.id, s)).collect();

        let mut out = Vec::new();
        for row in self.competitors.iter().filter(|c| wanted.contains(&c.event_id)) {
            let profile = row.profile_id.and_then(|id| profiles.get(&id)).copied();
            let suit = row.suit_id.and_then(|id| suits.get(&id)).copied();
            // A section from another event is not a valid placement.
            let section = row
                .section_id
                .and_then(|id| sections.get(&id))
                .filter(|s| s.event_id == row.event_id);

            out.push(CompetitorRecord {
                id: row.id,
                event_id: row.event_id,
                event_place: places
                    .get(&row.event_id)
                    .copied()
                    .flatten()
                    .map(str::to_string),
                profile_name: profile.map(|p| p.name.clone()),
                country_code: profile
                    .and_then(|p| p.country_id)
                    .and_then(|id| countries.get(&id))
                    .map(|code| code.to_string()),
                suit_name: suit.map(|s| s.name.clone()),
                manufacturer_name: suit
                    .and_then(|s| s.manufacturer_id)
                    .and_then(|id| manufacturers.get(&id))
                    .map(|name| name.to_string()),
                section_name: section.map(|s| s.name.clone()),
            });
        }
        Ok(out)
    }

    fn results(&self, rounds: &[RoundId]) -> Result<Vec<ResultRecord>, StoreError> {
        let by_id: BTreeMap<RoundId, &RoundRecord> =
            self.rounds.iter().map(|r| (r.id, r)).collect();
        let wanted: BTreeSet<RoundId> = rounds.iter().copied().collect();

        Ok(self
            .results
            .iter()
            .filter(|r| wanted.contains(&r.round_id))
            .map(|r| {
                let round = by_id.get(&r.round_id);
                ResultRecord {
                    id: r.id,
                    competitor_id: r.competitor_id,
                    round_id: r.round_id,
                    discipline: round.map(|round| round.discipline.clone()),
                    round_number: round.map(|round| round.number),
                    score: r.score,
                    adjusted_score: r.adjusted_score,
                }
            })
            .collect())
    }
}
