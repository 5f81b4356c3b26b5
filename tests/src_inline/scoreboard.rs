use std::cell::Cell;

use chrono::{TimeZone, Utc};

use super::*;
use crate::input::dump::{CompetitorRow, ProfileRow, ResultRow, SeriesDump, SeriesRow};
use crate::input::{ResultRecord, RoundRecord, SectionRecord};

fn round(id: i64, event_id: i64, discipline: &str, number: u32, minute: u32) -> RoundRecord {
    RoundRecord {
        id,
        event_id,
        discipline: discipline.to_string(),
        number,
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, minute, 0).unwrap(),
    }
}

fn section(id: i64, event_id: i64, name: &str, order: i64) -> SectionRecord {
    SectionRecord {
        id,
        event_id,
        name: name.to_string(),
        order,
    }
}

fn competitor(id: i64, event_id: i64, section_id: i64) -> CompetitorRow {
    CompetitorRow {
        id,
        event_id,
        profile_id: Some(id),
        suit_id: None,
        section_id: Some(section_id),
    }
}

fn result(id: i64, competitor_id: i64, round_id: i64, score: f64) -> ResultRow {
    ResultRow {
        id,
        competitor_id,
        round_id,
        score: Some(score),
        adjusted_score: None,
    }
}

/// Two competitions sharing speed-1 and distance-1; the second adds speed-2.
fn two_event_dump() -> SeriesDump {
    SeriesDump {
        series: vec![
            SeriesRow {
                id: 1,
                name: "World Series".to_string(),
                competition_ids: vec![10, 20],
            },
            SeriesRow {
                id: 2,
                name: "Empty".to_string(),
                competition_ids: vec![],
            },
        ],
        competitions: vec![
            CompetitionRecord {
                id: 10,
                name: "Leg 1".to_string(),
                place: Some("Voss".to_string()),
            },
            CompetitionRecord {
                id: 20,
                name: "Leg 2".to_string(),
                place: None,
            },
        ],
        rounds: vec![
            round(101, 10, "speed", 1, 0),
            round(102, 10, "distance", 1, 10),
            round(201, 20, "speed", 1, 5),
            round(202, 20, "distance", 1, 15),
            round(203, 20, "speed", 2, 20),
        ],
        sections: vec![
            section(11, 10, "Open", 1),
            section(12, 10, "Advanced", 2),
            section(21, 20, "open", 3),
            section(22, 20, "Advanced", 1),
        ],
        profiles: (1..=5)
            .map(|id| ProfileRow {
                id,
                name: format!("Pilot {id}"),
                country_id: None,
            })
            .collect(),
        competitors: vec![
            competitor(1, 10, 11),
            competitor(2, 10, 11),
            competitor(3, 20, 21),
            competitor(4, 20, 22),
            competitor(5, 10, 12),
        ],
        results: vec![
            result(1, 1, 101, 300.0),
            result(2, 1, 102, 2000.0),
            result(3, 2, 101, 310.0),
            result(4, 2, 102, 1990.0),
            result(5, 3, 201, 280.0),
            result(6, 3, 203, 290.0),
            result(7, 4, 201, 250.0),
            // Round 999 does not exist.
            result(8, 5, 999, 1000.0),
        ],
        ..SeriesDump::default()
    }
}

fn total(view: &[Category], category: &str, competitor: i64) -> f64 {
    view.iter()
        .find(|c| c.name == category)
        .and_then(|c| c.standings.row_for(competitor))
        .map(|r| r.total)
        .unwrap()
}

#[test]
fn test_empty_series_is_well_formed() {
    let dump = two_event_dump();
    let scoreboard = Scoreboard::new(&dump, 2, Settings::default());
    assert!(scoreboard.rounds().unwrap().is_empty());
    assert!(scoreboard.categories().unwrap().is_empty());
    assert!(scoreboard.rounds_by_discipline().unwrap().is_empty());
    assert_eq!(scoreboard.columns_count().unwrap(), 4);
}

#[test]
fn test_unknown_series_propagates_store_error() {
    let dump = two_event_dump();
    let scoreboard = Scoreboard::new(&dump, 42, Settings::default());
    assert!(matches!(
        scoreboard.rounds(),
        Err(StoreError::UnknownSeries(42))
    ));
}

#[test]
fn test_rounds_deduplicated_across_competitions() {
    let dump = two_event_dump();
    let scoreboard = Scoreboard::new(&dump, 1, Settings::default());
    let slugs: Vec<&str> = scoreboard.rounds().unwrap().iter().map(Round::slug).collect();
    assert_eq!(slugs, vec!["speed-1", "distance-1", "speed-2"]);

    let disciplines: Vec<&str> = scoreboard
        .rounds_by_discipline()
        .unwrap()
        .disciplines()
        .collect();
    assert_eq!(disciplines, vec!["speed", "distance"]);
    assert_eq!(scoreboard.columns_count().unwrap(), 3 * 2 + 2 + 4);
}

#[test]
fn test_categories_merged_and_ordered_by_mean() {
    let dump = two_event_dump();
    let scoreboard = Scoreboard::new(&dump, 1, Settings::default());
    let categories = scoreboard.categories().unwrap();

    // Advanced: mean(2, 1) = 1.5; Open: mean(1, 3) = 2.
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Advanced", "Open"]);
    assert_eq!(categories[1].order, 2.0);

    let open: Vec<i64> = categories[1]
        .standings
        .rows()
        .iter()
        .map(|r| r.competitor.id)
        .collect();
    // 1: 2300, 2: 2300, 3: 570. Tie between 1 and 2 goes to the lower id.
    assert_eq!(open, vec![1, 2, 3]);

    let advanced: Vec<i64> = categories[0]
        .standings
        .rows()
        .iter()
        .map(|r| r.competitor.id)
        .collect();
    assert_eq!(advanced, vec![4, 5]);
    // Result in an unknown round is dropped, competitor 5 still listed.
    assert_eq!(total(categories, "Advanced", 5), 0.0);
}

#[test]
fn test_excluded_round_keeps_visibility() {
    let dump = two_event_dump();
    let settings = Settings::default().with_excluded_rounds(["speed-2"]);
    let scoreboard = Scoreboard::new(&dump, 1, settings);

    let rounds = scoreboard.rounds().unwrap();
    assert_eq!(rounds.len(), 3);
    assert!(rounds.iter().find(|r| r.slug() == "speed-2").unwrap().is_excluded());
    assert_eq!(scoreboard.columns_count().unwrap(), 12);

    let categories = scoreboard.categories().unwrap();
    assert_eq!(total(categories, "Open", 3), 280.0);
}

#[test]
fn test_no_split_scores_everyone_together() {
    let dump = two_event_dump();
    let settings = Settings::default().with_split_by_categories(false);
    let scoreboard = Scoreboard::new(&dump, 1, settings);
    let categories = scoreboard.categories().unwrap();

    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, OVERALL_CATEGORY);
    assert_eq!(categories[0].standings.rows().len(), 5);
}

#[test]
fn test_view_matches_queries() {
    let dump = two_event_dump();
    let scoreboard = Scoreboard::new(&dump, 1, Settings::default());
    let view = scoreboard.view().unwrap();
    assert_eq!(view.series_id, 1);
    assert_eq!(view.columns_count, scoreboard.columns_count().unwrap());
    assert_eq!(view.categories.as_slice(), scoreboard.categories().unwrap());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["columns_count"], 12);
    assert_eq!(json["settings"]["split_by_categories"], true);
    assert!(json["rounds_by_discipline"]["speed"].is_array());
}

struct CountingStore {
    inner: SeriesDump,
    calls: Cell<usize>,
}

impl SeriesStore for CountingStore {
    fn competitions(&self, series: SeriesId) -> Result<Vec<CompetitionRecord>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.competitions(series)
    }

    fn rounds(&self, competitions: &[CompetitionId]) -> Result<Vec<RoundRecord>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.rounds(competitions)
    }

    fn sections(&self, competitions: &[CompetitionId]) -> Result<Vec<SectionRecord>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.sections(competitions)
    }

    fn competitors(
        &self,
        competitions: &[CompetitionId],
    ) -> Result<Vec<crate::input::CompetitorRecord>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.competitors(competitions)
    }

    fn results(&self, rounds: &[RoundId]) -> Result<Vec<ResultRecord>, StoreError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.results(rounds)
    }
}

#[test]
fn test_each_query_runs_once_per_instance() {
    let store = CountingStore {
        inner: two_event_dump(),
        calls: Cell::new(0),
    };
    let scoreboard = Scoreboard::new(&store, 1, Settings::default());
    scoreboard.view().unwrap();
    assert_eq!(store.calls.get(), 5);

    scoreboard.view().unwrap();
    scoreboard.columns_count().unwrap();
    assert_eq!(store.calls.get(), 5);
}
