use super::*;

fn competitor(id: i64) -> Competitor {
    Competitor {
        id,
        event_id: 10,
        name: format!("Pilot {id}"),
        section_name: Some("Open".to_string()),
        country_code: None,
        suit_name: None,
        event_place: None,
    }
}

fn scored(competitor_id: i64, slug: &str, score: f64) -> ScoredResult {
    ScoredResult {
        competitor_id,
        round_slug: slug.to_string(),
        score: Some(score),
        adjusted_score: None,
    }
}

fn rounds() -> Vec<Round> {
    vec![
        Round::new("speed", 1),
        Round::new("distance", 1),
        Round::new("speed", 2),
    ]
}

fn build(
    rounds: &[Round],
    competitors: &[Competitor],
    results: &[ScoredResult],
    adjust_to_wind: bool,
) -> Standings {
    build_standings(&StandingsInputs {
        category: "Open",
        rounds,
        competitors,
        results,
        adjust_to_wind,
    })
}

fn order(standings: &Standings) -> Vec<CompetitorId> {
    standings.rows().iter().map(|r| r.competitor.id).collect()
}

#[test]
fn test_rows_sorted_by_total_desc() {
    let rounds = rounds();
    let competitors = vec![competitor(1), competitor(2), competitor(3)];
    let results = vec![
        scored(1, "speed-1", 10.0),
        scored(2, "speed-1", 30.0),
        scored(3, "speed-1", 20.0),
        scored(1, "distance-1", 5.0),
    ];
    let standings = build(&rounds, &competitors, &results, false);

    assert_eq!(order(&standings), vec![2, 3, 1]);
    let positions: Vec<usize> = standings.rows().iter().map(|r| r.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(standings.row_for(1).unwrap().total, 15.0);
}

#[test]
fn test_equal_totals_break_by_competitor_id() {
    let rounds = rounds();
    let competitors = vec![competitor(9), competitor(4)];
    let results = vec![scored(9, "speed-1", 50.0), scored(4, "distance-1", 50.0)];
    let standings = build(&rounds, &competitors, &results, false);
    assert_eq!(order(&standings), vec![4, 9]);
}

#[test]
fn test_competitor_without_results_listed_once_with_zero() {
    let rounds = rounds();
    let competitors = vec![competitor(3), competitor(1), competitor(2)];
    let results = vec![scored(3, "speed-1", 12.0)];
    let standings = build(&rounds, &competitors, &results, false);

    assert_eq!(standings.rows().len(), 3);
    assert_eq!(order(&standings), vec![3, 1, 2]);
    let idle = standings.row_for(1).unwrap();
    assert_eq!(idle.total, 0.0);
    assert!(idle.cells.iter().all(|c| c.score == 0.0 && !c.attempted && c.rank.is_none()));
    assert_eq!(
        standings.rows().iter().filter(|r| r.competitor.id == 1).count(),
        1
    );
}

#[test]
fn test_excluded_round_visible_but_not_scored() {
    let rounds = vec![Round::new("speed", 1), Round::new("speed", 2).excluded()];
    let competitors = vec![competitor(1), competitor(2)];
    let results = vec![
        scored(1, "speed-1", 10.0),
        scored(1, "speed-2", 100.0),
        scored(2, "speed-1", 20.0),
    ];
    let standings = build(&rounds, &competitors, &results, false);

    assert_eq!(order(&standings), vec![2, 1]);
    let row = standings.row_for(1).unwrap();
    assert_eq!(row.total, 10.0);
    let cell = row.cell("speed-2").unwrap();
    assert!(cell.excluded);
    assert!(cell.attempted);
    assert_eq!(cell.score, 0.0);
    assert_eq!(cell.rank, None);
    assert_eq!(row.discipline_totals[0].total, 10.0);
    assert_eq!(standings.layout().rounds_count, 2);
}

#[test]
fn test_round_ranks_only_for_attempts() {
    let rounds = rounds();
    let competitors = vec![competitor(1), competitor(2), competitor(3)];
    let results = vec![
        scored(1, "speed-1", 40.0),
        scored(2, "speed-1", 40.0),
        scored(3, "distance-1", 7.0),
    ];
    let standings = build(&rounds, &competitors, &results, false);

    let rank = |id: CompetitorId, slug: &str| standings.row_for(id).unwrap().cell(slug).unwrap().rank;
    assert_eq!(rank(1, "speed-1"), Some(1));
    assert_eq!(rank(2, "speed-1"), Some(2));
    assert_eq!(rank(3, "speed-1"), None);
    assert_eq!(rank(3, "distance-1"), Some(1));
    assert_eq!(rank(1, "speed-2"), None);
}

#[test]
fn test_wind_adjustment_changes_only_adjusted_rounds() {
    let rounds = rounds();
    let competitors = vec![competitor(1)];
    let mut windy = scored(1, "speed-1", 300.0);
    windy.adjusted_score = Some(280.0);
    let results = vec![windy, scored(1, "distance-1", 2000.0)];

    let raw = build(&rounds, &competitors, &results, false);
    let adjusted = build(&rounds, &competitors, &results, true);

    let raw_row = raw.row_for(1).unwrap();
    let adj_row = adjusted.row_for(1).unwrap();
    assert_eq!(raw_row.total, 2300.0);
    assert_eq!(adj_row.total, 2280.0);
    assert_eq!(
        raw_row.cell("distance-1").unwrap().score,
        adj_row.cell("distance-1").unwrap().score
    );
}

#[test]
fn test_discipline_subtotals_and_layout() {
    let rounds = rounds();
    let competitors = vec![competitor(1)];
    let results = vec![
        scored(1, "speed-1", 10.0),
        scored(1, "speed-2", 15.0),
        scored(1, "distance-1", 100.0),
    ];
    let standings = build(&rounds, &competitors, &results, false);
    let row = standings.row_for(1).unwrap();

    let subtotals: Vec<(&str, f64)> = row
        .discipline_totals
        .iter()
        .map(|d| (d.discipline.as_str(), d.total))
        .collect();
    assert_eq!(subtotals, vec![("speed", 25.0), ("distance", 100.0)]);
    assert_eq!(row.total, 125.0);

    let layout = standings.layout();
    assert_eq!(layout.rounds_count, 3);
    assert_eq!(layout.disciplines_count, 2);
    assert_eq!(layout.columns_count, 3 * 2 + 2 + 4);
}

#[test]
fn test_identical_inputs_identical_output() {
    let rounds = rounds();
    let competitors = vec![competitor(5), competitor(2), competitor(8)];
    let results = vec![
        scored(5, "speed-1", 1.0),
        scored(2, "speed-1", 1.0),
        scored(8, "distance-1", 1.0),
    ];
    let first = build(&rounds, &competitors, &results, false);
    let second = build(&rounds, &competitors, &results, false);
    assert_eq!(first, second);
    assert_eq!(order(&first), vec![2, 5, 8]);
}

#[test]
fn test_empty_category() {
    let standings = build(&rounds(), &[], &[], false);
    assert!(standings.is_empty());
    assert_eq!(standings.layout().columns_count, 10);
}

#[test]
fn test_negative_zero_ties_with_zero() {
    let rounds = rounds();
    let competitors = vec![competitor(1), competitor(2)];
    let results = vec![scored(1, "speed-1", -0.0), scored(2, "speed-1", 0.0)];
    let standings = build(&rounds, &competitors, &results, false);

    let rank = |id: CompetitorId| standings.row_for(id).unwrap().cell("speed-1").unwrap().rank;
    assert_eq!(rank(1), Some(1));
    assert_eq!(rank(2), Some(2));
    assert_eq!(order(&standings), vec![1, 2]);
}
