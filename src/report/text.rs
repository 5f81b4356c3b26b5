use crate::model::category::Category;
use crate::model::round::RoundsByDiscipline;
use crate::report::{format_cell, format_rank, format_score};
use crate::scoreboard::ScoreboardView;

const CELL_WIDTH: usize = 14;

pub fn render_scoreboard_text(view: &ScoreboardView) -> String {
    let mut out = String::new();

    out.push_str(&format!("Series {} Scoreboard\n", view.series_id));
    out.push_str("========================\n\n");

    let excluded = view.settings.excluded_rounds();
    out.push_str(&format!(
        "Excluded rounds: {}\n",
        if excluded.is_empty() {
            "none".to_string()
        } else {
            excluded.iter().cloned().collect::<Vec<_>>().join(", ")
        }
    ));
    out.push_str(&format!(
        "Wind adjustment: {}\n",
        if view.settings.adjust_to_wind() { "on" } else { "off" }
    ));
    out.push_str(&format!(
        "Split by categories: {}\n",
        if view.settings.split_by_categories() { "yes" } else { "no" }
    ));
    out.push_str(&format!("Columns: {}\n\n", view.columns_count));

    out.push_str("Rounds\n");
    if view.rounds_by_discipline.is_empty() {
        out.push_str("  (none)\n");
    }
    for (discipline, rounds) in view.rounds_by_discipline.iter() {
        let numbers = rounds
            .iter()
            .map(|r| {
                if r.is_excluded() {
                    format!("{} (excluded)", r.number())
                } else {
                    r.number().to_string()
                }
            })
            .collect::<Vec<_>>();
        out.push_str(&format!("  {}: {}\n", discipline, numbers.join(", ")));
    }
    out.push('\n');

    if view.categories.is_empty() {
        out.push_str("No categories.\n");
    }
    for (idx, category) in view.categories.iter().enumerate() {
        render_category(&mut out, idx + 1, category, &view.rounds_by_discipline);
        out.push('\n');
    }

    out
}

fn render_category(
    out: &mut String,
    idx: usize,
    category: &Category,
    by_discipline: &RoundsByDiscipline,
) {
    out.push_str(&format!(
        "{}. {} (order {})\n",
        idx,
        category.name,
        format_score(category.order)
    ));

    let rows = category.standings.rows();
    if rows.is_empty() {
        out.push_str("  no competitors\n");
        return;
    }
    let name_width = rows
        .iter()
        .map(|r| r.competitor.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Competitor".len());

    let mut header = format!("{:>4}  {:<name_width$}", "Pos", "Competitor");
    for (_, rounds) in by_discipline.iter() {
        for round in rounds {
            header.push_str(&format!("{:>CELL_WIDTH$}", round.slug()));
        }
    }
    for discipline in by_discipline.disciplines() {
        header.push_str(&format!("{:>CELL_WIDTH$}", discipline));
    }
    header.push_str(&format!("{:>CELL_WIDTH$}", "Total"));
    out.push_str(header.trim_end());
    out.push('\n');

    for row in rows {
        let mut line = format!("{:>4}  {:<name_width$}", row.position, row.competitor.name);
        for (_, rounds) in by_discipline.iter() {
            for round in rounds {
                let cell = row
                    .cell(round.slug())
                    .map(|c| {
                        let score = format_cell(c.score, c.attempted, c.excluded);
                        match c.rank {
                            Some(_) => format!("{} ({})", score, format_rank(c.rank)),
                            None => score,
                        }
                    })
                    .unwrap_or_else(|| "-".to_string());
                line.push_str(&format!("{:>CELL_WIDTH$}", cell));
            }
        }
        for subtotal in &row.discipline_totals {
            line.push_str(&format!("{:>CELL_WIDTH$}", format_score(subtotal.total)));
        }
        line.push_str(&format!("{:>CELL_WIDTH$}", format_score(row.total)));
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
