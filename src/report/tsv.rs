use crate::report::{format_rank, format_score};
use crate::scoreboard::ScoreboardView;

pub fn render_standings_tsv(view: &ScoreboardView) -> String {
    let mut header: Vec<String> = [
        "category",
        "position",
        "competitor_id",
        "competitor",
        "country",
        "suit",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let mut slugs = Vec::new();
    for (_, rounds) in view.rounds_by_discipline.iter() {
        for round in rounds {
            header.push(round.slug().to_string());
            header.push(format!("{}_rank", round.slug()));
            slugs.push(round.slug());
        }
    }
    for discipline in view.rounds_by_discipline.disciplines() {
        header.push(format!("{}_total", discipline));
    }
    header.push("total".to_string());

    let mut out = header.join("\t");
    out.push('\n');

    for category in &view.categories {
        for row in category.standings.rows() {
            let mut fields = vec![
                sanitize(&category.name),
                row.position.to_string(),
                row.competitor.id.to_string(),
                sanitize(&row.competitor.name),
                row.competitor.country_code.as_deref().map(sanitize).unwrap_or_default(),
                row.competitor.suit_name.as_deref().map(sanitize).unwrap_or_default(),
            ];
            for slug in &slugs {
                match row.cell(slug) {
                    Some(cell) if cell.excluded => {
                        fields.push("NA".to_string());
                        fields.push("NA".to_string());
                    }
                    Some(cell) => {
                        fields.push(format_score(cell.score));
                        fields.push(format_rank(cell.rank));
                    }
                    None => {
                        fields.push("NA".to_string());
                        fields.push("-".to_string());
                    }
                }
            }
            for subtotal in &row.discipline_totals {
                fields.push(format_score(subtotal.total));
            }
            fields.push(format_score(row.total));
            out.push_str(&fields.join("\t"));
            out.push('\n');
        }
    }
    out
}

fn sanitize(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
