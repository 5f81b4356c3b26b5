use std::collections::BTreeMap;

use tracing::warn;

use crate::input::records::SectionRecord;
use crate::model::category::CategoryGroup;
use crate::model::competitor::category_key;

#[derive(Debug)]
struct Accumulator {
    display: String,
    display_order: i64,
    order_sum: f64,
    count: usize,
}

pub fn collect_categories<'a, I>(sections: I) -> Vec<CategoryGroup>
where
    I: IntoIterator<Item = &'a SectionRecord>,
{
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();
    for section in sections {
        let name = section.name.trim();
        if name.is_empty() {
            warn!(section_id = section.id, "section without name; skipping");
            continue;
        }
        groups
            .entry(category_key(name))
            .and_modify(|acc| {
                acc.order_sum += section.order as f64;
                acc.count += 1;
                if section.order < acc.display_order {
                    acc.display = name.to_string();
                    acc.display_order = section.order;
                }
            })
            .or_insert_with(|| Accumulator {
                display: name.to_string(),
                display_order: section.order,
                order_sum: section.order as f64,
                count: 1,
            });
    }

    let mut out: Vec<(String, CategoryGroup)> = groups
        .into_iter()
        .map(|(key, acc)| {
            let group = CategoryGroup {
                name: acc.display,
                order: acc.order_sum / acc.count as f64,
                section_count: acc.count,
            };
            (key, group)
        })
        .collect();
    out.sort_by(|(ka, a), (kb, b)| a.order.total_cmp(&b.order).then_with(|| ka.cmp(kb)));
    out.into_iter().map(|(_, group)| group).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_categories.rs"]
mod tests;
