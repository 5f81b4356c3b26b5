use serde::Serialize;

use crate::model::standings::Standings;

pub const OVERALL_CATEGORY: &str = "Overall";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub order: f64,
    pub section_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    pub order: f64,
    pub standings: Standings,
}

impl Category {
    pub fn new(group: &CategoryGroup, standings: Standings) -> Self {
        Self {
            name: group.name.clone(),
            order: group.order,
            standings,
        }
    }
}
