use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type SeriesId = i64;
pub type CompetitionId = i64;
pub type RoundId = i64;
pub type SectionId = i64;
pub type CompetitorId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionRecord {
    pub id: CompetitionId,
    pub name: String,
    #[serde(default)]
    pub place: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub id: RoundId,
    pub event_id: CompetitionId,
    pub discipline: String,
    pub number: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    pub id: SectionId,
    pub event_id: CompetitionId,
    pub name: String,
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    pub id: CompetitorId,
    pub event_id: CompetitionId,
    pub event_place: Option<String>,
    pub profile_name: Option<String>,
    pub country_code: Option<String>,
    pub suit_name: Option<String>,
    pub manufacturer_name: Option<String>,
    pub section_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: i64,
    pub competitor_id: CompetitorId,
    pub round_id: RoundId,
    pub discipline: Option<String>,
    pub round_number: Option<u32>,
    pub score: Option<f64>,
    pub adjusted_score: Option<f64>,
}
