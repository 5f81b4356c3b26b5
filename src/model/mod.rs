pub mod category;
pub mod competitor;
pub mod round;
pub mod settings;
pub mod standings;

pub use category::{Category, CategoryGroup, OVERALL_CATEGORY};
pub use competitor::{Competitor, ScoredResult};
pub use round::{Round, RoundsByDiscipline};
pub use settings::Settings;
pub use standings::{ColumnLayout, RoundCell, StandingRow, Standings};
