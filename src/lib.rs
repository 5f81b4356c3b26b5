pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scoreboard;

pub use input::{SeriesDump, SeriesStore, StoreError};
pub use model::{Category, Round, RoundsByDiscipline, Settings, Standings};
pub use scoreboard::{Scoreboard, ScoreboardView};
