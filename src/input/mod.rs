use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

pub mod dump;
pub mod records;
pub mod settings_file;

pub use dump::{SeriesDump, load_dump};
pub use records::{
    CompetitionId, CompetitionRecord, CompetitorId, CompetitorRecord, ResultRecord, RoundId,
    RoundRecord, SectionRecord, SeriesId,
};
pub use settings_file::load_settings;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown series: {0}")]
    UnknownSeries(SeriesId),
}

pub trait SeriesStore {
    fn competitions(&self, series: SeriesId) -> Result<Vec<CompetitionRecord>, StoreError>;

    fn rounds(&self, competitions: &[CompetitionId]) -> Result<Vec<RoundRecord>, StoreError>;

    fn sections(&self, competitions: &[CompetitionId]) -> Result<Vec<SectionRecord>, StoreError>;

    fn competitors(
        &self,
        competitions: &[CompetitionId],
    ) -> Result<Vec<CompetitorRecord>, StoreError>;

    fn results(&self, rounds: &[RoundId]) -> Result<Vec<ResultRecord>, StoreError>;
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
