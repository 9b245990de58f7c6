use super::{IntakeError, ProfileAnswers};
use crate::assessment::domain::ErgonomicProfile;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row { row: usize, source: IntakeError },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read profile CSV: {}", err),
            ImportError::Csv(err) => write!(f, "invalid profile CSV data: {}", err),
            ImportError::Row { row, source } => write!(f, "row {}: {}", row, source),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
            ImportError::Row { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads profiles from a CSV export with one header column per answer.
pub struct ProfileImporter;

impl ProfileImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ErgonomicProfile>, ImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Every row must validate; the first bad row aborts the import with its
    /// 1-based data row number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ErgonomicProfile>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut profiles = Vec::new();

        for (index, record) in csv_reader.deserialize::<ProfileAnswers>().enumerate() {
            let row = index + 1;
            let answers = record?;
            let profile = answers
                .into_profile()
                .map_err(|source| ImportError::Row { row, source })?;
            debug!(row, hand_size = ?profile.hand_size, game_type = ?profile.game_type, "parsed profile row");
            profiles.push(profile);
        }

        Ok(profiles)
    }
}
