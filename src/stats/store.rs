//! File-backed statistics

use super::{StatsError, StatsSummary, format};
use crate::game::Outcome;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How a stats file was found when it was loaded
#[derive(Debug)]
pub enum LoadStatus {
    /// Parsed without problems
    Loaded,
    /// File did not exist; a zeroed one was written
    Created,
    /// File was unreadable as stats and has been overwritten with zeroes
    Reset(StatsError),
}

/// A summary together with how it was obtained
#[derive(Debug)]
pub struct LoadedStats {
    pub summary: StatsSummary,
    pub status: LoadStatus,
}

/// Statistics persisted to a single `key=value` text file
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
    buckets: usize,
}

impl StatsStore {
    /// Store at `path`, with `.txt` appended when the name has no extension
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, buckets: usize) -> Self {
        let mut path = path.into();
        if path.extension().is_none() {
            path.set_extension("txt");
        }
        Self { path, buckets }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored summary
    ///
    /// A missing file is created zeroed. A file that does not parse, or whose
    /// values contradict each other, is reset to zeroes and the reason is kept
    /// in the returned status.
    ///
    /// # Errors
    /// Returns `StatsError::Io` when the file cannot be read or written.
    pub fn load(&self) -> Result<LoadedStats, StatsError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "stats file not found; creating a new one");
                let summary = StatsSummary::new(self.buckets);
                self.save(&summary)?;
                return Ok(LoadedStats {
                    summary,
                    status: LoadStatus::Created,
                });
            }
            Err(e) => return Err(e.into()),
        };

        match format::parse(&content, self.buckets) {
            Ok(summary) => {
                debug!(path = %self.path.display(), played = summary.played(), "stats loaded");
                Ok(LoadedStats {
                    summary,
                    status: LoadStatus::Loaded,
                })
            }
            Err(reason) => {
                warn!(path = %self.path.display(), %reason, "stats file is invalid; resetting");
                let summary = StatsSummary::new(self.buckets);
                self.save(&summary)?;
                Ok(LoadedStats {
                    summary,
                    status: LoadStatus::Reset(reason),
                })
            }
        }
    }

    /// Overwrite the file with `summary`
    ///
    /// # Errors
    /// Returns `StatsError::Io` on write failure.
    pub fn save(&self, summary: &StatsSummary) -> Result<(), StatsError> {
        fs::write(&self.path, format::serialize(summary))?;
        Ok(())
    }

    /// Load, record `outcome`, and save
    ///
    /// Returns the updated summary along with the status of the load that
    /// preceded it.
    ///
    /// # Errors
    /// Returns `StatsError::Unrecordable` for abandoned games (the file is left
    /// untouched) and `StatsError::Io` on file failures.
    pub fn update(&self, outcome: Outcome) -> Result<LoadedStats, StatsError> {
        if !outcome.is_recordable() {
            return Err(StatsError::Unrecordable(outcome));
        }

        let LoadedStats { summary, status } = self.load()?;
        let summary = summary.record(outcome)?;
        self.save(&summary)?;
        info!(path = %self.path.display(), %outcome, played = summary.played(), "stats updated");

        Ok(LoadedStats { summary, status })
    }
}
