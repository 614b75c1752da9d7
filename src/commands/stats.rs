//! Stats command

use super::report_load_status;
use crate::output::print_stats;
use crate::stats::StatsStore;
use anyhow::{Context, Result};

/// Show the persisted statistics, creating the file if needed
///
/// # Errors
/// Fails when the stats file cannot be read or written.
pub fn run_stats(store: &StatsStore) -> Result<()> {
    let loaded = store
        .load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;
    report_load_status(store, &loaded.status);
    print_stats(&loaded.summary);
    Ok(())
}
