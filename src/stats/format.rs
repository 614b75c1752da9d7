//! Text format for persisted statistics
//!
//! One `key=value` pair per line:
//!
//! ```text
//! played=4
//! win percentage=75
//! current streak=1
//! max streak=2
//! guess distribution=2,1,0,0,0,0
//! ```
//!
//! The win percentage is written for readers of the file but recomputed on load.

use super::{StatsError, StatsSummary};

pub const PLAYED: &str = "played";
pub const WIN_PERCENTAGE: &str = "win percentage";
pub const CURRENT_STREAK: &str = "current streak";
pub const MAX_STREAK: &str = "max streak";
pub const GUESS_DISTRIBUTION: &str = "guess distribution";

const KEYS: [&str; 5] = [PLAYED, WIN_PERCENTAGE, CURRENT_STREAK, MAX_STREAK, GUESS_DISTRIBUTION];

/// Render a summary in the persisted format
#[must_use]
pub fn serialize(summary: &StatsSummary) -> String {
    let distribution = summary
        .histogram()
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{PLAYED}={}\n{WIN_PERCENTAGE}={}\n{CURRENT_STREAK}={}\n{MAX_STREAK}={}\n{GUESS_DISTRIBUTION}={distribution}\n",
        summary.played(),
        summary.win_percentage(),
        summary.current_streak(),
        summary.max_streak(),
    )
}

/// Parse the persisted format
///
/// Blank lines are ignored. Every key must appear exactly once, and the
/// distribution must hold `buckets` entries.
///
/// # Errors
/// Returns a `StatsError` describing the first problem found.
pub fn parse(content: &str, buckets: usize) -> Result<StatsSummary, StatsError> {
    let mut values: [Option<&str>; 5] = [None; 5];

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = line.split_once('=').ok_or_else(|| StatsError::MalformedLine {
            line: index + 1,
            text: line.to_string(),
        })?;
        let key = key.trim();
        let slot = KEYS
            .iter()
            .position(|&k| k == key)
            .ok_or_else(|| StatsError::UnknownKey(key.to_string()))?;

        if values[slot].replace(value.trim()).is_some() {
            return Err(StatsError::DuplicateKey(key.to_string()));
        }
    }

    let played = parse_count(PLAYED, lookup(&values, PLAYED)?)?;
    let win_percentage = parse_count(WIN_PERCENTAGE, lookup(&values, WIN_PERCENTAGE)?)?;
    if win_percentage > 100 {
        return Err(invalid(WIN_PERCENTAGE, &win_percentage.to_string()));
    }
    let current_streak = parse_count(CURRENT_STREAK, lookup(&values, CURRENT_STREAK)?)?;
    let max_streak = parse_count(MAX_STREAK, lookup(&values, MAX_STREAK)?)?;

    let histogram = lookup(&values, GUESS_DISTRIBUTION)?
        .split(',')
        .map(|n| parse_count(GUESS_DISTRIBUTION, n.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    if histogram.len() != buckets {
        return Err(StatsError::BucketCount {
            found: histogram.len(),
            expected: buckets,
        });
    }

    StatsSummary::from_parts(played, current_streak, max_streak, histogram)
}

fn lookup<'a>(values: &[Option<&'a str>; 5], key: &'static str) -> Result<&'a str, StatsError> {
    KEYS.iter()
        .position(|&k| k == key)
        .and_then(|slot| values[slot])
        .ok_or(StatsError::MissingKey(key))
}

fn parse_count(key: &str, value: &str) -> Result<u32, StatsError> {
    value.parse().map_err(|_| invalid(key, value))
}

fn invalid(key: &str, value: &str) -> StatsError {
    StatsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
