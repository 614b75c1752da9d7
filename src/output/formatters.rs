//! Formatting utilities for terminal output
//!
//! Everything here returns plain strings so it can be tested without a terminal.

use crate::game::{GuessRecord, Outcome};

/// Messages for a win, indexed by guess count; later wins all get the last one
pub const PRAISE: [&str; 6] = ["Genius", "Magnificent", "Impressive", "Splendid", "Great", "Phew"];

/// Shown when the player quits
pub const QUIT_MESSAGE: &str = "Thanks for playing.";

/// Praise for a win on guess `guesses` (1-based)
#[must_use]
pub fn praise(guesses: usize) -> &'static str {
    let index = guesses.saturating_sub(1).min(PRAISE.len() - 1);
    PRAISE[index]
}

/// Shown when the player runs out of attempts
#[must_use]
pub fn loss_message(secret: &str) -> String {
    format!("GAME OVER: The correct word was {secret}")
}

/// The row being typed, e.g. "C R _ _ _"
#[must_use]
pub fn typing_row(typed: &str, word_length: usize) -> String {
    let mut cells: Vec<String> = typed
        .chars()
        .take(word_length)
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    cells.resize(word_length, "_".to_string());
    cells.join(" ")
}

/// Result label for sharing: "3/6" for a win, "X/6" otherwise
#[must_use]
pub fn score_label(outcome: Outcome, max_attempts: usize) -> String {
    match outcome {
        Outcome::Won(n) => format!("{n}/{max_attempts}"),
        Outcome::Lost | Outcome::Abandoned => format!("X/{max_attempts}"),
    }
}

/// Emoji grid of every scored guess, one row per line
#[must_use]
pub fn share_grid(records: &[GuessRecord]) -> String {
    records
        .iter()
        .map(|r| r.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a bar string proportional to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Histogram bar for a guess distribution bucket; nonzero counts show at least one block
#[must_use]
pub fn distribution_bar(count: u32, max: u32, width: usize) -> String {
    let bar = create_progress_bar(f64::from(count), f64::from(max), width);
    if count > 0 && !bar.starts_with('█') {
        format!("█{}", "░".repeat(width.saturating_sub(1)))
    } else {
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    #[test]
    fn praise_by_guess_count() {
        assert_eq!(praise(1), "Genius");
        assert_eq!(praise(3), "Impressive");
        assert_eq!(praise(6), "Phew");
        assert_eq!(praise(9), "Phew");
    }

    #[test]
    fn loss_message_names_secret() {
        assert_eq!(loss_message("CRANE"), "GAME OVER: The correct word was CRANE");
    }

    #[test]
    fn typing_row_pads_with_blanks() {
        assert_eq!(typing_row("", 5), "_ _ _ _ _");
        assert_eq!(typing_row("cr", 5), "C R _ _ _");
        assert_eq!(typing_row("CRANES", 5), "C R A N E");
    }

    #[test]
    fn score_labels() {
        assert_eq!(score_label(Outcome::Won(3), 6), "3/6");
        assert_eq!(score_label(Outcome::Lost, 6), "X/6");
    }

    #[test]
    fn share_grid_rows() {
        let secret = Word::new("slate").unwrap();
        let records: Vec<GuessRecord> = ["crane", "slate"]
            .iter()
            .map(|g| {
                let guess = Word::new(*g).unwrap();
                let feedback = Feedback::calculate(&guess, &secret).unwrap();
                GuessRecord { guess, feedback }
            })
            .collect();

        assert_eq!(share_grid(&records), "⬜⬜🟩⬜🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn distribution_bar_shows_small_counts() {
        assert_eq!(distribution_bar(1, 100, 10), "█░░░░░░░░░");
        assert_eq!(distribution_bar(0, 100, 4), "░░░░");
        assert_eq!(distribution_bar(100, 100, 4), "████");
    }
}
