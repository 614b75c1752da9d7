//! Display functions for game and command results

use super::formatters::{
    QUIT_MESSAGE, distribution_bar, loss_message, praise, score_label, share_grid, typing_row,
};
use crate::commands::BatchResult;
use crate::config::GameConfig;
use crate::core::{Feedback, LetterScore, RemainingLetters, Word};
use crate::game::{GameSession, Outcome};
use crate::stats::StatsSummary;
use colored::Colorize;
use crossterm::cursor::MoveToColumn;
use crossterm::execute;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// A scored guess as colored letter tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.scores())
        .map(|(letter, score)| {
            let tile = format!(" {letter} ");
            match score {
                LetterScore::Correct => tile.black().on_green().bold().to_string(),
                LetterScore::Present => tile.black().on_yellow().bold().to_string(),
                LetterScore::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the game banner
pub fn print_title(config: &GameConfig) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORDLE".bright_cyan().bold());
    println!(
        " Guess the {}-letter word in {} tries",
        config.word_length, config.max_attempts
    );
    println!("{}\n", "═".repeat(40).cyan());
}

/// Redraw the in-progress row on the current line
///
/// # Errors
/// Returns an I/O error if the terminal cannot be written.
pub fn print_typing(typed: &str, word_length: usize) -> io::Result<()> {
    replace_line(&typing_row(typed, word_length))
}

/// Erase the current line
///
/// # Errors
/// Returns an I/O error if the terminal cannot be written.
pub fn clear_typing() -> io::Result<()> {
    replace_line("")
}

/// Show `message` on the current line for `duration`, then erase it
///
/// # Errors
/// Returns an I/O error if the terminal cannot be written.
pub fn flash_message(message: &str, duration: Duration) -> io::Result<()> {
    replace_line(&message.red().bold().to_string())?;
    if !duration.is_zero() {
        thread::sleep(duration);
    }
    clear_typing()
}

fn replace_line(content: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        Print(content)
    )?;
    stdout.flush()
}

/// Print one scored guess
pub fn print_scored(guess: &Word, feedback: &Feedback, attempt: usize, max_attempts: usize) {
    println!(
        "{} {}",
        feedback_row(guess, feedback),
        format!("{attempt}/{max_attempts}").bright_black()
    );
}

/// Print the letters not yet ruled out
pub fn print_remaining_letters(letters: RemainingLetters) {
    let spaced = letters
        .iter()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");
    println!("   {}\n", spaced.bright_black());
}

/// Print the end-of-game message and, for finished games, the share grid
pub fn print_outcome(session: &GameSession, outcome: Outcome) {
    println!();
    match outcome {
        Outcome::Won(n) => println!("{}", praise(n).green().bold()),
        Outcome::Lost => println!("{}", loss_message(session.secret().text()).red().bold()),
        Outcome::Abandoned => {
            println!("{}", QUIT_MESSAGE.bright_cyan());
            return;
        }
    }

    println!(
        "\nWordle {}\n{}\n",
        score_label(outcome, session.config().max_attempts),
        share_grid(session.records())
    );
}

/// Print statistics as `Title: value` lines with a guess distribution chart
pub fn print_stats(stats: &StatsSummary) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("Played: {}", stats.played());
    println!("Win Percentage: {}", stats.win_percentage());
    println!("Current Streak: {}", stats.current_streak());
    println!("Max Streak: {}", stats.max_streak());
    println!("Guess Distribution:");

    let max = stats.histogram().iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.histogram().iter().enumerate() {
        println!(
            "   {}: {} {count}",
            i + 1,
            distribution_bar(count, max, 30).green()
        );
    }
}

/// Print the summary of a batch of automated games
pub fn print_batch_result(result: &BatchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "BATCH RESULTS:".bright_cyan().bold(),
        result.guesser.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Won:              {} ({:.1}%)",
        format!("{}", result.won).green(),
        result.win_rate()
    );
    println!("   Lost:             {}", format!("{}", result.lost).yellow());
    println!("   Abandoned:        {}", format!("{}", result.abandoned).red());
    if let Some(average) = result.average_guesses() {
        println!(
            "   Average guesses:  {}",
            format!("{average:.2}").bright_yellow().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max = result.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in result.distribution.iter().enumerate() {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        let max = u32::try_from(max).unwrap_or(u32::MAX);
        println!(
            "   {}: {} {count:4}",
            i + 1,
            distribution_bar(count, max, 40).green()
        );
    }
}
