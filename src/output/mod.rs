//! Terminal output formatting
//!
//! Board drawing, result pages and the plain-text formatters behind them.

mod board;
pub mod display;
pub mod formatters;

pub use board::TerminalBoard;
pub use display::{print_batch_result, print_stats};
