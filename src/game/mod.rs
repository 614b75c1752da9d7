//! Game sessions and the loop that drives them

mod driver;
mod session;

pub use driver::{NoopObserver, RetryPolicy, SessionObserver, play_session};
pub use session::{
    ABANDONED_CODE, GameError, GameSession, GuessRecord, InvalidGuess, Outcome, SessionState,
};
