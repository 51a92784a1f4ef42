//! Game state and orchestration
//!
//! [`GameSession`] is the pure state machine for one game. [`Game`] wraps it
//! with the validator, the answer pool fetched at start-up and statistics.

mod driver;
mod error;
mod session;
mod stats;

pub use driver::Game;
pub use error::{GameError, SubmitError};
pub(crate) use session::parse_guess;
pub use session::{GameSession, GuessRecord, GuessResult, MAX_ATTEMPTS, Outcome};
pub use stats::Statistics;
