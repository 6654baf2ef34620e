//! Letters round orchestration
//!
//! Ties the core together: piles feed a tile set under the round limits, and a
//! finished board is judged against a dictionary.

mod config;
mod round;

pub use config::GameConfig;
pub use round::{Choice, Round, RoundError, Verdict, judge_guess, points};
