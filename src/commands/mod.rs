//! Command implementations

pub mod play;
pub mod simulate;
pub mod solve;

pub use play::{Session, run_play};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
pub use solve::{CheckResult, SolveResult, check_word, solve_letters};
