//! Terminal output formatting
//!
//! Display utilities for boards, verdicts and command results.

pub mod display;
pub mod formatters;

pub use display::{
    board_line, print_check_result, print_simulation_result, print_solve_result, solution_lines,
    verdict_line,
};
