//! Display functions for boards and command results

use super::formatters::{plural, share_bar, tile_slots};
use crate::commands::{CheckResult, SimulationResult, SolveResult};
use crate::core::TileSet;
use crate::game::Verdict;
use colored::Colorize;

/// Board as coloured tiles, padded to `slots`
#[must_use]
pub fn board_line(tiles: &TileSet, slots: usize) -> String {
    format!(" {} ", tile_slots(tiles, slots))
        .on_blue()
        .bold()
        .to_string()
}

/// One-line message describing how `guess` was judged
#[must_use]
pub fn verdict_line(guess: &str, verdict: Verdict) -> String {
    let guess = guess.trim().to_uppercase();
    match verdict {
        Verdict::NotOnBoard => format!("Sorry, {guess} uses letters not on the board.")
            .red()
            .to_string(),
        Verdict::NotAWord => format!("Sorry, {guess} is not a valid word.")
            .red()
            .to_string(),
        Verdict::Valid { points } => format!(
            "{}\n{}",
            format!("Yes! {guess} is a valid word!").green(),
            format!("You earned {points} point{}!", plural(points)).green()
        ),
    }
}

/// Solutions grouped by word length, longest group first
#[must_use]
pub fn solution_lines(solutions: &[&str]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;

    while start < solutions.len() {
        let len = solutions[start].len();
        let end = solutions[start..]
            .iter()
            .position(|w| w.len() != len)
            .map_or(solutions.len(), |offset| start + offset);

        lines.push(format!(
            "{} {}",
            format!("{len:>2} letters:").bright_cyan().bold(),
            solutions[start..end].join(", ")
        ));
        start = end;
    }

    lines
}

/// Print the result of solving a board
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Board: {}", board_line(&result.tiles, result.tiles.size()));
    println!("{}", "─".repeat(60).cyan());

    if result.total == 0 {
        println!("\n{}", "No words fit these letters.".yellow());
        return;
    }

    println!(
        "\n{} word{} fit{}",
        result.total.to_string().bright_yellow().bold(),
        plural(result.total),
        if result.total == 1 { "s" } else { "" }
    );
    if result.solutions.len() < result.total {
        println!("Showing the longest {}:", result.solutions.len());
    }
    println!();

    let words: Vec<&str> = result.solutions.iter().map(String::as_str).collect();
    for line in solution_lines(&words) {
        println!("  {line}");
    }
}

/// Print the verdict for a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\nBoard: {}", board_line(&result.tiles, result.tiles.size()));
    println!("{}", verdict_line(&result.guess, result.verdict));
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Average best:     {}",
        format!("{:.2} letters", result.average_best)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Full boards:      {}",
        result.full_boards.to_string().green()
    );
    println!(
        "   Unsolvable:       {}",
        result.unsolvable.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.rounds == 0 {
        return;
    }

    println!("\n📈 {}", "Best word length:".bright_cyan().bold());
    for (&len, &count) in &result.length_distribution {
        let pct = (count as f64 / result.rounds as f64) * 100.0;
        let bar = share_bar(count, result.rounds, 40);
        println!("   {len}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_lines_group_by_length() {
        colored::control::set_override(false);
        let lines = solution_lines(&["SCORE", "CATS", "NOTE", "CAT"]);
        assert_eq!(
            lines,
            vec![
                " 5 letters: SCORE",
                " 4 letters: CATS, NOTE",
                " 3 letters: CAT"
            ]
        );
    }

    #[test]
    fn solution_lines_empty() {
        assert!(solution_lines(&[]).is_empty());
    }

    #[test]
    fn verdict_line_messages() {
        colored::control::set_override(false);
        assert_eq!(
            verdict_line("boss", Verdict::NotOnBoard),
            "Sorry, BOSS uses letters not on the board."
        );
        assert_eq!(
            verdict_line("tacos", Verdict::NotAWord),
            "Sorry, TACOS is not a valid word."
        );
        assert_eq!(
            verdict_line("cat", Verdict::Valid { points: 3 }),
            "Yes! CAT is a valid word!\nYou earned 3 points!"
        );
    }

    #[test]
    fn board_line_contains_slots() {
        colored::control::set_override(false);
        let tiles = TileSet::from_letters("ab").unwrap();
        assert_eq!(board_line(&tiles, 3), " [A][B][ ] ");
    }
}
