//! Interactive letters round
//!
//! Text-based game loop: pick consonants or vowels until the board is full,
//! submit one word inside the time limit, then see how it scored.

use crate::core::Category;
use crate::game::{Choice, Round};
use crate::output::{board_line, solution_lines, verdict_line};
use crate::wordlists::Dictionary;
use anyhow::{Result, bail};
use colored::Colorize;
use log::warn;
use std::io::{BufRead, Write};
use std::time::Instant;

/// Console session reading answers from `input` and writing to `output`
pub struct Session<'a, R, W> {
    round: Round,
    dictionary: &'a Dictionary,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    #[must_use]
    pub const fn new(round: Round, dictionary: &'a Dictionary, input: R, output: W) -> Self {
        Self {
            round,
            dictionary,
            input,
            output,
        }
    }

    /// Play rounds until the player declines another
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if input ends
    /// before the session is over.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "═".repeat(44).bright_cyan())?;
        writeln!(
            self.output,
            "{}",
            "        C O U N T D O W N   L E T T E R S   ".on_blue().bold()
        )?;
        writeln!(self.output, "{}", "═".repeat(44).bright_cyan())?;

        loop {
            self.play_round()?;
            if !self.ask_yes_no("Do you want to play another round? [Y/N] ")? {
                break;
            }
            self.round.next_round();
        }

        writeln!(self.output, "Thanks for playing!")?;
        Ok(())
    }

    fn play_round(&mut self) -> Result<()> {
        self.pick_letters()?;

        let limit = self.round.config().time_limit;
        writeln!(
            self.output,
            "\nYou have {} seconds to find the longest word using these letters.",
            limit.as_secs()
        )?;
        writeln!(self.output, "{}", "The clock is running!".blue().bold())?;

        let start = Instant::now();
        let guess = self.read_line("Enter a guess: ")?;
        let elapsed = start.elapsed();

        if elapsed > limit {
            warn!(
                "Guess submitted after {:.1}s, limit is {}s",
                elapsed.as_secs_f64(),
                limit.as_secs()
            );
            writeln!(
                self.output,
                "{}",
                format!("Time's up! {} came in too late.", guess.to_uppercase()).red()
            )?;
        } else {
            writeln!(self.output, "\nYour guess is: {}", guess.to_uppercase())?;
            let verdict = self.round.judge(&guess, self.dictionary);
            writeln!(self.output, "{}", verdict_line(&guess, verdict))?;
        }
        writeln!(self.output)?;

        if self.ask_yes_no("Do you want to see all possible solutions? [Y/N] ")? {
            let solutions = self.round.solutions(self.dictionary);
            if solutions.is_empty() {
                writeln!(self.output, "{}", "No words fit these letters.".yellow())?;
            }
            for line in solution_lines(&solutions) {
                writeln!(self.output, "  {line}")?;
            }
        }

        Ok(())
    }

    fn pick_letters(&mut self) -> Result<()> {
        loop {
            let choice = self.round.choice();
            if choice == Choice::Complete {
                return Ok(());
            }

            let keys: Vec<char> = Category::ALL
                .into_iter()
                .filter(|&category| choice.allows(category))
                .map(Category::key)
                .collect();
            let tags = keys.iter().map(char::to_string).collect::<Vec<_>>().join("/");
            let message = match choice.forced() {
                Some(Category::Vowel) => {
                    format!("Maximum consonants reached. You must select a vowel. [{tags}] ")
                }
                Some(Category::Consonant) => {
                    format!("Maximum vowels reached. You must select a consonant. [{tags}] ")
                }
                None => format!("Do you want a consonant or a vowel? [{tags}] "),
            };

            let key = self.prompt(&message, &keys)?;
            let category: Category = key.to_string().parse()?;

            self.round.draw(category)?;
            let slots = self.round.config().tile_count;
            writeln!(self.output, "{}", board_line(self.round.tiles(), slots))?;
        }
    }

    fn ask_yes_no(&mut self, message: &str) -> Result<bool> {
        Ok(self.prompt(message, &['Y', 'N'])? == 'Y')
    }

    /// Ask until the answer is a single key from `valid` (ignoring case); returns it uppercased
    fn prompt(&mut self, message: &str, valid: &[char]) -> Result<char> {
        loop {
            let answer = self.read_line(message)?;
            let mut chars = answer.chars();
            if let (Some(key), None) = (chars.next(), chars.next()) {
                let key = key.to_ascii_uppercase();
                if valid.contains(&key) {
                    return Ok(key);
                }
            }
            writeln!(
                self.output,
                "{answer} is not a valid value. Please try again.\n"
            )?;
        }
    }

    fn read_line(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message.bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }

    /// Round being played
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }
}

/// Run an interactive session on the terminal
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_play(round: Round, dictionary: &Dictionary) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(round, dictionary, stdin.lock(), stdout.lock()).run()
}
