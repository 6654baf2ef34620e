//! Word list loading utilities
//!
//! Reads free-text word files into a [`Dictionary`] and trims large word files
//! down to the words that can ever be played.

use super::{Dictionary, WORDS};
use log::info;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Split `text` on non-word characters, skipping empty pieces
///
/// Word characters are ASCII letters, digits and underscore.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|s| !s.is_empty())
}

/// Load a dictionary from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use countdown_letters::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dict = Dictionary::from_words(tokens(&content));

    info!("Loaded {} words from {}", dict.len(), path.display());
    Ok(dict)
}

/// Dictionary built from the embedded word list
#[must_use]
pub fn embedded() -> Dictionary {
    Dictionary::from_words(WORDS)
}

/// Outcome of a truncation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncateSummary {
    pub tokens_read: usize,
    pub words_written: usize,
}

/// Copy the playable words of `input` into `output`
///
/// Tokens are split on anything other than word characters, hyphens, periods and
/// apostrophes, so `don't` and `x-ray` stay whole and are then dropped. A token is written
/// (lowercased, one per line) when it is made only of letters and is at most `max_len`
/// long. `output` is created or overwritten.
///
/// # Errors
///
/// Returns an I/O error if `max_len` is zero, if `input` cannot be read, or if
/// `output` cannot be written.
pub fn truncate<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    max_len: usize,
) -> io::Result<TruncateSummary> {
    if max_len == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "maximum word length must be greater than zero",
        ));
    }

    let content = fs::read_to_string(input.as_ref())?;
    let mut out = BufWriter::new(fs::File::create(output.as_ref())?);

    let mut summary = TruncateSummary {
        tokens_read: 0,
        words_written: 0,
    };

    let pieces = content
        .split(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '\'')))
        .filter(|s| !s.is_empty());

    for token in pieces {
        summary.tokens_read += 1;
        if token.len() <= max_len && token.chars().all(|c| c.is_ascii_alphabetic()) {
            writeln!(out, "{}", token.to_ascii_lowercase())?;
            summary.words_written += 1;
        }
    }
    out.flush()?;

    info!(
        "Wrote {} of {} tokens to {}",
        summary.words_written,
        summary.tokens_read,
        output.as_ref().display()
    );
    Ok(summary)
}
