//! Printing search results

use crate::prelude::*;
use crate::search::ResultSet;

/// What the closing line of a report says
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// nothing found
    NoCombinations,
    /// every combination is shown
    Exact(usize),
    /// only the first N are shown, there were more
    Capped(usize),
}

impl Summary {
    /// classify a result set
    pub fn new(results: &ResultSet) -> Self {
        if results.is_empty() {
            Self::NoCombinations
        } else if results.truncated() {
            Self::Capped(results.len())
        } else {
            Self::Exact(results.len())
        }
    }
}

/// Writes a report for one phrase
#[derive(Debug, Clone, Copy)]
pub struct ResultPresenter {
    max_words: usize,
}

impl ResultPresenter {
    /// new presenter, `max_words` is echoed in the header
    pub const fn new(max_words: usize) -> Self {
        Self { max_words }
    }
    /// header, one line per combination, then a summary
    pub fn write(&self, w: &mut impl Write, phrase: &str, results: &ResultSet) -> Result<()> {
        writeln!(
            w,
            "\nAnagram combinations for: \"{}\" (using all letters, max {} words):",
            phrase, self.max_words
        )?;
        match Summary::new(results) {
            Summary::NoCombinations => writeln!(w, "No valid combinations found.")?,
            summary => {
                for combo in results {
                    writeln!(w, "{}", combo.join(" "))?;
                }
                match summary {
                    Summary::Capped(n) => {
                        writeln!(w, "\nShowing first {} combinations (limit reached).", n)?
                    }
                    _ => writeln!(w, "\nTotal anagram combinations found: {}", results.len())?,
                }
            }
        }
        Ok(())
    }
}
