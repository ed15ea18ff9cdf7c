//! Reading and checking the phrase to be anagrammed

use crate::prelude::*;
use log::debug;
use std::fmt;

/// Why a phrase was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    /// nothing but whitespace
    Empty,
    /// something other than a letter or whitespace
    BadCharacter(char),
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No input received. Please enter letters only."),
            Self::BadCharacter(_) => write!(
                f,
                "Input must contain only letters and spaces. No numbers or special characters."
            ),
        }
    }
}

/// A phrase is valid if it has at least one letter, and nothing but letters and whitespace.
///```
/// use anagen::input::{validate, InputProblem};
/// assert!(validate("Ruth Anne").is_ok());
/// assert_eq!(validate(" \t"), Err(InputProblem::Empty));
/// assert_eq!(validate("R2D2"), Err(InputProblem::BadCharacter('2')));
///```
pub fn validate(line: &str) -> core::result::Result<(), InputProblem> {
    if line.trim().is_empty() {
        return Err(InputProblem::Empty);
    }
    match line.chars().find(|c| !c.is_ascii_alphabetic() && !c.is_whitespace()) {
        Some(c) => Err(InputProblem::BadCharacter(c)),
        None => Ok(()),
    }
}

/// Prompt on `out` and read lines from `input` until a valid phrase arrives.
/// Invalid lines get a guidance message and another prompt.
/// End of input, or a read error, is InputStreamClosed.
pub fn read_phrase(input: &mut impl BufRead, out: &mut impl Write) -> Result<String> {
    let mut raw = Vec::new();
    loop {
        write!(out, "Enter a name or phrase: ")?;
        out.flush()?;
        raw.clear();
        match input.read_until(b'\n', &mut raw) {
            Ok(0) => return Err(Error::InputStreamClosed(None)),
            Ok(_) => {}
            Err(e) => return Err(Error::InputStreamClosed(Some(e))),
        }
        // bytes that are not UTF-8 become U+FFFD, which validate rejects
        let line = String::from_utf8_lossy(&raw);
        let phrase = line.trim_end_matches(&['\n', '\r'][..]);
        match validate(phrase) {
            Ok(()) => return Ok(phrase.to_string()),
            Err(p) => {
                debug!("rejected input {:?} : {:?}", phrase, p);
                writeln!(out, "{}\n", p)?;
            }
        }
    }
}

/// Check a phrase given up front, e.g. on the command line. No second chances.
pub fn check_phrase(phrase: &str) -> Result<&str> {
    validate(phrase)?;
    Ok(phrase)
}
