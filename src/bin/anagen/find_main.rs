use crate::arg;
use crate::args::{self, ArgSpec};
use crate::globals::Settings;
use anagen::input::{check_phrase, read_phrase};
use anagen::prelude::*;
use anagen::{LetterMultiset, ResultPresenter, SearchEngine, SearchLimits};
use std::io;

/// The phrase from the command line if given, otherwise prompt on the terminal.
pub fn get_phrase(phrase: Option<String>) -> Result<String> {
    match phrase {
        Some(p) => Ok(check_phrase(&p)?.to_string()),
        None => {
            let stdin = io::stdin();
            read_phrase(&mut stdin.lock(), &mut io::stdout())
        }
    }
}

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new("Find multi-word anagrams of a phrase.");
    const A: [ArgSpec; 6] = [
        arg! {"phrase", "p", "Text", "Phrase to rearrange. If absent, prompt for one."},
        arg! {"max-words", "w", "Number", "Most words in one anagram. Default 3."},
        arg! {"max-results", "n", "Number", "Most anagrams to find. Default 100."},
        arg! {"min-length", "m", "Number", "Ignore dictionary words shorter than this."},
        arg! {"keep-duplicates", "", "", "Keep repeated dictionary words."},
        arg! {"output", "o", "File", "Where to write the anagrams. Default stdout."},
    ];
    let args = args::parse(&prog, &A, argv, settings)?;

    let mut limits = SearchLimits::default();
    let mut phrase = None;
    let mut min_length = 1;
    let mut keep_duplicates = false;
    let mut output = "-".to_string();
    for x in args {
        if x.name == "phrase" {
            phrase = Some(x.value);
        } else if x.name == "max-words" {
            limits.max_words = x.to_usize()?;
        } else if x.name == "max-results" {
            limits.max_results = x.to_usize()?;
        } else if x.name == "min-length" {
            min_length = x.to_usize()?;
        } else if x.name == "keep-duplicates" {
            keep_duplicates = true;
        } else if x.name == "output" {
            output = x.value;
        } else {
            unreachable!();
        }
    }
    let limits = SearchLimits::new(limits.max_words, limits.max_results)?;

    let dict = settings.load_dictionary(min_length, keep_duplicates)?;
    let phrase = get_phrase(phrase)?;
    let target = LetterMultiset::from_text(&phrase);
    let candidates = dict.filter(&target);
    let results = SearchEngine::new(limits).generate(&candidates, &target);

    let mut w = get_writer(&output)?;
    ResultPresenter::new(limits.max_words).write(&mut w, &phrase, &results)?;
    w.flush()?;
    Ok(())
}
