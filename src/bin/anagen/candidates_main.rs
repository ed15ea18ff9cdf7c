use crate::arg;
use crate::args::{self, ArgSpec};
use crate::find_main::get_phrase;
use crate::globals::Settings;
use anagen::prelude::*;
use anagen::LetterMultiset;

pub fn main(argv: &[String], settings: &mut Settings) -> Result<()> {
    let prog = args::ProgSpec::new("List dictionary words that fit inside a phrase.");
    const A: [ArgSpec; 4] = [
        arg! {"phrase", "p", "Text", "Phrase to match against. If absent, prompt for one."},
        arg! {"min-length", "m", "Number", "Ignore dictionary words shorter than this."},
        arg! {"keep-duplicates", "", "", "Keep repeated dictionary words."},
        arg! {"output", "o", "File", "Where to write the words. Default stdout."},
    ];
    let args = args::parse(&prog, &A, argv, settings)?;

    let mut phrase = None;
    let mut min_length = 1;
    let mut keep_duplicates = false;
    let mut output = "-".to_string();
    for x in args {
        if x.name == "phrase" {
            phrase = Some(x.value);
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

    let dict = settings.load_dictionary(min_length, keep_duplicates)?;
    let phrase = get_phrase(phrase)?;
    let target = LetterMultiset::from_text(&phrase);
    let mut w = get_writer(&output)?;
    for entry in dict.filter(&target) {
        writeln!(w, "{}", entry.word())?;
    }
    w.flush()?;
    Ok(())
}
