//! Word list, indexed by letter content

use crate::letters::LetterMultiset;
use crate::prelude::*;
use fnv::FnvHashSet;
use log::{debug, warn};

/// One dictionary word and its letters. Never changes once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    word: String,
    letters: LetterMultiset,
}

impl DictionaryEntry {
    /// Make an entry from a raw line. Everything but ASCII letters is stripped
    /// and the rest lowercased. None if nothing is left.
    pub fn new(line: &[u8]) -> Option<Self> {
        let word: String = line
            .iter()
            .filter(|b| b.is_ascii_alphabetic())
            .map(|b| b.to_ascii_lowercase() as char)
            .collect();
        if word.is_empty() {
            None
        } else {
            let letters = LetterMultiset::from_text(&word);
            Some(Self { word, letters })
        }
    }
    /// the lowercase word
    pub fn word(&self) -> &str {
        &self.word
    }
    /// letters of the word
    pub const fn letters(&self) -> &LetterMultiset {
        &self.letters
    }
}

/// Dictionary entries that fit inside a target, sorted by word.
pub type CandidateList<'a> = Vec<&'a DictionaryEntry>;

/// The whole loaded word list
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    entries: Vec<DictionaryEntry>,
}

impl DictionaryIndex {
    /// an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }
    /// Load a dictionary file, one word or phrase per line. Gzipped files are fine.
    pub fn load(name: &str) -> Result<Self> {
        Self::load_with(name, 1)
    }
    /// Load a dictionary file, skipping words shorter than `min_length` letters.
    pub fn load_with(name: &str, min_length: usize) -> Result<Self> {
        let mut f = get_reader(name)?;
        let ret = Self::from_reader(&mut *f, min_length)
            .map_err(|e| match e {
                Error::IoError(io) => Error::source_unavailable(name, io),
                other => other,
            })?;
        debug!("dictionary {} has {} entries", name, ret.len());
        Ok(ret)
    }
    /// Read entries from any line source.
    /// Lines with no letters are skipped. Duplicates are kept.
    pub fn from_reader(f: &mut impl BufRead, min_length: usize) -> Result<Self> {
        let mut entries = Vec::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            if f.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if let Some(e) = DictionaryEntry::new(&line) {
                if e.word.len() >= min_length {
                    entries.push(e);
                }
            }
        }
        Ok(Self { entries })
    }
    /// build from a list of words, as if each were one line
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            entries: words
                .iter()
                .filter_map(|w| DictionaryEntry::new(w.as_ref().as_bytes()))
                .collect(),
        }
    }
    /// Remove repeated words, keeping the first of each. Return the number removed.
    pub fn dedup(&mut self) -> usize {
        let before = self.entries.len();
        let mut seen: FnvHashSet<String> = FnvHashSet::default();
        self.entries.retain(|e| seen.insert(e.word.clone()));
        let removed = before - self.entries.len();
        if removed > 0 {
            warn!("dropped {} duplicate dictionary words", removed);
        }
        removed
    }
    /// All entries whose letters fit inside `target`, sorted by word.
    pub fn filter(&self, target: &LetterMultiset) -> CandidateList<'_> {
        let mut ret: CandidateList<'_> =
            self.entries.iter().filter(|e| target.can_supply(&e.letters)).collect();
        ret.sort_by(|a, b| a.word.cmp(&b.word));
        debug!("{} candidates for '{}'", ret.len(), target);
        ret
    }
    /// number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    /// no entries?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// all entries, in load order
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }
}
