//! Backtracking search for multi-word anagrams

use crate::dict::DictionaryEntry;
use crate::letters::LetterMultiset;
use crate::prelude::*;
use fnv::FnvHashSet;
use log::{debug, trace};

/// Default maximum number of words in one combination
pub const DEFAULT_MAX_WORDS: usize = 3;
/// Default maximum number of combinations to keep
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Bounds on the work done by one search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// most words in one combination
    pub max_words: usize,
    /// most combinations returned
    pub max_results: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self { max_words: DEFAULT_MAX_WORDS, max_results: DEFAULT_MAX_RESULTS }
    }
}

impl SearchLimits {
    /// new limits, both must be at least one
    pub fn new(max_words: usize, max_results: usize) -> Result<Self> {
        if max_words == 0 {
            return err!("Maximum number of words must be greater than zero");
        }
        if max_results == 0 {
            return err!("Maximum number of results must be greater than zero");
        }
        Ok(Self { max_words, max_results })
    }
}

/// Words in the order they were chosen
pub type Combination = Vec<String>;

/// Distinct combinations found by one search, in the order found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    combinations: Vec<Combination>,
    truncated: bool,
    nodes: usize,
}

impl ResultSet {
    /// the combinations, in the order found
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }
    /// iterate over combinations
    pub fn iter(&self) -> std::slice::Iter<'_, Combination> {
        self.combinations.iter()
    }
    /// number of combinations kept
    pub fn len(&self) -> usize {
        self.combinations.len()
    }
    /// nothing found?
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
    /// true if more combinations existed than were kept
    pub const fn truncated(&self) -> bool {
        self.truncated
    }
    /// number of search states visited
    pub const fn nodes(&self) -> usize {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Combination;
    type IntoIter = std::slice::Iter<'a, Combination>;
    fn into_iter(self) -> Self::IntoIter {
        self.combinations.iter()
    }
}

/// Finds every way to spell a target with candidate words
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine {
    limits: SearchLimits,
}

impl SearchEngine {
    /// new engine with the given limits
    pub const fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }
    /// current limits
    pub const fn limits(&self) -> &SearchLimits {
        &self.limits
    }
    /// All combinations of `candidates` whose letters are exactly `target`.
    ///
    /// Each multiset of words is produced once, in candidate order.
    /// An empty target produces no combinations.
    pub fn generate(
        &self,
        candidates: &[&DictionaryEntry],
        target: &LetterMultiset,
    ) -> ResultSet {
        let mut search = Search::new(candidates, *target, self.limits);
        if !target.is_empty() {
            search.explore(0);
        }
        debug!(
            "search for '{}' found {} combinations in {} nodes{}",
            target,
            search.results.len(),
            search.nodes,
            if search.truncated { ", limit reached" } else { "" }
        );
        ResultSet {
            combinations: search.results,
            truncated: search.truncated,
            nodes: search.nodes,
        }
    }
}

/// Convenience wrapper around `SearchEngine`
pub fn generate(
    candidates: &[&DictionaryEntry],
    target: &LetterMultiset,
    limits: SearchLimits,
) -> ResultSet {
    SearchEngine::new(limits).generate(candidates, target)
}

/// Mutable state for one search. `remaining` and `path` are shared by every
/// branch, each branch restores them before returning.
struct Search<'a> {
    candidates: &'a [&'a DictionaryEntry],
    limits: SearchLimits,
    remaining: LetterMultiset,
    /// candidate indices, non-decreasing
    path: Vec<usize>,
    seen: FnvHashSet<String>,
    results: Vec<Combination>,
    truncated: bool,
    nodes: usize,
}

impl<'a> Search<'a> {
    fn new(
        candidates: &'a [&'a DictionaryEntry],
        target: LetterMultiset,
        limits: SearchLimits,
    ) -> Self {
        Self {
            candidates,
            limits,
            remaining: target,
            path: Vec::with_capacity(limits.max_words),
            seen: FnvHashSet::default(),
            results: Vec::new(),
            truncated: false,
            nodes: 0,
        }
    }

    fn explore(&mut self, start: usize) {
        self.nodes += 1;
        if self.remaining.is_empty() {
            self.accept();
            return;
        }
        if self.path.len() >= self.limits.max_words {
            return;
        }
        for i in start..self.candidates.len() {
            if self.truncated {
                return;
            }
            let cand: &'a DictionaryEntry = self.candidates[i];
            if self.remaining.can_supply(cand.letters()) {
                self.remaining.subtract(cand.letters());
                self.path.push(i);
                self.explore(i);
                self.path.pop();
                self.remaining.add(cand.letters());
            }
        }
    }

    /// Record the current path. Once the cap is full, one more distinct
    /// combination marks the result truncated and stops the search.
    fn accept(&mut self) {
        let words: Combination =
            self.path.iter().map(|i| self.candidates[*i].word().to_string()).collect();
        let key = words.join(" ");
        if !self.seen.insert(key) {
            return;
        }
        if self.results.len() >= self.limits.max_results {
            self.truncated = true;
            return;
        }
        trace!("found {}", words.join(" "));
        self.results.push(words);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::DictionaryIndex;

    fn run(words: &[&str], phrase: &str, max_words: usize, max_results: usize) -> ResultSet {
        let d = DictionaryIndex::from_words(words);
        let target = LetterMultiset::from_text(phrase);
        let c = d.filter(&target);
        generate(&c, &target, SearchLimits::new(max_words, max_results).unwrap())
    }

    fn lines(r: &ResultSet) -> Vec<String> {
        r.iter().map(|c| c.join(" ")).collect()
    }

    #[test]
    /// Verifies every combination spells exactly the target letters.
    fn cat() {
        let r = run(&["act", "cat", "tac", "a", "ct"], "cat", 3, 100);
        assert_eq!(lines(&r), ["a ct", "act", "cat", "tac"]);
        assert!(!r.truncated());
        let target = LetterMultiset::from_text("cat");
        for c in &r {
            let mut m = LetterMultiset::new();
            for w in c {
                m.add(&LetterMultiset::from_text(w));
            }
            assert_eq!(m, target);
        }
    }

    #[test]
    /// Verifies word order permutations are not reported separately.
    fn no_permutations() {
        let r = run(&["cd", "ab"], "Abcd", 3, 100);
        assert_eq!(lines(&r), ["ab cd"]);
    }

    #[test]
    /// Verifies words may repeat and the word limit is honored.
    fn reuse_and_word_limit() {
        assert_eq!(lines(&run(&["ab"], "abab", 3, 100)), ["ab ab"]);
        assert!(run(&["ab"], "abab", 1, 100).is_empty());
        assert_eq!(
            lines(&run(&["a", "aa", "aaa"], "aaaa", 4, 100)),
            ["a a a a", "a a aa", "a aaa", "aa aa"]
        );
        assert_eq!(
            lines(&run(&["a", "aa", "aaa"], "aaaa", 3, 100)),
            ["a a aa", "a aaa", "aa aa"]
        );
    }

    #[test]
    /// Verifies the result cap, and that truncation is only flagged when more existed.
    fn cap() {
        let exact = run(&["a", "aa", "aaa"], "aaaa", 4, 4);
        assert_eq!(exact.len(), 4);
        assert!(!exact.truncated());

        let capped = run(&["a", "aa", "aaa"], "aaaa", 4, 3);
        assert!(capped.truncated());
        assert_eq!(lines(&capped), ["a a a a", "a a aa", "a aaa"]);
    }

    #[test]
    /// Verifies repeated dictionary entries do not repeat results.
    fn duplicate_entries_give_one_result() {
        let r = run(&["cat", "cat", "a", "ct", "ct"], "cat", 3, 100);
        assert_eq!(lines(&r), ["a ct", "cat"]);
    }

    #[test]
    /// Verifies a target with no letters produces no combinations.
    fn empty_target() {
        let r = run(&["a"], "123 !", 3, 100);
        assert!(r.is_empty());
        assert!(!r.truncated());
        assert_eq!(r.nodes(), 0);
    }

    #[test]
    /// Verifies an unspellable target gives an empty, untruncated result.
    fn nothing_fits() {
        let r = run(&["dog", "cat"], "xyz", 3, 100);
        assert!(r.is_empty());
        assert!(!r.truncated());
    }

    #[test]
    /// Verifies two runs agree and no combination appears twice.
    fn deterministic_and_distinct() {
        let words = ["rat", "tar", "art", "a", "t", "r", "at", "ta", "tr"];
        let a = run(&words, "tartar", 3, 100);
        let b = run(&words, "tartar", 3, 100);
        assert_eq!(a, b);
        let mut all = lines(&a);
        let n = all.len();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), n);
        assert!(!a.is_empty());
    }

    #[test]
    /// Verifies zero limits are rejected.
    fn bad_limits() {
        assert!(SearchLimits::new(0, 10).is_err());
        assert!(SearchLimits::new(3, 0).is_err());
        assert_eq!(SearchLimits::default(), SearchLimits::new(3, 100).unwrap());
    }
}
