//! Letter frequency arithmetic

use std::fmt;

/// Number of letters in the lowercase ASCII alphabet.
pub const ALPHABET: usize = 26;

/// Count of each letter a..z, case-insensitive.
///
/// All counts are non-negative. `subtract` must only be called with a multiset
/// for which `can_supply` holds, and must be undone by the matching `add`
/// before any other branch is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct LetterMultiset {
    counts: [u32; ALPHABET],
}

impl LetterMultiset {
    /// the empty multiset
    pub const fn new() -> Self {
        Self { counts: [0; ALPHABET] }
    }
    /// Count the ASCII letters in `s`, ignoring case and everything else.
    ///```
    /// use anagen::LetterMultiset;
    /// assert_eq!(LetterMultiset::from_text("Cat3!"), LetterMultiset::from_text("cat"));
    /// assert!(LetterMultiset::from_text(" 42 ").is_empty());
    ///```
    pub fn from_text(s: &str) -> Self {
        let mut ret = Self::new();
        for b in s.bytes() {
            if b.is_ascii_alphabetic() {
                ret.counts[(b.to_ascii_lowercase() - b'a') as usize] += 1;
            }
        }
        ret
    }
    /// true if every letter of `need` is available in `self`
    pub fn can_supply(&self, need: &Self) -> bool {
        self.counts.iter().zip(need.counts.iter()).all(|(a, n)| n <= a)
    }
    /// remove `need` from self. Caller guarantees `self.can_supply(need)`
    pub fn subtract(&mut self, need: &Self) {
        debug_assert!(self.can_supply(need));
        for (a, n) in self.counts.iter_mut().zip(need.counts.iter()) {
            *a -= n;
        }
    }
    /// put `other` back, the inverse of `subtract`
    pub fn add(&mut self, other: &Self) {
        for (a, n) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += n;
        }
    }
    /// true if all counts are zero
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|x| *x == 0)
    }
    /// total number of letters
    pub fn len(&self) -> usize {
        self.counts.iter().map(|x| *x as usize).sum()
    }
    /// count for one letter, case-insensitive. Non-letters are always zero.
    pub fn count(&self, ch: char) -> u32 {
        if ch.is_ascii_alphabetic() {
            self.counts[(ch.to_ascii_lowercase() as u8 - b'a') as usize]
        } else {
            0
        }
    }
}

impl fmt::Display for LetterMultiset {
    /// letters in alphabetical order, e.g. "act"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, n) in self.counts.iter().enumerate() {
            for _ in 0..*n {
                write!(f, "{}", (b'a' + i as u8) as char)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Verifies counting ignores case and non-letters.
    fn from_text_ignores_case_and_junk() {
        assert_eq!(LetterMultiset::from_text("Cat3!"), LetterMultiset::from_text("cat"));
        let m = LetterMultiset::from_text("Ru-th! 42 ANNE");
        assert_eq!(m.len(), 8);
        assert_eq!(m.count('n'), 2);
        assert_eq!(m.count('R'), 1);
        assert_eq!(m.count('3'), 0);
        assert_eq!(m.to_string(), "aehnnrtu");
    }

    #[test]
    /// Verifies text with no letters gives the empty multiset.
    fn from_text_never_fails() {
        assert!(LetterMultiset::from_text("").is_empty());
        assert!(LetterMultiset::from_text(" \t123 !?").is_empty());
        assert_eq!(LetterMultiset::from_text("").len(), 0);
    }

    #[test]
    /// Verifies containment is reflexive and rejects any shortfall.
    fn can_supply() {
        let x = LetterMultiset::from_text("letters");
        assert!(x.can_supply(&x));
        assert!(x.can_supply(&LetterMultiset::new()));
        assert!(x.can_supply(&LetterMultiset::from_text("tee")));
        assert!(!x.can_supply(&LetterMultiset::from_text("teee")));
        assert!(!x.can_supply(&LetterMultiset::from_text("z")));
        assert!(!LetterMultiset::new().can_supply(&x));
    }

    #[test]
    /// Verifies subtract followed by add restores the original counts.
    fn subtract_then_add_is_identity() {
        let orig = LetterMultiset::from_text("anagram");
        for part in ["", "a", "gram", "anagram", "naga", "arm"] {
            let m = LetterMultiset::from_text(part);
            assert!(orig.can_supply(&m));
            let mut x = orig;
            x.subtract(&m);
            assert_eq!(x.len(), orig.len() - m.len());
            x.add(&m);
            assert_eq!(x, orig);
        }
        let mut x = orig;
        x.subtract(&orig);
        assert!(x.is_empty());
    }

    #[test]
    /// Verifies a request for more of a letter than exists is refused.
    fn can_supply_rejects_over_request() {
        let orig = LetterMultiset::from_text("anagram");
        assert!(!orig.can_supply(&LetterMultiset::from_text("naan")));
        assert!(!orig.can_supply(&LetterMultiset::from_text("anagrams")));
        assert!(orig.can_supply(&LetterMultiset::from_text("nag")));
    }
}
