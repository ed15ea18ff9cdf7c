//! The command line tool `anagen` finds multi-word anagrams of a phrase,
//! using every letter exactly once, with words drawn from a dictionary file.
//! The library does the work, and should be usable by other tools.
//!```
//! use anagen::{DictionaryIndex, LetterMultiset, SearchEngine, SearchLimits};
//! let dict = DictionaryIndex::from_words(&["act", "cat", "tac", "a", "ct"]);
//! let target = LetterMultiset::from_text("Cat");
//! let results = SearchEngine::new(SearchLimits::default()).generate(&dict.filter(&target), &target);
//! assert_eq!(results.len(), 4);
//! assert_eq!(results.combinations()[0], ["a", "ct"]);
//!```

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,

//    clippy::all,
//    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]

pub mod dict;
pub mod input;
pub mod letters;
pub mod prelude;
pub mod present;
pub mod search;
pub mod util;

#[doc(inline)]
pub use crate::dict::{CandidateList, DictionaryEntry, DictionaryIndex};
#[doc(inline)]
pub use crate::letters::LetterMultiset;
#[doc(inline)]
pub use crate::present::{ResultPresenter, Summary};
#[doc(inline)]
pub use crate::search::{Combination, ResultSet, SearchEngine, SearchLimits};
#[doc(inline)]
pub use crate::util::{Error, Result};
