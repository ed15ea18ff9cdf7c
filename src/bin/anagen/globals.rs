//! global settings and command line arguments available to all tools

use crate::arg;
use crate::args::{self, ArgSpec, ArgValue};
use anagen::prelude::*;
use anagen::DictionaryIndex;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable naming the dictionary, if --dict is not given
pub const DICT_ENV: &str = "ANAGEN_DICT";
/// Dictionary used if nothing else is specified
pub const DEFAULT_DICT: &str = "words.csv";

const A: [ArgSpec; 2] = [
    arg! {"dict", "d", "File", "Dictionary file, one word per line. May be gzipped."},
    arg! {"verbose", "v", "", "More diagnostics on stderr. Repeat for even more."},
];

pub fn global_args() -> &'static [ArgSpec] {
    &A
}

#[derive(Clone, Debug, Default)]
pub struct Settings {
    /// --dict
    pub dict: Option<String>,
    /// number of times --verbose was given
    pub verbose: usize,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn consume(&mut self, args: &[ArgValue]) -> Result<()> {
        for x in args {
            if x.name == "dict" {
                self.dict = Some(x.value.clone());
            } else if x.name == "verbose" {
                self.verbose += 1;
            } else {
                unreachable!();
            }
        }
        log::set_max_level(level_filter(self.verbose));
        Ok(())
    }
    /// The dictionary to read : --dict, then $ANAGEN_DICT, then words.csv
    pub fn dict_name(&self) -> Result<String> {
        if let Some(x) = &self.dict {
            return Ok(x.clone());
        }
        dict_from_env(std::env::var(DICT_ENV))
    }
    /// Load the dictionary, removing repeated words unless `keep_duplicates`
    pub fn load_dictionary(
        &self,
        min_length: usize,
        keep_duplicates: bool,
    ) -> Result<DictionaryIndex> {
        let mut dict = DictionaryIndex::load_with(&self.dict_name()?, min_length)?;
        if !keep_duplicates {
            dict.dedup();
        }
        Ok(dict)
    }
}

fn dict_from_env(var: std::result::Result<String, std::env::VarError>) -> Result<String> {
    match var {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(std::env::VarError::NotPresent) => Ok(DEFAULT_DICT.to_string()),
        Err(std::env::VarError::NotUnicode(_)) => {
            err!("invalid {}: value is not valid UTF-8", DICT_ENV)
        }
    }
}

const fn level_filter(verbose: usize) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Writes log records to stderr, tab separated like our error messages
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }
    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let tag = match record.level() {
                Level::Error => "Error",
                Level::Warn => "Warning",
                Level::Info => "Info",
                Level::Debug => "Debug",
                Level::Trace => "Trace",
            };
            eprintln!("{}\t{}", tag, record.args());
        }
    }
    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// install the stderr logger, at the default level
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_filter(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    /// Verifies --dict wins, then the environment, then the default name.
    fn dict_resolution() {
        let s = Settings { dict: Some("mine.txt".to_string()), verbose: 0 };
        assert_eq!(s.dict_name().unwrap(), "mine.txt");
        assert_eq!(dict_from_env(Ok("env.txt".to_string())).unwrap(), "env.txt");
        assert_eq!(dict_from_env(Ok(String::new())).unwrap(), DEFAULT_DICT);
        assert_eq!(dict_from_env(Err(std::env::VarError::NotPresent)).unwrap(), DEFAULT_DICT);
        assert!(dict_from_env(Err(std::env::VarError::NotUnicode(OsString::new()))).is_err());
    }

    #[test]
    /// Verifies --verbose counts map to log levels.
    fn levels() {
        assert_eq!(level_filter(0), LevelFilter::Warn);
        assert_eq!(level_filter(2), LevelFilter::Debug);
        assert_eq!(level_filter(9), LevelFilter::Trace);
    }

    #[test]
    /// Verifies global args are counted and stored.
    fn consume() -> Result<()> {
        let mut s = Settings::new();
        s.consume(&[
            ArgValue::new("verbose", "", 1),
            ArgValue::new("dict", "x.gz", 2),
            ArgValue::new("verbose", "", 4),
        ])?;
        assert_eq!(s.verbose, 2);
        assert_eq!(s.dict.as_deref(), Some("x.gz"));
        Ok(())
    }

    #[test]
    /// Verifies dedup and minimum length are applied on load.
    fn load_dictionary() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "cat\nact\ncat\nat\n")?;
        let s = Settings { dict: Some(path.to_str().unwrap().to_string()), verbose: 0 };
        assert_eq!(s.load_dictionary(1, false)?.len(), 3);
        assert_eq!(s.load_dictionary(1, true)?.len(), 4);
        assert_eq!(s.load_dictionary(3, true)?.len(), 3);
        Ok(())
    }
}
