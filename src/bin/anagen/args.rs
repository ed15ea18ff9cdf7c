use crate::globals;
use anagen::prelude::*;
use clap::ArgAction;

#[macro_export]
macro_rules! arg {
    ($a:expr,$b:expr,$c:expr,$d:expr) => {
        args::ArgSpec { name: $a, short: $b, value: $c, help: $d }
    };
}

#[derive(Debug)]
pub struct ProgSpec {
    pub help: &'static str,
    pub author: &'static str,
    pub version: &'static str,
}

/// return current version string
pub fn version() -> String {
    format!(
        "{}.{}.{}{}",
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR"),
        env!("CARGO_PKG_VERSION_PATCH"),
        option_env!("CARGO_PKG_VERSION_PRE").unwrap_or("")
    )
}
impl ProgSpec {
    pub fn new(help: &'static str) -> Self {
        Self { help, author: "avjewe@gmail.com", version: env!("CARGO_PKG_VERSION") }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub value: &'static str,
    pub help: &'static str,
}

#[derive(Debug)]
pub struct ArgValue {
    pub name: String,
    pub value: String,
    pub index: usize,
}

impl ArgValue {
    pub fn new(name: &str, value: &str, index: usize) -> Self {
        Self { name: name.to_string(), value: value.to_string(), index }
    }
    /// value as a whole number
    pub fn to_usize(&self) -> Result<usize> {
        match self.value.parse::<usize>() {
            Ok(n) => Ok(n),
            Err(_) => err!("--{} must be a whole number, not '{}'", self.name, self.value),
        }
    }
}

pub fn add_arg(a: clap::Command, x: &ArgSpec) -> clap::Command {
    let mut b = clap::Arg::new(x.name);
    if let Some(ch) = x.short.chars().next() {
        b = b.short(ch);
    }
    b = b.long(x.name).help(x.help);
    if x.value.is_empty() {
        b = b.action(ArgAction::Append).num_args(0).default_missing_value("present");
    } else {
        b = b.value_name(x.value).action(ArgAction::Append);
    }
    a.arg(b)
}

pub fn get_arg(m: &clap::ArgMatches, x: &ArgSpec, v: &mut Vec<ArgValue>) {
    if let Some(arg) = m.get_many::<String>(x.name) {
        let ind: Vec<usize> = m.indices_of(x.name).map(|i| i.collect()).unwrap_or_default();
        for (i, val) in arg.enumerate() {
            let index = ind.get(i).copied().unwrap_or_default();
            if x.value.is_empty() {
                v.push(ArgValue::new(x.name, "", index));
            } else {
                v.push(ArgValue::new(x.name, val, index));
            }
        }
    }
}

/// Parse the command line for one subcommand.
/// Global args are consumed into `glob`, the rest are returned in command line order.
pub fn parse(
    prog: &ProgSpec,
    spec: &[ArgSpec],
    argv: &[String],
    glob: &mut globals::Settings,
) -> Result<Vec<ArgValue>> {
    let mut a = clap::Command::new("anagen")
        .version(prog.version)
        .author(prog.author)
        .about(prog.help);

    for x in spec {
        a = add_arg(a, x);
    }
    for x in globals::global_args() {
        a = add_arg(a, x);
    }
    let m = a.get_matches_from(argv);
    let mut v: Vec<ArgValue> = Vec::new();
    for x in globals::global_args() {
        get_arg(&m, x, &mut v);
    }
    glob.consume(&v)?;
    v.clear();
    for x in spec {
        get_arg(&m, x, &mut v);
    }
    v.sort_by(|a, b| a.index.cmp(&b.index));
    Ok(v)
}
