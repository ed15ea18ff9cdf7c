//! The prelude

#[doc(inline)]
pub use crate::util::{err, get_reader, get_writer, Error, Result};

#[doc(inline)]
pub use std::io::{BufRead, Read, Write};
