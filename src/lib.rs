#![allow(clippy::result_large_err)]
mod ast;
mod error;
mod load;
mod syn;

pub use ast::*;
pub use load::*;
pub use syn::*;

pub use error::{Error, Partial, Result};

use std::io::{BufRead, BufReader, Read};

/// Parse an INI document from any byte stream
pub fn parse<R>(reader: R) -> std::result::Result<Document, Partial>
where
    R: Read,
{
    parse_buffered(BufReader::new(reader))
}

/// Parse an INI document from a reader that is already buffered
pub fn parse_buffered<R>(reader: R) -> std::result::Result<Document, Partial>
where
    R: BufRead,
{
    Parser::new(reader).parse()
}

/// Parse a simple inline string
pub fn from_str(input: &str) -> std::result::Result<Document, Partial> {
    parse_buffered(input.as_bytes())
}
