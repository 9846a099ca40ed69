use std::io::BufRead;

use log::{debug, trace};

use super::line::{classify, Line};
use super::read::{LineReader, Read};
use crate::ast::Document;
use crate::error::{self, Partial, Result};

/// Line-oriented INI parser. Stops at the first line that is neither blank,
/// a comment, an assignment nor a section header.
pub struct Parser<R> {
    lines: LineReader<R>,
    section: String,
    document: Document,
}

impl<R: BufRead> Parser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineReader::new(reader),
            section: String::new(),
            document: Document::new(),
        }
    }

    /// Consume the whole input. On failure the document built so far is
    /// returned inside the [`Partial`].
    pub fn parse(mut self) -> std::result::Result<Document, Partial> {
        match self.read_lines() {
            Ok(()) => Ok(self.document),
            Err(e) => Err(Partial::new(self.document, e)),
        }
    }

    fn read_lines(&mut self) -> Result<()> {
        while let Some(raw) = self.lines.next()? {
            self.line(raw.trim())?;
        }
        Ok(())
    }

    fn line(&mut self, text: &str) -> Result<()> {
        let line = self.lines.line();
        match classify(text) {
            Some(Line::Blank | Line::Comment) => {}
            Some(Line::Assign { key, value }) => {
                trace!("line {line}: [{}] {key} = {value}", self.section);
                self.document.section(&self.section).insert(key, value);
            }
            Some(Line::Header(name)) => {
                debug!("line {line}: entering section [{name}]");
                self.section = name.to_string();
                // Headers without keys still produce a section
                self.document.section(name);
            }
            None => {
                debug!("line {line}: invalid syntax {text:?}");
                return error::SyntaxSnafu { line, text }.fail();
            }
        }
        Ok(())
    }
}
