use snafu::Snafu;
use std::fmt;

use crate::ast::Document;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("invalid INI syntax on line {line}: {text}"))]
    Syntax {
        /// 1-based number of the offending line
        line: usize,
        /// Offending line without leading or trailing whitespace
        text: String,
    },
    #[snafu(display("failed to read INI input: {source}"))]
    Io { source: std::io::Error },
}

/// Returned when a parse stops early. Carries whatever was built from
/// the lines before the failure alongside the error that stopped it.
#[derive(Debug)]
pub struct Partial {
    document: Document,
    error: Error,
}

impl Partial {
    pub(crate) fn new(document: Document, error: Error) -> Self {
        Self { document, error }
    }

    /// Document as it stood when parsing stopped
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn error(&self) -> &Error {
        &self.error
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn into_parts(self) -> (Document, Error) {
        (self.document, self.error)
    }
}

impl fmt::Display for Partial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl std::error::Error for Partial {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod test {
    use std::error::Error as _;

    use super::{Error, Partial};
    use crate::ast::Document;

    #[test]
    fn syntax_display() {
        let error = Error::Syntax {
            line: 7,
            text: "oops".to_string(),
        };
        assert_eq!(error.to_string(), "invalid INI syntax on line 7: oops");
    }

    #[test]
    fn partial_delegates_to_error() {
        let mut document = Document::new();
        document.section("kept");
        let partial = Partial::new(
            document,
            Error::Syntax {
                line: 2,
                text: "badline".to_string(),
            },
        );
        assert_eq!(partial.to_string(), "invalid INI syntax on line 2: badline");
        assert!(partial.source().is_some());
        let (document, error) = partial.into_parts();
        assert!(document.contains_section("kept"));
        assert!(matches!(error, Error::Syntax { line: 2, .. }));
    }

    #[test]
    fn io_exposes_source() {
        let error = Error::Io {
            source: std::io::Error::new(std::io::ErrorKind::Other, "boom"),
        };
        assert_eq!(error.to_string(), "failed to read INI input: boom");
        assert!(error.source().is_some());
    }
}
