use std::io::BufRead;

use snafu::ResultExt;

use crate::error::{self, Result};

/// Source of numbered physical lines
pub trait Read {
    /// Read the next line, `None` once the underlying stream is exhausted
    fn next(&mut self) -> Result<Option<String>>;
    /// 1-based number of the line most recently returned by `next`
    fn line(&self) -> usize;
}

pub struct LineReader<R> {
    pub reader: R,
    pub line: usize,
    buffer: Vec<u8>,
}

impl<R> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> Read for LineReader<R> {
    fn next(&mut self) -> Result<Option<String>> {
        self.buffer.clear();
        let read = self
            .reader
            .read_until(b'\n', &mut self.buffer)
            .context(error::IoSnafu)?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(String::from_utf8_lossy(&self.buffer).into_owned()))
    }

    fn line(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod test {
    use super::{LineReader, Read};

    #[test]
    fn counts_lines() {
        let mut reader = LineReader::new("one\r\ntwo\n\nlast".as_bytes());
        assert_eq!(reader.next().unwrap().as_deref(), Some("one\r\n"));
        assert_eq!(reader.line(), 1);
        assert_eq!(reader.next().unwrap().as_deref(), Some("two\n"));
        assert_eq!(reader.next().unwrap().as_deref(), Some("\n"));
        assert_eq!(reader.next().unwrap().as_deref(), Some("last"));
        assert_eq!(reader.line(), 4);
        assert_eq!(reader.next().unwrap(), None);
        assert_eq!(reader.line(), 4);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut reader = LineReader::new(&b"k=\xff\n"[..]);
        assert_eq!(reader.next().unwrap().as_deref(), Some("k=\u{fffd}\n"));
    }
}
