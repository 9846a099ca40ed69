use std::fs::File;
use std::path::Path;

use log::debug;
use snafu::ResultExt;

use crate::ast::Document;
use crate::error::{self, Partial};

/// Read and parse an INI file from disk. A file that cannot be opened is
/// reported as an I/O error alongside an empty document.
pub fn load<P>(path: P) -> std::result::Result<Document, Partial>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!("loading {}", path.display());
    let file = File::open(path)
        .context(error::IoSnafu)
        .map_err(|e| Partial::new(Document::new(), e))?;
    crate::parse(file)
}
