mod document;
mod section;

pub use document::*;
pub use section::*;
