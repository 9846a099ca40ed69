mod line;
mod parser;
mod read;

pub use parser::*;
