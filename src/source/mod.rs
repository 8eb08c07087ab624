//! Document source: loading host documents serialized as JSON.

mod options;
mod parser;

pub use options::{ErrorMode, ParseOptions};
pub use parser::DocumentParser;
