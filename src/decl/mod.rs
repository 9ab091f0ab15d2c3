//! Declarative stepper descriptions: tokenizer and parser.

pub mod parser;
pub mod tokenizer;

pub use parser::{parse_config, ParseError, WIDGET_NAME};
