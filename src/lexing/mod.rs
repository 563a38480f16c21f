//! Tokenizer for the Swalpa language

mod token;
mod tokenizer;

pub use token::*;
pub use tokenizer::{tokenize, tokenize_str, Tokens};
pub(crate) use tokenizer::is_escaped;
