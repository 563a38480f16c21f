#[macro_use]
mod regex;

pub mod formatting;
pub mod language;
pub mod lexing;
pub mod library;
pub mod model;
pub mod parsing;
pub mod rendering;
pub mod templating;
pub mod tree;
