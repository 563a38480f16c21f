// Re-export all public symbols
pub use printer::*;
pub use syntax::*;

mod printer;
mod syntax;
