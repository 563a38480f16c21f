// Types representing Swalpa elements, the kinds they come from, and errors

mod element;
mod error;
mod kind;

// Re-export all public symbols
pub use element::*;
pub use error::*;
pub use kind::*;
