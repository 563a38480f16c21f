// Re-export all public symbols
pub use html::*;
pub use terminal::*;

mod html;
mod terminal;
