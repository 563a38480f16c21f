// Built in element kinds

mod elements;

// Re-export all public symbols
pub use elements::*;

use crate::language::Registry;

/// A registry holding every built in element kind.
pub fn standard() -> Registry {
    Registry::new()
        .with(Div)
        .with(Navbar)
        .with(Header)
        .with(Link)
        .with(Branding)
        .with(Form)
        .with(Button)
        .with(Paragraph)
}
