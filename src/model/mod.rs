//! The Swalpa object model: nested containers built from the token stream

mod builder;
mod container;

pub use builder::{build, ObjectModelBuilder};
pub use container::*;
