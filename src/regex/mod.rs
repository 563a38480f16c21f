// Cached regular expressions

#[macro_use]
mod cache;
