//! Token categorization for cleaned source text.
//!
//! The lexer runs one regex search per category over the whole cleaned text
//! and buckets the matches:
//!
//! - Keywords from a fixed vocabulary
//! - Identifiers, minus anything that is a keyword
//! - Single character operators and delimiters
//! - Integer literals

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
