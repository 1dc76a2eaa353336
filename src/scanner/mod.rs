//! Comment and string aware line cleaning.
//!
//! The scanner makes one forward pass over the raw source and produces the
//! cleaned text every later stage works on:
//!
//! - `#` and `//` line comments are removed
//! - comment markers inside `"..."` or `'...'` strings are kept
//! - each line is trimmed and blank lines are dropped

pub mod scanner;
