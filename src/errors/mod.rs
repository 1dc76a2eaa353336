//! Error types and error handling for the analyzer.
//!
//! The scanner and tokenizer are total and never fail. Errors only come from
//! the collaborators around them:
//!
//! - Reading the source file (not found, permission denied, anything else)
//! - Reading the file name from the interactive prompt
//! - Rendering the token report

pub mod errors;
