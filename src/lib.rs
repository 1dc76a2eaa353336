#![allow(clippy::module_inception)]

use std::{fs, io, path::Path, sync::Arc};

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::{lexer::tokenize, tokens::TokenSet},
    scanner::scanner::{scan, CleanedText, ScanWarning},
};

pub mod display;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod scanner;

extern crate regex;

/// Byte offset into a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

/// Result of running both core passes over one source.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub cleaned: CleanedText,
    pub tokens: TokenSet,
}

pub fn analyze(source: &str, file: Option<String>) -> Analysis {
    let cleaned = scan(source, file);
    let tokens = tokenize(cleaned.as_str());

    Analysis { cleaned, tokens }
}

/// Reads a source file, sorting failures into the three kinds the CLI reports.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let display_path = path.to_string_lossy().to_string();
    debug!("reading source from {}", display_path);

    fs::read_to_string(path).map_err(|err| {
        let error_impl = match err.kind() {
            io::ErrorKind::NotFound => ErrorImpl::FileNotFound { path: display_path },
            io::ErrorKind::PermissionDenied => ErrorImpl::PermissionDenied { path: display_path },
            _ => ErrorImpl::Unexpected {
                path: display_path,
                message: err.to_string(),
            },
        };
        Error::new(error_impl)
    })
}

/// Returns the 1-based line number, the line text (with its newline) and the
/// byte offset of `position` within that line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


/// Renders a scan warning with a source excerpt pointing at its position.
pub fn display_warning(warning: &ScanWarning, source: &str) -> String {
    /*
        Warning: UnterminatedString (...)
        -> input.py
          |
        3 | s = "abc
          | ----^
    */

    let position = warning.get_position();
    let mut out = String::new();

    if let ErrorTip::None = warning.get_tip() {
        out.push_str(&format!("Warning: {}\n", warning.get_warning_name()));
    } else {
        out.push_str(&format!(
            "Warning: {} ({})\n",
            warning.get_warning_name(),
            warning.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text
        .get(removed_whitespace..line_pos)
        .map_or(0, |prefix| prefix.chars().count());
    let arrows = column + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

/// Strips leading spaces and tabs, returning the rest and the byte count removed.
fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}
