use std::{fmt::Display, sync::Arc};

use tracing::{debug, warn};

use crate::{errors::errors::ErrorTip, Position};

/// Flags carried from one character to the next.
///
/// `string_delimiter` is `Some` exactly while `in_string` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerState {
    pub in_string: bool,
    pub string_delimiter: Option<char>,
    pub escape_pending: bool,
    pub in_comment: bool,
    pub current_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    UnterminatedString { opened_at: Position },
}

impl ScanWarning {
    pub fn get_position(&self) -> &Position {
        match self {
            ScanWarning::UnterminatedString { opened_at } => opened_at,
        }
    }

    pub fn get_warning_name(&self) -> &str {
        match self {
            ScanWarning::UnterminatedString { .. } => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            ScanWarning::UnterminatedString { .. } => {
                ErrorTip::Suggestion(String::from("string opened here is never closed"))
            }
        }
    }
}

/// Source text with comments and blank lines removed and every line trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedText {
    text: String,
    warning: Option<ScanWarning>,
}

impl CleanedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn warning(&self) -> Option<&ScanWarning> {
        self.warning.as_ref()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl Display for CleanedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

pub struct Scanner {
    state: ScannerState,
    lines: Vec<String>,
    string_opened_at: u32,
    file: Arc<String>,
}

impl Scanner {
    pub fn new(file: Option<String>) -> Scanner {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Scanner {
            state: ScannerState::default(),
            lines: vec![],
            string_opened_at: 0,
            file: file_name,
        }
    }

    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// Feeds one character located at byte offset `pos`.
    pub fn advance(&mut self, pos: usize, c: char) {
        if c == '\n' && !self.state.in_string {
            self.flush_line();
            self.state.in_comment = false;
            return;
        }

        if self.state.in_comment {
            return;
        }

        let state = &mut self.state;

        if c == '\\' && state.in_string {
            state.escape_pending = !state.escape_pending;
        } else if (c == '"' || c == '\'') && !state.escape_pending {
            match state.string_delimiter {
                Some(delimiter) if delimiter == c => {
                    state.in_string = false;
                    state.string_delimiter = None;
                }
                // A different quote inside an open string is plain content.
                Some(_) => {}
                None => {
                    state.in_string = true;
                    state.string_delimiter = Some(c);
                    self.string_opened_at = pos as u32;
                }
            }
        } else if c == '#' && !state.in_string {
            state.in_comment = true;
            return;
        } else if c == '/' && !state.in_string && state.current_line.ends_with('/') {
            state.current_line.pop();
            state.in_comment = true;
            return;
        }

        state.current_line.push(c);

        if state.escape_pending && c != '\\' {
            state.escape_pending = false;
        }
    }

    fn flush_line(&mut self) {
        let line = std::mem::take(&mut self.state.current_line);
        let trimmed = line.trim();

        if !trimmed.is_empty() {
            self.lines.push(trimmed.to_string());
        }
    }

    pub fn finish(mut self) -> CleanedText {
        if !self.state.in_comment {
            self.flush_line();
        }

        // Output is left exactly as scanned; the open string is only reported.
        let warning = if self.state.in_string {
            let opened_at = Position(self.string_opened_at, Arc::clone(&self.file));
            warn!(
                "unterminated {:?} string opened at byte {} of {}",
                self.state.string_delimiter.unwrap_or('"'),
                opened_at.0,
                opened_at.1
            );
            Some(ScanWarning::UnterminatedString { opened_at })
        } else {
            None
        };

        debug!("scan produced {} lines", self.lines.len());

        CleanedText {
            text: self.lines.join("\n"),
            warning,
        }
    }
}

#[tracing::instrument(level = "debug", skip(source))]
pub fn scan(source: &str, file: Option<String>) -> CleanedText {
    let mut scanner = Scanner::new(file);

    for (pos, c) in source.char_indices() {
        scanner.advance(pos, c);
    }

    scanner.finish()
}

/// Cleans an unnamed source and returns only the text.
pub fn clean(source: &str) -> String {
    scan(source, None).into_string()
}
