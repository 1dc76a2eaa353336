//! Rendering of a token set for the terminal.

use clap::ValueEnum;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn render(tokens: &TokenSet, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Table => Ok(render_table(tokens)),
        OutputFormat::Json => render_json(tokens),
    }
}

/// Two column category/tokens table, one row per category in report order.
pub fn render_table(tokens: &TokenSet) -> String {
    let mut out = String::from("Category\t\tTokens\n");
    out.push_str(&"-".repeat(50));
    out.push('\n');

    for (category, list) in tokens.iter() {
        out.push_str(&format!("{}\t\t{}\n", category, list.join(", ")));
    }

    out
}

pub fn render_json(tokens: &TokenSet) -> Result<String, Error> {
    serde_json::to_string_pretty(tokens).map_err(|e| {
        Error::new(ErrorImpl::RenderError {
            message: e.to_string(),
        })
    })
}
