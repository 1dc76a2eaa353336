use regex::Regex;
use lazy_static::lazy_static;
use tracing::debug;

use crate::MK_PATTERN;

use super::tokens::{Category, TokenSet, KEYWORDS, RESERVED_LOOKUP};

pub type MatchHandler = fn(&mut Lexer, &CategoryPattern);

pub struct CategoryPattern {
    pub category: Category,
    pub regex: Regex,
    pub handler: MatchHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<CategoryPattern> = vec![
        MK_PATTERN!(Category::Keywords, format!(r"\b({})\b", KEYWORDS.join("|"))),
        MK_PATTERN!(Category::Identifiers, r"\b[a-zA-Z_][a-zA-Z0-9_]*\b", identifier_handler),
        MK_PATTERN!(Category::Operators, r"[+=\-*/<>]"),
        MK_PATTERN!(Category::Delimiters, r"[()\[\]{};:,]"),
        MK_PATTERN!(Category::Literals, r"\b\d+\b"),
    ];
}

pub struct Lexer<'a> {
    source: &'a str,
    tokens: TokenSet,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            tokens: TokenSet::new(),
        }
    }

    pub fn push(&mut self, category: Category, token: &str) {
        self.tokens.insert(category, token);
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn finish(self) -> TokenSet {
        self.tokens
    }
}

pub fn collect_handler(lexer: &mut Lexer, pattern: &CategoryPattern) {
    for matched in pattern.regex.find_iter(lexer.source()) {
        lexer.push(pattern.category, matched.as_str());
    }
}

fn identifier_handler(lexer: &mut Lexer, pattern: &CategoryPattern) {
    for matched in pattern.regex.find_iter(lexer.source()) {
        if RESERVED_LOOKUP.contains(matched.as_str()) {
            continue;
        }
        lexer.push(pattern.category, matched.as_str());
    }
}

#[tracing::instrument(level = "debug", skip(source))]
pub fn tokenize(source: &str) -> TokenSet {
    let mut lex = Lexer::new(source);

    for pattern in PATTERNS.iter() {
        (pattern.handler)(&mut lex, pattern);
        debug!(
            "{}: {} distinct tokens",
            pattern.category,
            lex.tokens.tokens(pattern.category).len()
        );
    }

    lex.finish()
}
