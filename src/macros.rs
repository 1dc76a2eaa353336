//! Utility macros for the analyzer.
//!
//! - `MK_PATTERN!` - Creates a CategoryPattern for the lexer pattern table
//!
//! These keep the pattern table in the lexer to one line per category.

/// Creates a CategoryPattern.
///
/// # Arguments
///
/// * `$category` - The Category the matches are collected into
/// * `$regex` - The pattern source, searched over the whole text
/// * `$handler` - Optional handler; defaults to collecting every match
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!(Category::Literals, r"\b\d+\b")
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($category:expr, $regex:expr) => {
        $crate::MK_PATTERN!($category, $regex, $crate::lexer::lexer::collect_handler)
    };
    ($category:expr, $regex:expr, $handler:expr) => {
        $crate::lexer::lexer::CategoryPattern {
            category: $category,
            regex: regex::Regex::new(&$regex).unwrap(),
            handler: $handler,
        }
    };
}
