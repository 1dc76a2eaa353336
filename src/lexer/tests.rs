//! Unit tests for the lexer module.
//!
//! This module contains tests for token categorization including:
//! - Keywords and the keyword/identifier split
//! - Identifiers
//! - Single character operators and delimiters
//! - Integer literals
//! - Ordering and deduplication of each category

use proptest::prelude::*;

use super::{
    lexer::tokenize,
    tokens::{Category, TokenSet, KEYWORDS},
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("def return print if else while for include using namespace int cout endl");

    assert_eq!(
        tokens.tokens(Category::Keywords),
        vec![
            "cout", "def", "else", "endl", "for", "if", "include", "int", "namespace", "print",
            "return", "using", "while",
        ]
    );
    assert!(tokens.tokens(Category::Identifiers).is_empty());
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase");

    assert_eq!(
        tokens.tokens(Category::Identifiers),
        vec!["CamelCase", "_underscore", "bar", "baz_123", "foo"]
    );
    assert!(tokens.tokens(Category::Keywords).is_empty());
}

#[test]
fn test_tokenize_keyword_prefix_is_identifier() {
    let tokens = tokenize("define integer printf");

    assert!(tokens.tokens(Category::Keywords).is_empty());
    assert_eq!(
        tokens.tokens(Category::Identifiers),
        vec!["define", "integer", "printf"]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("a + b - c * d / e = f < g > h");

    assert_eq!(
        tokens.tokens(Category::Operators),
        vec!["*", "+", "-", "/", "<", "=", ">"]
    );
}

#[test]
fn test_tokenize_compound_operators_split() {
    let tokens = tokenize("a == b <= c >= d != e");

    assert_eq!(tokens.tokens(Category::Operators), vec!["<", "=", ">"]);
}

#[test]
fn test_tokenize_delimiters() {
    let tokens = tokenize("f(a, b)[0]{x; y: z}");

    assert_eq!(
        tokens.tokens(Category::Delimiters),
        vec!["(", ")", ",", ":", ";", "[", "]", "{", "}"]
    );
}

#[test]
fn test_tokenize_literals() {
    let tokens = tokenize("x = 42 + 7 - 3.14 + 0x1F + 42");

    assert_eq!(tokens.tokens(Category::Literals), vec!["14", "3", "42", "7"]);
    assert_eq!(tokens.tokens(Category::Identifiers), vec!["x"]);
}

#[test]
fn test_tokenize_digits_inside_identifier_not_literal() {
    let tokens = tokenize("var1 = 2");

    assert_eq!(tokens.tokens(Category::Literals), vec!["2"]);
    assert_eq!(tokens.tokens(Category::Identifiers), vec!["var1"]);
}

#[test]
fn test_tokenize_deduplicates() {
    let tokens = tokenize("int x; int y;");

    assert_eq!(tokens.tokens(Category::Keywords), vec!["int"]);
    assert_eq!(tokens.tokens(Category::Identifiers), vec!["x", "y"]);
    assert_eq!(tokens.tokens(Category::Delimiters), vec![";"]);
}

#[test]
fn test_tokenize_string_contents_are_matched() {
    let tokens = tokenize("print(\"hello world\")");

    assert_eq!(tokens.tokens(Category::Keywords), vec!["print"]);
    assert_eq!(tokens.tokens(Category::Identifiers), vec!["hello", "world"]);
}

#[test]
fn test_tokenize_cpp_snippet() {
    let source = "include <iostream>\nusing namespace std;\nint main() {\ncout << \"hi\" << endl;\nreturn 0;\n}";
    let tokens = tokenize(source);

    assert_eq!(
        tokens.tokens(Category::Keywords),
        vec!["cout", "endl", "include", "int", "namespace", "return", "using"]
    );
    assert_eq!(
        tokens.tokens(Category::Identifiers),
        vec!["hi", "iostream", "main", "std"]
    );
    assert_eq!(tokens.tokens(Category::Operators), vec!["<", ">"]);
    assert_eq!(
        tokens.tokens(Category::Delimiters),
        vec!["(", ")", ";", "{", "}"]
    );
    assert_eq!(tokens.tokens(Category::Literals), vec!["0"]);
}

#[test]
fn test_tokenize_empty() {
    let tokens = tokenize("");

    assert!(tokens.is_empty());
    assert_eq!(tokens, TokenSet::new());
    assert_eq!(tokens.iter().count(), 5);
}

#[test]
fn test_token_set_iter_order() {
    let tokens = tokenize("1 + x");
    let order = tokens.iter().map(|(category, _)| category).collect::<Vec<_>>();

    assert_eq!(order, Category::ALL.to_vec());
    assert!(tokens.contains(Category::Literals, "1"));
    assert!(!tokens.contains(Category::Identifiers, "1"));
}

#[test]
fn test_category_display() {
    let names = Category::ALL.iter().map(|c| c.to_string()).collect::<Vec<_>>();

    assert_eq!(
        names,
        vec!["Keywords", "Identifiers", "Operators", "Delimiters", "Literals"]
    );
}

proptest! {
    #[test]
    fn test_keywords_never_identifiers(
        words in prop::collection::vec(
            prop_oneof![
                prop::sample::select(KEYWORDS.to_vec()).prop_map(String::from),
                "[a-z_][a-z0-9_]{0,6}",
            ],
            0..12,
        )
    ) {
        let source = words.join(" ");
        let tokens = tokenize(&source);

        for keyword in KEYWORDS {
            prop_assert!(!tokens.contains(Category::Identifiers, keyword));
            if words.iter().any(|word| word == keyword) {
                prop_assert!(tokens.contains(Category::Keywords, keyword));
            }
        }
    }

    #[test]
    fn test_categories_strictly_ascending(source in "[a-z0-9 +=*/<>(){};:,\n-]{0,80}") {
        let tokens = tokenize(&source);

        for (_, list) in tokens.iter() {
            prop_assert!(list.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
