use lazy_static::lazy_static;
use serde::Serialize;
use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    fmt::Display,
};

pub const KEYWORDS: [&str; 13] = [
    "def",
    "return",
    "print",
    "if",
    "else",
    "while",
    "for",
    "include",
    "using",
    "namespace",
    "int",
    "cout",
    "endl",
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = KEYWORDS.iter().copied().collect();
}

/// Token categories, declared in report order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
pub enum Category {
    Keywords,
    Identifiers,
    Operators,
    Delimiters,
    Literals,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Keywords,
        Category::Identifiers,
        Category::Operators,
        Category::Delimiters,
        Category::Literals,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Keywords => "Keywords",
            Category::Identifiers => "Identifiers",
            Category::Operators => "Operators",
            Category::Delimiters => "Delimiters",
            Category::Literals => "Literals",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Distinct matched strings per category, each kept in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSet {
    categories: BTreeMap<Category, BTreeSet<String>>,
}

impl Default for TokenSet {
    fn default() -> Self {
        TokenSet {
            categories: Category::ALL
                .into_iter()
                .map(|category| (category, BTreeSet::new()))
                .collect(),
        }
    }
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, token: &str) -> bool {
        self.categories
            .entry(category)
            .or_default()
            .insert(token.to_string())
    }

    pub fn get(&self, category: Category) -> impl Iterator<Item = &str> {
        self.categories
            .get(&category)
            .into_iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
    }

    pub fn tokens(&self, category: Category) -> Vec<&str> {
        self.get(category).collect()
    }

    pub fn contains(&self, category: Category, token: &str) -> bool {
        self.categories
            .get(&category)
            .is_some_and(|tokens| tokens.contains(token))
    }

    /// Iterates categories in report order, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Vec<&str>)> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.tokens(category)))
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(BTreeSet::is_empty)
    }
}
