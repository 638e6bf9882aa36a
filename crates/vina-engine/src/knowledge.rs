//! In-memory fact store with naive token-overlap retrieval

use regex::Regex;
use std::fmt;
use vina_domain::Evidence;

/// Unique identifier for a stored fact (UUIDv4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactId(uuid::Uuid);

impl FactId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for FactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored fact: a statement with supporting evidence and a weight
///
/// Facts are immutable once added and live only as long as the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Fact {
    /// Unique identifier
    pub id: FactId,
    /// The fact statement
    pub statement: String,
    /// Supporting evidence
    pub evidence: Vec<Evidence>,
    /// Fact weight (carried but not used for ranking)
    pub weight: f64,
}

/// Append-only in-memory fact store
///
/// Retrieval is a crude recall-biased match: the query is tokenized on
/// non-word boundaries and any single-token case-insensitive substring
/// overlap with a fact's statement qualifies the fact as a hit. There is
/// no ranking, no relevance scoring, and no stop-word filtering.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    facts: Vec<Fact>,
    token_split: Regex,
}

impl KnowledgeBase {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            facts: Vec::new(),
            token_split: Regex::new(r"\W+").expect("token split pattern"),
        }
    }

    /// Append a fact with a freshly generated identifier
    ///
    /// No deduplication and no indexing.
    pub fn add(&mut self, statement: impl Into<String>, evidence: Vec<Evidence>, weight: f64) -> FactId {
        let id = FactId::new();
        self.facts.push(Fact {
            id,
            statement: statement.into(),
            evidence,
            weight,
        });
        id
    }

    /// Return every fact whose statement contains any query token as a
    /// case-insensitive substring, in insertion order
    pub fn query(&self, text: &str) -> Vec<&Fact> {
        let tokens: Vec<String> = self
            .token_split
            .split(text)
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect();

        self.facts
            .iter()
            .filter(|f| {
                let statement = f.statement.to_lowercase();
                tokens.iter().any(|tok| statement.contains(tok.as_str()))
            })
            .collect()
    }

    /// Number of stored facts
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}
