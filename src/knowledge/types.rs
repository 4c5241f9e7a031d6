use serde::{Deserialize, Serialize};

/// Stable topic identifier, e.g. `calculo_cota`.
pub type TopicId = String;

/// A pre-written legal answer and the keywords that select it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    /// Human-readable label; informational only.
    pub question: String,
    /// Lowercase substrings matched against the lowercased query.
    pub keywords: Vec<String>,
    /// Citations already embedded in `answer`; kept for listings.
    #[serde(default)]
    pub legal_refs: Vec<String>,
    /// Markdown returned verbatim on a match.
    pub answer: String,
}

impl Topic {
    /// Number of keywords occurring as substrings of `query_lower`.
    pub fn score(&self, query_lower: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| query_lower.contains(k.as_str()))
            .count()
    }
}
