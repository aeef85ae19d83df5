use serde::{Deserialize, Serialize};

/// Default cap on the number of ranked documents returned for a query.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// What to do with documents whose accumulated relevance is exactly zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroRelevancePolicy {
    /// Every ingested document is scored once the query has a plus-term, so documents
    /// matching none of them still rank (last) with relevance 0.
    #[default]
    Include,
    /// Only documents with a positive score are returned.
    Exclude,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub max_results: usize,
    #[serde(default)]
    pub zero_relevance: ZeroRelevancePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_results: MAX_RESULT_DOCUMENT_COUNT, zero_relevance: ZeroRelevancePolicy::default() }
    }
}
