//! TF-IDF ranking over a frozen index.
//!
//! Relevance of a document is the sum over plus-terms of
//! `tf(term, doc) * ln(N / df(term))`, where `tf` is the share of the document's
//! words equal to the term. Documents containing any minus-term are dropped.

use crate::config::{SearchConfig, ZeroRelevancePolicy};
use crate::index::{DocId, Document, InvertedIndex};
use crate::query::Query;
use crate::tokenizer::split_into_words;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Immutable, queryable index produced by [`crate::SearchServerBuilder::build`].
#[derive(Debug, Clone)]
pub struct SearchServer {
    stop_words: HashSet<String>,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServer {
    pub(crate) fn new(stop_words: HashSet<String>, index: InvertedIndex, config: SearchConfig) -> Self {
        Self { stop_words, index, config }
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    pub fn document_count(&self) -> usize { self.index.num_docs() }

    pub fn word_count(&self) -> usize { self.index.num_terms() }

    pub fn is_stop_word(&self, word: &str) -> bool { self.stop_words.contains(word) }

    pub fn documents_containing(&self, word: &str) -> Option<&BTreeSet<DocId>> {
        self.index.documents_containing(word)
    }

    pub fn document_words(&self, doc_id: DocId) -> Option<&[String]> {
        self.index.document_words(doc_id)
    }

    pub fn parse_query(&self, text: &str) -> Query {
        let mut query = Query::default();
        for word in split_into_words(text) {
            if !self.is_stop_word(&word) {
                query.push_word(word);
            }
        }
        query
    }

    /// `ln(N / df)` for an indexed word, `None` if no document contains it.
    pub fn idf(&self, word: &str) -> Option<f64> {
        let containing = self.index.documents_containing(word)?;
        Some((self.index.num_docs() as f64 / containing.len() as f64).ln())
    }

    /// Score every candidate document, unsorted and untruncated.
    pub fn find_all_documents(&self, query: &Query) -> Vec<Document> {
        if query.is_empty() {
            return Vec::new();
        }
        let word_idf: HashMap<&str, f64> = query
            .plus_words
            .iter()
            .filter_map(|word| self.idf(word).map(|idf| (word.as_str(), idf)))
            .collect();

        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        if !query.plus_words.is_empty() {
            for (doc_id, words) in self.index.documents() {
                let score = relevance.entry(doc_id).or_insert(0.0);
                for word in &query.plus_words {
                    let idf = word_idf.get(word.as_str()).copied().unwrap_or(0.0);
                    *score += term_frequency(word, words) * idf;
                }
            }
        }

        for word in &query.minus_words {
            if let Some(excluded) = self.index.documents_containing(word) {
                for doc_id in excluded {
                    relevance.remove(doc_id);
                }
            }
        }

        if self.config.zero_relevance == ZeroRelevancePolicy::Exclude {
            relevance.retain(|_, score| *score > 0.0);
        }

        relevance
            .into_iter()
            .map(|(id, relevance)| Document { id, relevance })
            .collect()
    }

    /// Best matches for a raw query string: descending relevance, ties by ascending id,
    /// at most `max_results` entries.
    pub fn find_top_documents(&self, raw_query: &str) -> Vec<Document> {
        let query = self.parse_query(raw_query);
        let mut matched = self.find_all_documents(&query);
        let total_hits = matched.len();

        matched.sort_by(|a, b| b.relevance.total_cmp(&a.relevance).then_with(|| a.id.cmp(&b.id)));
        matched.truncate(self.config.max_results);

        tracing::debug!(
            plus = query.plus_words.len(),
            minus = query.minus_words.len(),
            total_hits,
            returned = matched.len(),
            "query evaluated"
        );
        matched
    }
}

fn term_frequency(word: &str, doc_words: &[String]) -> f64 {
    if doc_words.is_empty() {
        return 0.0;
    }
    let count = doc_words.iter().filter(|w| w.as_str() == word).count();
    count as f64 / doc_words.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchServerBuilder;

    fn server(docs: &[&str], config: SearchConfig) -> SearchServer {
        let mut builder = SearchServerBuilder::new().with_config(config);
        builder.set_stop_words("a the");
        for doc in docs {
            builder.add_next_document(doc);
        }
        builder.build()
    }

    #[test]
    fn term_frequency_counts_duplicates() {
        let words: Vec<String> = ["x", "y", "x", "z"].iter().map(|s| s.to_string()).collect();
        assert_eq!(term_frequency("x", &words), 0.5);
        assert_eq!(term_frequency("q", &words), 0.0);
        assert_eq!(term_frequency("x", &[]), 0.0);
    }

    #[test]
    fn parse_query_checks_stop_words_before_stripping_the_marker() {
        let s = server(&["cat"], SearchConfig::default());
        let query = s.parse_query("the cat -a -dog");
        assert_eq!(query.plus_words, vec!["cat"]);
        assert_eq!(query.minus_words, vec!["a", "dog"]);

        let mut builder = SearchServerBuilder::new();
        builder.set_stop_words("-a the");
        let query = builder.build().parse_query("the cat -a -dog");
        assert_eq!(query.plus_words, vec!["cat"]);
        assert_eq!(query.minus_words, vec!["dog"]);
    }

    #[test]
    fn idf_is_higher_for_rarer_words() {
        let s = server(&["cat dog", "cat", "cat bird"], SearchConfig::default());
        let cat = s.idf("cat").unwrap();
        let dog = s.idf("dog").unwrap();
        assert_eq!(cat, 0.0);
        assert!(dog > cat);
        assert_eq!(s.idf("fish"), None);
    }

    #[test]
    fn empty_plus_terms_score_nothing() {
        let s = server(&["cat", "dog"], SearchConfig::default());
        assert!(s.find_top_documents("-cat").is_empty());
        assert!(s.find_top_documents("-cat -dog").is_empty());
        assert!(s.find_top_documents("the").is_empty());
    }

    #[test]
    fn unknown_plus_term_still_registers_documents_when_included() {
        let s = server(&["cat", "dog"], SearchConfig::default());
        let found = s.find_top_documents("fish");
        assert_eq!(found, vec![Document { id: 0, relevance: 0.0 }, Document { id: 1, relevance: 0.0 }]);

        let s = server(
            &["cat", "dog"],
            SearchConfig { zero_relevance: ZeroRelevancePolicy::Exclude, ..SearchConfig::default() },
        );
        assert!(s.find_top_documents("fish").is_empty());
    }

    #[test]
    fn empty_query_is_one_empty_plus_term() {
        let s = server(&["cat", "dog"], SearchConfig::default());
        assert_eq!(s.parse_query("").plus_words, vec![""]);
        let found = s.find_top_documents("");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|d| d.relevance == 0.0));
    }

    #[test]
    fn ties_break_by_ascending_id() {
        let s = server(&["dog", "cat", "bird", "cat", "cat"], SearchConfig::default());
        let ids: Vec<DocId> = s.find_top_documents("cat").iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 0, 2]);
    }

    #[test]
    fn find_all_documents_is_untruncated_in_id_order() {
        let s = server(&["cat dog", "dog cat cat", "cat", "bird cat", "cat cat", "dog", "cat", "cat fish"], SearchConfig::default());
        let query = s.parse_query("cat -dog");
        let found = s.find_all_documents(&query);
        let ids: Vec<DocId> = found.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 6, 7]);
        assert!(s.find_all_documents(&Query::default()).is_empty());

        let s = server(&["cat"; 7], SearchConfig::default());
        let ids: Vec<DocId> = s.find_all_documents(&s.parse_query("cat")).iter().map(|d| d.id).collect();
        assert_eq!(ids, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn max_results_is_respected() {
        let docs = ["cat"; 8];
        let s = server(&docs, SearchConfig { max_results: 3, ..SearchConfig::default() });
        assert_eq!(s.config().max_results, 3);
        assert_eq!(s.find_top_documents("cat").len(), 3);
        let s = server(&docs, SearchConfig::default());
        assert_eq!(s.find_top_documents("cat").len(), 5);
    }

    #[test]
    fn bare_minus_excludes_documents_with_empty_words() {
        let s = server(&["cat  dog", "cat dog"], SearchConfig::default());
        let ids: Vec<DocId> = s.find_top_documents("dog -").iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
