use crate::config::SearchConfig;
use crate::index::{DocId, InvertedIndex};
use crate::search::SearchServer;
use crate::tokenizer::split_into_words;
use std::collections::HashSet;

/// Accumulates stop words and documents, then freezes into a [`SearchServer`].
#[derive(Debug, Default)]
pub struct SearchServerBuilder {
    stop_words: HashSet<String>,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchServerBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Register every space-separated word of `text` as a stop word.
    ///
    /// Stop words are applied at ingestion time: documents added earlier keep their words.
    pub fn set_stop_words(&mut self, text: &str) {
        if self.index.num_docs() > 0 {
            tracing::warn!(num_docs = self.index.num_docs(), "stop words registered after documents were ingested");
        }
        self.stop_words.extend(split_into_words(text));
    }

    /// Index `text` under `doc_id`. Ids are taken as given; callers keep them sequential.
    pub fn add_document(&mut self, doc_id: DocId, text: &str) {
        let words: Vec<String> = split_into_words(text)
            .into_iter()
            .filter(|word| !self.stop_words.contains(word))
            .collect();
        tracing::debug!(doc_id, num_words = words.len(), "ingested document");
        self.index.insert(doc_id, words);
    }

    /// The id the next sequentially ingested document should receive, `None` once
    /// `DocId::MAX` has been ingested.
    pub fn next_document_id(&self) -> Option<DocId> {
        match self.index.documents().last() {
            Some((id, _)) => id.checked_add(1),
            None => Some(0),
        }
    }

    /// Index `text` under [`Self::next_document_id`] and return that id.
    /// Nothing is ingested when the id space is exhausted.
    pub fn add_next_document(&mut self, text: &str) -> Option<DocId> {
        let Some(doc_id) = self.next_document_id() else {
            tracing::warn!("document id space exhausted, document dropped");
            return None;
        };
        self.add_document(doc_id, text);
        Some(doc_id)
    }

    pub fn build(self) -> SearchServer {
        tracing::info!(
            num_docs = self.index.num_docs(),
            num_terms = self.index.num_terms(),
            num_stop_words = self.stop_words.len(),
            "index built"
        );
        SearchServer::new(self.stop_words, self.index, self.config)
    }
}
