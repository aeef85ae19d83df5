use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

pub type DocId = u32;

/// Significant digits used when rendering a relevance score as text.
pub const RELEVANCE_PRECISION: usize = 6;

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "document_id")]
    pub id: DocId,
    pub relevance: f64,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {} }}",
            self.id,
            format_relevance(self.relevance)
        )
    }
}

/// Render a score with [`RELEVANCE_PRECISION`] significant digits, `%g` style:
/// fixed notation for moderate exponents, scientific otherwise, trailing zeros dropped.
pub fn format_relevance(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = RELEVANCE_PRECISION - 1;
    let scientific = format!("{:.*e}", digits, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some(parts) => parts,
        None => return scientific,
    };
    let exponent: i32 = exponent.parse().unwrap_or_default();
    if exponent < -4 || exponent >= RELEVANCE_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Word → documents map plus the per-document word lists it was built from.
///
/// Both sides are only ever extended together through [`InvertedIndex::insert`].
#[derive(Debug, Default, Clone)]
pub struct InvertedIndex {
    word_to_documents: HashMap<String, BTreeSet<DocId>>,
    document_words: BTreeMap<DocId, Vec<String>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Register `doc_id` and append `words` to it. The id is recorded even when `words` is empty.
    pub fn insert<I>(&mut self, doc_id: DocId, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        let doc_words = self.document_words.entry(doc_id).or_default();
        for word in words {
            self.word_to_documents.entry(word.clone()).or_default().insert(doc_id);
            doc_words.push(word);
        }
    }

    /// Number of distinct ingested document ids.
    pub fn num_docs(&self) -> usize { self.document_words.len() }

    /// Number of distinct indexed words.
    pub fn num_terms(&self) -> usize { self.word_to_documents.len() }

    pub fn documents_containing(&self, word: &str) -> Option<&BTreeSet<DocId>> {
        self.word_to_documents.get(word)
    }

    pub fn document_words(&self, doc_id: DocId) -> Option<&[String]> {
        self.document_words.get(&doc_id).map(Vec::as_slice)
    }

    /// Documents in ascending id order with their word lists.
    pub fn documents(&self) -> impl Iterator<Item = (DocId, &[String])> + '_ {
        self.document_words.iter().map(|(id, words)| (*id, words.as_slice()))
    }
}
