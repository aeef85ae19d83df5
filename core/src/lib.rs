pub mod builder;
pub mod config;
pub mod error;
pub mod index;
pub mod input;
pub mod query;
pub mod search;
pub mod tokenizer;

pub use builder::SearchServerBuilder;
pub use config::{SearchConfig, ZeroRelevancePolicy, MAX_RESULT_DOCUMENT_COUNT};
pub use error::InputError;
pub use index::{format_relevance, DocId, Document, InvertedIndex};
pub use input::{read_search_input, SearchInput};
pub use query::Query;
pub use search::SearchServer;
