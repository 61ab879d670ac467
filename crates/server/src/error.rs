//! Error types for loading content.

use std::path::PathBuf;

/// Errors that can occur while loading a content file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read the content file.
    #[error("failed to read content file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content file is not valid JSON for the expected layout.
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id `{id}`")]
    DuplicateId {
        /// The kind of record.
        kind: &'static str,
        /// The repeated id.
        id: String,
    },

    /// A category refers to a knowledge base that does not exist.
    #[error("category `{category}` refers to unknown knowledge base `{knowledge_base}`")]
    UnknownKnowledgeBase {
        category: String,
        knowledge_base: String,
    },

    /// An article refers to a category that does not exist.
    #[error("article `{article}` refers to unknown category `{category}`")]
    UnknownCategory { article: String, category: String },
}

/// A specialized Result type for content operations.
pub type Result<T> = std::result::Result<T, StoreError>;
