use std::io;
use thiserror::Error;

use crate::types::*;

#[derive(Error, Debug)]
pub enum LadderError {
    /// The vocabulary contains the same word twice
    #[error("duplicate word in vocabulary: '{word}' occurs at both {first} and {second}")]
    DuplicateWord {
        word: String,
        first: WordId,
        second: WordId,
    },

    /// A word that can not be stored one per line
    #[error("invalid word in vocabulary at {id}: {word:?} contains a line break")]
    InvalidWord { word: String, id: WordId },

    /// A graph file (or graph/vocabulary pair) is truncated or inconsistent
    #[error("corrupt graph: {reason}")]
    CorruptGraph { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A word-level query named a word that is not in the vocabulary
    #[error("word not in vocabulary: '{0}'")]
    UnknownWord(String),

    /// An edge without its reverse edge (or a self-loop when both are equal)
    #[error("asymmetric edge: {from} -> {to} has no reverse")]
    AsymmetricEdge { from: WordId, to: WordId },

    #[error("vocabulary of {0} words does not fit 32-bit identifiers")]
    VocabularyTooLarge(usize),
}

impl LadderError {
    pub fn corrupt(reason: impl Into<String>) -> Self {
        LadderError::CorruptGraph {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LadderError>;
