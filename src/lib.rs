//! A case-insensitive word list for spell checking.
//!
//! [`WordSet`] holds the words; [`lexer`] and [`pipeline`] split a document
//! into words and check each of them.

pub mod config;
pub mod error;
pub mod lexer;
pub mod pipeline;
pub mod word_set;

pub use error::{ConfigError, WordSetError};
pub use word_set::{hash, WordSet, BUCKETS, LENGTH};
