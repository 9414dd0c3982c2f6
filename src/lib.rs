//! # bayes-text
//!
//! A supervised text classifier built on Naive Bayes over a bag-of-words
//! representation.
//!
//! ## Features
//!
//! - Fixed, ordered category sets with deterministic tie-breaking
//! - Incremental training from raw text or pre-tokenized bags of words
//! - Pruning of high-frequency noise tokens between training rounds
//! - Pluggable text analysis: tokenizers, lowercasing, stop word sources
//! - JSON configuration and training data

pub mod analysis;
pub mod classifier;
pub mod error;

pub mod prelude {
    pub use crate::analysis::bag_of_words::{BagOfWords, DocumentTokenizer};
    pub use crate::classifier::{
        Classification, ClassifierConfig, NaiveBayesClassifier, Target, TrainingSample,
    };
    pub use crate::error::{ClassifierError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
