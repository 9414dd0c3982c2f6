//! The statistical core: counts, probabilities, training, pruning and
//! classification.
//!
//! # Architecture
//!
//! - [`FrequencyStore`]: per-category token occurrence counts and document counters
//! - [`ProbabilityEngine`]: priors and likelihoods recomputed from the store
//! - [`NaiveBayesClassifier`]: owns a store and a tokenizer; trains, prunes
//!   and classifies
//!
//! Training flows tokenizer → trainer → store; classification reads the
//! store through the probability engine and never mutates it.
//!
//! # Example
//!
//! ```
//! use bayes_text::classifier::{NaiveBayesClassifier, Target};
//!
//! # fn main() -> bayes_text::error::Result<()> {
//! let mut classifier = NaiveBayesClassifier::new(["spam", "ham"])?;
//! classifier.train("free money now", "spam")?;
//! classifier.train("meeting agenda", "ham")?;
//!
//! assert_eq!(classifier.vocab_size(Target::All), 4);
//! assert_eq!(classifier.classify("free money")?.category, "spam");
//!
//! let report = classifier.cleanup(0.5)?;
//! assert_eq!(report.removed(), 4);
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod cleanup;
pub mod config;
pub mod frequency;
pub mod naive_bayes;
pub mod probability;
mod trainer;
pub mod training;

pub use category::{CategorySet, Target};
pub use cleanup::{CleanupReport, DEFAULT_CLEANUP_THRESHOLD};
pub use config::ClassifierConfig;
pub use frequency::FrequencyStore;
pub use naive_bayes::{Classification, NaiveBayesClassifier};
pub use probability::ProbabilityEngine;
pub use training::{TrainingSample, load_training_data};
