//! Vocabulary pruning.
//!
//! Tokens whose corpus-wide marginal probability reaches the threshold carry
//! little category signal and are dropped from every category. Pruning is
//! irreversible; it is meant to run between training batches.

use serde::{Deserialize, Serialize};

use crate::classifier::category::Target;
use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::error::{ClassifierError, Result};

/// The threshold used when none is given.
pub const DEFAULT_CLEANUP_THRESHOLD: f64 = 0.2;

/// Outcome of a cleanup pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanupReport {
    /// The threshold the pass ran with.
    pub threshold: f64,
    /// One entry per removed token, in removal order.
    pub removed_words: Vec<String>,
}

impl CleanupReport {
    /// Number of removal operations performed.
    pub fn removed(&self) -> usize {
        self.removed_words.len()
    }
}

impl NaiveBayesClassifier {
    /// Remove every token with `marginal_word_probability >= threshold`.
    ///
    /// Categories are scanned in configured order. The tokens marked while
    /// scanning one category are removed from all categories before the next
    /// category is scanned; each removal is counted once.
    pub fn cleanup(&mut self, threshold: f64) -> Result<CleanupReport> {
        if threshold.is_nan() {
            return Err(ClassifierError::invalid_config(
                "cleanup threshold must be a number",
            ));
        }

        let mut removed_words = Vec::new();
        for index in 0..self.store.categories().len() {
            let engine = self.probabilities();
            let mut marked = Vec::new();
            for token in self.store.tokens_at(index) {
                if engine.marginal_word_probability(token)? >= threshold {
                    marked.push(token.to_string());
                }
            }
            marked.sort_unstable();

            for token in marked {
                self.store.remove_word(&token, Target::All);
                removed_words.push(token);
            }
        }

        log::info!("cleanup removed {} words", removed_words.len());
        Ok(CleanupReport {
            threshold,
            removed_words,
        })
    }

    /// Run [`cleanup`](Self::cleanup) with the configured threshold.
    pub fn cleanup_with_default_threshold(&mut self) -> Result<CleanupReport> {
        self.cleanup(self.cleanup_threshold)
    }
}
