//! Probability estimates derived from a [`FrequencyStore`].
//!
//! Every estimate is recomputed from the current counts on each call; there
//! is no cache to invalidate after training or cleanup. No smoothing is
//! applied, so a token never seen in training yields 0 everywhere.
//!
//! `word_likelihood_given_category` is a document-frequency ratio
//! (`word_count / document_count`), not a multinomial P(word|category)
//! normalized by the category's total word count.

use crate::classifier::frequency::FrequencyStore;
use crate::error::{ClassifierError, Result};

/// A read-only view computing priors and likelihoods over a store.
#[derive(Debug, Clone, Copy)]
pub struct ProbabilityEngine<'a> {
    store: &'a FrequencyStore,
}

impl<'a> ProbabilityEngine<'a> {
    pub fn new(store: &'a FrequencyStore) -> Self {
        ProbabilityEngine { store }
    }

    /// `document_count(category) / total_document_count`.
    ///
    /// Fails with `InvalidCategory` for an unknown category and with
    /// `UndefinedPrior` before any document has been trained.
    pub fn category_prior(&self, category: &str) -> Result<f64> {
        let index = self.store.categories().require(category)?;
        self.category_prior_at(index)
    }

    pub(crate) fn category_prior_at(&self, index: usize) -> Result<f64> {
        let total = self.total_documents("category prior")?;
        Ok(self.store.document_count_at(index) as f64 / total)
    }

    /// `word_count(token, category) / document_count(category)`, or 0 when
    /// the category has no documents.
    pub fn word_likelihood_given_category(&self, token: &str, category: &str) -> f64 {
        self.store
            .categories()
            .index_of(category)
            .map_or(0.0, |index| self.word_likelihood_at(token, index))
    }

    pub(crate) fn word_likelihood_at(&self, token: &str, index: usize) -> f64 {
        let documents = self.store.document_count_at(index);
        if documents > 0 {
            self.store.word_count_at(token, index) as f64 / documents as f64
        } else {
            0.0
        }
    }

    /// `Σ_c word_count(token, c) / total_document_count`.
    ///
    /// Fails with `UndefinedPrior` before any document has been trained.
    pub fn marginal_word_probability(&self, token: &str) -> Result<f64> {
        let total = self.total_documents("marginal word probability")?;
        Ok(self.store.corpus_word_count(token) as f64 / total)
    }

    fn total_documents(&self, quantity: &str) -> Result<f64> {
        match self.store.total_document_count() {
            0 => Err(ClassifierError::undefined_prior(format!(
                "{quantity} requires at least one trained document"
            ))),
            total => Ok(total as f64),
        }
    }
}
