//! The Naive Bayes classifier.
//!
//! Scoring a bag of words against a category multiplies, for each token
//! with evidence, the ratio of its in-category likelihood to its marginal
//! probability, and finally the category prior:
//!
//! ```text
//! score(bag, c) = P(c) * Π_{t ∈ bag, P(t|c) > 0, P(t) > 0} P(t|c) / P(t)
//! ```
//!
//! Tokens with no evidence contribute a factor of 1. The score is relative:
//! it is only meaningful for comparing categories against each other.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::standard::StandardAnalyzer;
use crate::analysis::bag_of_words::{AnalyzerTokenizer, BagOfWords, DocumentTokenizer};
use crate::classifier::category::{CategorySet, Target};
use crate::classifier::cleanup::DEFAULT_CLEANUP_THRESHOLD;
use crate::classifier::config::ClassifierConfig;
use crate::classifier::frequency::FrequencyStore;
use crate::classifier::probability::ProbabilityEngine;
use crate::error::Result;

/// The winning category of a classification and its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// The category with the strictly greatest score, or the first category
    /// when no category scores above 0.
    pub category: String,
    /// The winner's unnormalized likelihood score.
    pub score: f64,
}

/// A bag-of-words Naive Bayes classifier over a fixed category set.
///
/// # Examples
///
/// ```
/// use bayes_text::classifier::NaiveBayesClassifier;
///
/// let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
/// classifier.train("free money now", "spam").unwrap();
/// classifier.train("meeting agenda", "ham").unwrap();
///
/// let result = classifier.classify("free money").unwrap();
/// assert_eq!(result.category, "spam");
/// ```
pub struct NaiveBayesClassifier {
    pub(crate) store: FrequencyStore,
    pub(crate) tokenizer: Box<dyn DocumentTokenizer>,
    pub(crate) cleanup_threshold: f64,
}

impl NaiveBayesClassifier {
    /// Create a classifier that tokenizes with the [`StandardAnalyzer`].
    pub fn new<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_analyzer(categories, Arc::new(StandardAnalyzer::new()?))
    }

    /// Create a classifier that tokenizes with `analyzer`.
    pub fn with_analyzer<I, S>(categories: I, analyzer: Arc<dyn Analyzer>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_tokenizer(categories, AnalyzerTokenizer::new(analyzer))
    }

    /// Create a classifier with any document tokenizer.
    pub fn with_tokenizer<I, S, T>(categories: I, tokenizer: T) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        T: DocumentTokenizer + 'static,
    {
        let categories = CategorySet::new(categories)?;
        log::debug!("created classifier for categories {categories}");

        Ok(NaiveBayesClassifier {
            store: FrequencyStore::new(categories),
            tokenizer: Box::new(tokenizer),
            cleanup_threshold: DEFAULT_CLEANUP_THRESHOLD,
        })
    }

    /// Create a classifier from a validated configuration.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let analyzer = config.build_analyzer()?;
        let mut classifier = Self::with_analyzer(config.categories.iter().cloned(), analyzer)?;
        classifier.cleanup_threshold = config.cleanup_threshold;
        Ok(classifier)
    }

    pub fn categories(&self) -> &CategorySet {
        self.store.categories()
    }

    /// Read-only access to the underlying counts.
    pub fn store(&self) -> &FrequencyStore {
        &self.store
    }

    pub fn probabilities(&self) -> ProbabilityEngine<'_> {
        ProbabilityEngine::new(&self.store)
    }

    /// The threshold [`cleanup_with_default_threshold`] uses.
    ///
    /// [`cleanup_with_default_threshold`]: Self::cleanup_with_default_threshold
    pub fn cleanup_threshold(&self) -> f64 {
        self.cleanup_threshold
    }

    /// Tokenize `text` the same way training and classification do.
    pub fn tokenize(&self, text: &str) -> Result<BagOfWords> {
        self.tokenizer.tokenize(text)
    }

    pub fn word_count(&self, token: &str, category: &str) -> u64 {
        self.store.word_count(token, category)
    }

    pub fn total_word_count(&self, target: Target<'_>) -> u64 {
        self.store.total_word_count(target)
    }

    pub fn vocab_size(&self, target: Target<'_>) -> usize {
        self.store.vocab_size(target)
    }

    pub fn document_count(&self, category: &str) -> u64 {
        self.store.document_count(category)
    }

    pub fn total_document_count(&self) -> u64 {
        self.store.total_document_count()
    }

    pub fn category_prior(&self, category: &str) -> Result<f64> {
        self.probabilities().category_prior(category)
    }

    pub fn word_likelihood_given_category(&self, token: &str, category: &str) -> f64 {
        self.probabilities()
            .word_likelihood_given_category(token, category)
    }

    pub fn marginal_word_probability(&self, token: &str) -> Result<f64> {
        self.probabilities().marginal_word_probability(token)
    }

    /// Remove `token` from the target categories; see [`FrequencyStore::remove_word`].
    pub fn remove_word(&mut self, token: &str, target: Target<'_>) -> usize {
        self.store.remove_word(token, target)
    }

    /// Relative likelihood of `bag` belonging to `category`.
    pub fn text_likelihood(&self, bag: &BagOfWords, category: &str) -> Result<f64> {
        let index = self.store.categories().require(category)?;
        self.text_likelihood_at(bag, index)
    }

    fn text_likelihood_at(&self, bag: &BagOfWords, index: usize) -> Result<f64> {
        let engine = self.probabilities();
        let mut score = 1.0;

        for token in bag {
            let marginal = engine.marginal_word_probability(token)?;
            let likelihood = engine.word_likelihood_at(token, index);
            if marginal > 0.0 && likelihood > 0.0 {
                score *= likelihood / marginal;
            }
        }

        Ok(score * engine.category_prior_at(index)?)
    }

    /// Classify raw text.
    ///
    /// Fails with `UndefinedPrior` if nothing has been trained yet.
    pub fn classify(&self, text: &str) -> Result<Classification> {
        let bag = self.tokenize(text)?;
        self.classify_bag(&bag)
    }

    /// Classify an already tokenized document.
    ///
    /// A category replaces the current winner only when its score is strictly
    /// greater, starting from the first category at score 0, so ties and
    /// all-zero scores go to the earliest category in configured order.
    pub fn classify_bag(&self, bag: &BagOfWords) -> Result<Classification> {
        let categories = self.store.categories();
        let mut best_index = 0;
        let mut best_score = 0.0;

        for (index, name) in categories.iter().enumerate() {
            let score = self.text_likelihood_at(bag, index)?;
            log::trace!("category {name} scored {score}");
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        let category = categories.names()[best_index].clone();
        log::debug!(
            "classified {} tokens as {category} (score {best_score})",
            bag.len()
        );

        Ok(Classification {
            category,
            score: best_score,
        })
    }
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("categories", self.store.categories())
            .field("total_document_count", &self.store.total_document_count())
            .field("vocab_size", &self.store.vocab_size(Target::All))
            .field("cleanup_threshold", &self.cleanup_threshold)
            .finish()
    }
}
