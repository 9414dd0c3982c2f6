//! The boundary between text analysis and the classifier.
//!
//! The classifier never looks at tokens: it consumes a [`BagOfWords`], the
//! deduplicated set of token texts of one document. Any
//! [`DocumentTokenizer`] can produce one, so tokenization strategies can be
//! swapped without touching the classifier.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use bayes_text::analysis::analyzer::standard::StandardAnalyzer;
//! use bayes_text::analysis::bag_of_words::{AnalyzerTokenizer, DocumentTokenizer};
//!
//! let tokenizer = AnalyzerTokenizer::new(Arc::new(StandardAnalyzer::new().unwrap()));
//! let bag = tokenizer.tokenize("Money, money, MONEY!").unwrap();
//!
//! assert_eq!(bag.len(), 1);
//! assert!(bag.contains("money"));
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// The distinct tokens of one document.
///
/// Ordered, so that scoring multiplies factors in the same order on every run.
pub type BagOfWords = BTreeSet<String>;

/// Converts raw text into a bag of words.
pub trait DocumentTokenizer: Send + Sync {
    /// Tokenize `text` into its distinct normalized tokens.
    fn tokenize(&self, text: &str) -> Result<BagOfWords>;
}

impl<F> DocumentTokenizer for F
where
    F: Fn(&str) -> Result<BagOfWords> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<BagOfWords> {
        self(text)
    }
}

/// A [`DocumentTokenizer`] backed by an analysis pipeline.
///
/// Tokens the pipeline marked as stopped, and empty tokens, are left out of
/// the bag.
#[derive(Clone)]
pub struct AnalyzerTokenizer {
    analyzer: Arc<dyn Analyzer>,
}

impl AnalyzerTokenizer {
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        AnalyzerTokenizer { analyzer }
    }

    /// The wrapped analyzer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}

impl DocumentTokenizer for AnalyzerTokenizer {
    fn tokenize(&self, text: &str) -> Result<BagOfWords> {
        let bag = self
            .analyzer
            .analyze(text)?
            .filter(|token| !token.is_stopped() && !token.is_empty())
            .map(|token| token.text)
            .collect();

        Ok(bag)
    }
}

impl std::fmt::Debug for AnalyzerTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerTokenizer")
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
