//! Configuration for building a classifier.
//!
//! ```
//! use bayes_text::classifier::config::ClassifierConfig;
//! use bayes_text::classifier::NaiveBayesClassifier;
//!
//! let config = ClassifierConfig::from_json_str(
//!     r#"{ "categories": ["spam", "ham"], "cleanup_threshold": 0.3 }"#,
//! )
//! .unwrap();
//! let classifier = NaiveBayesClassifier::from_config(&config).unwrap();
//! assert_eq!(classifier.cleanup_threshold(), 0.3);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::stop_words::{Language, StopWordFile, StopWordList, StopWordSource};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::{DEFAULT_PATTERN, RegexTokenizer};
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::classifier::category::CategorySet;
use crate::classifier::cleanup::DEFAULT_CLEANUP_THRESHOLD;
use crate::error::{ClassifierError, Result};

/// Configuration for a [`NaiveBayesClassifier`](crate::classifier::NaiveBayesClassifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Category names in tie-break order. Must be non-empty and unique.
    pub categories: Vec<String>,

    /// Threshold used by `cleanup_with_default_threshold`.
    #[serde(default = "default_cleanup_threshold")]
    pub cleanup_threshold: f64,

    /// How documents are turned into bags of words.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

fn default_cleanup_threshold() -> f64 {
    DEFAULT_CLEANUP_THRESHOLD
}

/// Analysis pipeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Tokenizer producing the raw tokens.
    pub tokenizer: TokenizerConfig,

    /// Lowercase tokens before stop word removal.
    pub lowercase: bool,

    /// Stop words to remove.
    pub stop_words: StopWordsConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerConfig::default(),
            lowercase: true,
            stop_words: StopWordsConfig::default(),
        }
    }
}

/// Tokenizer selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Regex matches; `\w+` unless a pattern is given.
    Regex {
        #[serde(default = "default_pattern")]
        pattern: String,
    },
    /// Unicode word boundaries.
    UnicodeWord,
    /// Whitespace separated words.
    Whitespace,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        TokenizerConfig::Regex {
            pattern: default_pattern(),
        }
    }
}

/// Stop word source selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StopWordsConfig {
    /// A built-in list.
    Language { language: Language },
    /// An inline list.
    Words { words: Vec<String> },
    /// A newline-separated file, read once when the analyzer is built.
    File { path: PathBuf },
}

impl Default for StopWordsConfig {
    fn default() -> Self {
        StopWordsConfig::Language {
            language: Language::English,
        }
    }
}

impl StopWordsConfig {
    fn load(&self) -> Result<HashSet<String>> {
        match self {
            StopWordsConfig::Language { language } => language.stop_words(),
            StopWordsConfig::Words { words } => {
                StopWordList::from_words(words.iter().cloned()).stop_words()
            }
            StopWordsConfig::File { path } => StopWordFile::new(path).stop_words(),
        }
    }
}

impl ClassifierConfig {
    /// A configuration with default analysis and cleanup threshold.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ClassifierConfig {
            categories: categories.into_iter().map(Into::into).collect(),
            cleanup_threshold: DEFAULT_CLEANUP_THRESHOLD,
            analysis: AnalysisConfig::default(),
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ClassifierConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("loading classifier config from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    /// Check the categories and cleanup threshold.
    ///
    /// Categories follow the same rules as [`CategorySet::new`].
    pub fn validate(&self) -> Result<()> {
        CategorySet::new(self.categories.iter().map(String::as_str))?;

        if !self.cleanup_threshold.is_finite() || self.cleanup_threshold < 0.0 {
            return Err(ClassifierError::invalid_config(format!(
                "cleanup_threshold must be a finite non-negative number, got {}",
                self.cleanup_threshold
            )));
        }

        Ok(())
    }

    /// Build the analysis pipeline this configuration describes.
    pub fn build_analyzer(&self) -> Result<Arc<dyn Analyzer>> {
        let analysis = &self.analysis;
        let tokenizer: Arc<dyn Tokenizer> = match &analysis.tokenizer {
            TokenizerConfig::Regex { pattern } => Arc::new(RegexTokenizer::with_pattern(pattern)?),
            TokenizerConfig::UnicodeWord => Arc::new(UnicodeWordTokenizer::new()),
            TokenizerConfig::Whitespace => Arc::new(WhitespaceTokenizer::new()),
        };

        let mut analyzer = PipelineAnalyzer::new(tokenizer);
        if analysis.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }

        let stop_words = analysis.stop_words.load()?;
        if !stop_words.is_empty() {
            analyzer = analyzer.add_filter(Arc::new(StopFilter::with_stop_words(stop_words)));
        }

        Ok(Arc::new(analyzer))
    }
}
