//! Stop word sources.
//!
//! A [`StopWordSource`] supplies the set of words a [`StopFilter`] removes.
//! Sources are read once, when the filter is built; the filter then shares
//! the set behind an `Arc`.
//!
//! [`StopFilter`]: crate::analysis::token_filter::stop::StopFilter
//!
//! # Examples
//!
//! ```
//! use bayes_text::analysis::stop_words::{Language, StopWordSource};
//!
//! let words = Language::English.stop_words().unwrap();
//! assert!(words.contains("the"));
//! assert!(words.contains("don't"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// English stop words (the NLTK English corpus, 179 entries).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    ENGLISH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// Anything that can supply a stop word set.
pub trait StopWordSource {
    /// Produce the stop word set.
    fn stop_words(&self) -> Result<HashSet<String>>;
}

/// Built-in stop word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    /// The English list.
    #[default]
    English,
    /// No stop words at all.
    None,
}

impl StopWordSource for Language {
    fn stop_words(&self) -> Result<HashSet<String>> {
        match self {
            Language::English => Ok(ENGLISH_STOP_WORDS_SET.clone()),
            Language::None => Ok(HashSet::new()),
        }
    }
}

/// An in-memory stop word list.
#[derive(Debug, Clone, Default)]
pub struct StopWordList {
    words: HashSet<String>,
}

impl StopWordList {
    /// Build a list from any iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWordList {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl StopWordSource for StopWordList {
    fn stop_words(&self) -> Result<HashSet<String>> {
        Ok(self.words.clone())
    }
}

/// A newline-separated stop word file.
///
/// One word per line. Surrounding whitespace is trimmed; blank lines and
/// lines starting with `#` are skipped.
#[derive(Debug, Clone)]
pub struct StopWordFile {
    path: PathBuf,
}

impl StopWordFile {
    /// Point at a stop word file. Nothing is read until [`stop_words`] is called.
    ///
    /// [`stop_words`]: StopWordSource::stop_words
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        StopWordFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(content: &str) -> HashSet<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }
}

impl StopWordSource for StopWordFile {
    fn stop_words(&self) -> Result<HashSet<String>> {
        let content = fs::read_to_string(&self.path)?;
        let words = Self::parse(&content);
        log::debug!(
            "loaded {} stop words from {}",
            words.len(),
            self.path.display()
        );
        Ok(words)
    }
}
