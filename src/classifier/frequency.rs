//! Per-category token occurrence counts.
//!
//! For every category the store maps a token to the number of training
//! documents of that category the token appeared in. Documents are bags of
//! words, so one document adds at most 1 to a token's count. The store also
//! keeps the per-category and total document counters.
//!
//! A token missing from a category's table has count 0 there. Queries that
//! name a category outside the configured set behave the same way.

use ahash::{AHashMap, AHashSet};

use crate::classifier::category::{CategorySet, Target};
use crate::error::Result;

/// Token occurrence counts and document counters for a fixed category set.
#[derive(Debug, Clone)]
pub struct FrequencyStore {
    categories: CategorySet,
    /// token -> occurrence count, one table per category in configured order
    word_counts: Vec<AHashMap<String, u64>>,
    document_counts: Vec<u64>,
    total_document_count: u64,
}

impl FrequencyStore {
    /// Create an empty store for `categories`.
    pub fn new(categories: CategorySet) -> Self {
        let slots = categories.len();
        FrequencyStore {
            categories,
            word_counts: vec![AHashMap::new(); slots],
            document_counts: vec![0; slots],
            total_document_count: 0,
        }
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// Number of `category` documents that contained `token`.
    pub fn word_count(&self, token: &str, category: &str) -> u64 {
        self.categories
            .index_of(category)
            .map_or(0, |index| self.word_count_at(token, index))
    }

    pub(crate) fn word_count_at(&self, token: &str, index: usize) -> u64 {
        self.word_counts[index].get(token).copied().unwrap_or(0)
    }

    /// Sum of `token`'s counts over every category.
    pub fn corpus_word_count(&self, token: &str) -> u64 {
        self.word_counts
            .iter()
            .filter_map(|table| table.get(token))
            .sum()
    }

    /// Sum of all occurrence counts in the target.
    pub fn total_word_count(&self, target: Target<'_>) -> u64 {
        match target {
            Target::All => self
                .word_counts
                .iter()
                .map(|table| table.values().sum::<u64>())
                .sum(),
            Target::Category(category) => self
                .categories
                .index_of(category)
                .map_or(0, |index| self.word_counts[index].values().sum()),
        }
    }

    /// Number of distinct tokens in the target.
    ///
    /// For [`Target::All`] this is the size of the union across categories.
    pub fn vocab_size(&self, target: Target<'_>) -> usize {
        match target {
            Target::All => {
                let vocabulary: AHashSet<&str> = self
                    .word_counts
                    .iter()
                    .flat_map(|table| table.keys().map(String::as_str))
                    .collect();
                vocabulary.len()
            }
            Target::Category(category) => self
                .categories
                .index_of(category)
                .map_or(0, |index| self.word_counts[index].len()),
        }
    }

    /// Add one occurrence of `token` to `category`.
    ///
    /// Fails with `InvalidCategory` for a category outside the set.
    pub fn increment_word(&mut self, token: &str, category: &str) -> Result<()> {
        let index = self.categories.require(category)?;
        self.increment_word_at(token, index);
        Ok(())
    }

    pub(crate) fn increment_word_at(&mut self, token: &str, index: usize) {
        let table = &mut self.word_counts[index];
        match table.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                table.insert(token.to_string(), 1);
            }
        }
    }

    /// Drop `token` from the target. Absent tokens and unknown categories are
    /// a no-op. Returns the number of category tables the token was removed from.
    pub fn remove_word(&mut self, token: &str, target: Target<'_>) -> usize {
        match target {
            Target::All => self
                .word_counts
                .iter_mut()
                .map(|table| table.remove(token).is_some())
                .filter(|removed| *removed)
                .count(),
            Target::Category(category) => match self.categories.index_of(category) {
                Some(index) => usize::from(self.word_counts[index].remove(token).is_some()),
                None => 0,
            },
        }
    }

    /// Distinct tokens currently recorded for `category`, in no particular order.
    pub fn tokens<'s>(&'s self, category: &str) -> impl Iterator<Item = &'s str> + use<'s> {
        self.categories
            .index_of(category)
            .into_iter()
            .flat_map(move |index| self.tokens_at(index))
    }

    /// Distinct tokens currently recorded for the category at `index`.
    pub(crate) fn tokens_at(&self, index: usize) -> impl Iterator<Item = &str> {
        self.word_counts[index].keys().map(String::as_str)
    }

    /// Number of documents trained on `category`.
    pub fn document_count(&self, category: &str) -> u64 {
        self.categories
            .index_of(category)
            .map_or(0, |index| self.document_counts[index])
    }

    pub(crate) fn document_count_at(&self, index: usize) -> u64 {
        self.document_counts[index]
    }

    /// Number of documents trained across all categories.
    pub fn total_document_count(&self) -> u64 {
        self.total_document_count
    }

    /// Count one more training document for `category`.
    pub fn record_document(&mut self, category: &str) -> Result<()> {
        let index = self.categories.require(category)?;
        self.record_document_at(index);
        Ok(())
    }

    pub(crate) fn record_document_at(&mut self, index: usize) {
        self.document_counts[index] += 1;
        self.total_document_count += 1;
    }
}
