//! Incremental training.
//!
//! Training counts documents, not occurrences: each distinct token of a
//! document adds 1 to its count for the document's category. The store has
//! no notion of document identity, so training the same text twice counts
//! it twice.

use crate::analysis::bag_of_words::BagOfWords;
use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::classifier::training::TrainingSample;
use crate::error::Result;

impl NaiveBayesClassifier {
    /// Train on one labeled document.
    ///
    /// The category is checked and the text tokenized before any count
    /// changes, so a failed call leaves the model untouched.
    pub fn train(&mut self, text: &str, category: &str) -> Result<()> {
        let index = self.store.categories().require(category)?;
        let bag = self.tokenize(text)?;
        self.apply(&bag, index);
        Ok(())
    }

    /// Train on an already tokenized document.
    pub fn train_bag(&mut self, bag: &BagOfWords, category: &str) -> Result<()> {
        let index = self.store.categories().require(category)?;
        self.apply(bag, index);
        Ok(())
    }

    /// Train on every sample in order and return how many were trained.
    ///
    /// All samples are validated and tokenized first; if any fails, nothing
    /// is trained.
    pub fn train_batch(&mut self, samples: &[TrainingSample]) -> Result<usize> {
        let prepared = samples
            .iter()
            .map(|sample| {
                let index = self.store.categories().require(&sample.category)?;
                Ok((self.tokenize(&sample.text)?, index))
            })
            .collect::<Result<Vec<_>>>()?;

        for (bag, index) in &prepared {
            self.apply(bag, *index);
        }

        log::debug!(
            "trained batch of {} documents ({} total)",
            prepared.len(),
            self.store.total_document_count()
        );
        Ok(prepared.len())
    }

    fn apply(&mut self, bag: &BagOfWords, index: usize) {
        self.store.record_document_at(index);
        for token in bag {
            self.store.increment_word_at(token, index);
        }
        log::debug!(
            "trained document with {} distinct tokens as {}",
            bag.len(),
            self.store.categories().names()[index]
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::classifier::category::Target;
    use crate::classifier::naive_bayes::NaiveBayesClassifier;
    use crate::classifier::training::TrainingSample;
    use crate::error::ClassifierError;

    #[test]
    fn test_train_counts_documents() {
        let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
        classifier.train("free money, free money!", "spam").unwrap();

        assert_eq!(classifier.word_count("free", "spam"), 1);
        assert_eq!(classifier.word_count("money", "spam"), 1);
        assert_eq!(classifier.document_count("spam"), 1);
        assert_eq!(classifier.total_document_count(), 1);
    }

    #[test]
    fn test_training_twice_double_counts() {
        let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
        classifier.train("x marks the spot", "spam").unwrap();
        assert_eq!(classifier.word_count("x", "spam"), 1);

        classifier.train("x marks the spot", "spam").unwrap();
        assert_eq!(classifier.word_count("x", "spam"), 2);
        assert_eq!(classifier.document_count("spam"), 2);
    }

    #[test]
    fn test_train_invalid_category() {
        let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
        let result = classifier.train("free money", "eggs");

        assert!(matches!(result, Err(ClassifierError::InvalidCategory(name)) if name == "eggs"));
        assert_eq!(classifier.total_document_count(), 0);
        assert_eq!(classifier.vocab_size(Target::All), 0);
    }

    #[test]
    fn test_train_stop_words_only() {
        let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
        classifier.train("the and of", "ham").unwrap();

        assert_eq!(classifier.document_count("ham"), 1);
        assert_eq!(classifier.vocab_size(Target::All), 0);
    }

    #[test]
    fn test_train_batch() {
        let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
        let samples = vec![
            TrainingSample::new("free money now", "spam"),
            TrainingSample::new("cheap money", "spam"),
            TrainingSample::new("meeting agenda", "ham"),
        ];

        assert_eq!(classifier.train_batch(&samples).unwrap(), 3);
        assert_eq!(classifier.word_count("money", "spam"), 2);
        assert_eq!(classifier.document_count("spam"), 2);
        assert_eq!(classifier.total_document_count(), 3);
    }

    #[test]
    fn test_train_batch_is_all_or_nothing() {
        let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
        let samples = vec![
            TrainingSample::new("free money now", "spam"),
            TrainingSample::new("scrambled", "eggs"),
        ];

        assert!(classifier.train_batch(&samples).is_err());
        assert_eq!(classifier.total_document_count(), 0);
        assert_eq!(classifier.word_count("free", "spam"), 0);
    }

    #[test]
    fn test_train_bag() {
        let mut classifier = NaiveBayesClassifier::new(["spam", "ham"]).unwrap();
        let bag = ["Free".to_string(), "money".to_string()].into_iter().collect();
        classifier.train_bag(&bag, "spam").unwrap();

        // bags are taken as-is, without further normalization
        assert_eq!(classifier.word_count("Free", "spam"), 1);
        assert_eq!(classifier.word_count("free", "spam"), 0);
    }
}
