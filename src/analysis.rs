//! Text analysis for the classifier.
//!
//! Turns raw documents into bags of words: a tokenizer splits the text, token
//! filters normalize it and drop stop words, and [`bag_of_words`] collapses
//! the surviving tokens into a set.

pub mod analyzer;
pub mod bag_of_words;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
