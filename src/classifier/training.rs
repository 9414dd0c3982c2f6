//! Labeled training data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One labeled training document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Raw document text.
    pub text: String,
    /// Category label.
    pub category: String,
}

impl TrainingSample {
    pub fn new<T: Into<String>, C: Into<String>>(text: T, category: C) -> Self {
        TrainingSample {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// Load training samples from a JSON file holding an array of
/// `{"text": ..., "category": ...}` objects.
pub fn load_training_data<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let samples: Vec<TrainingSample> = serde_json::from_str(&content)?;

    if samples.is_empty() {
        log::warn!("training file {} contains no samples", path.display());
    } else {
        log::debug!("loaded {} samples from {}", samples.len(), path.display());
    }
    Ok(samples)
}
