//! The fixed category set of a classifier.

use std::fmt;

use ahash::AHashMap;

use crate::error::{ClassifierError, Result};

/// An ordered, non-empty set of unique category names.
///
/// The order is the configured order: it decides which category wins a tie
/// in classification. The set cannot change after construction.
#[derive(Debug, Clone)]
pub struct CategorySet {
    names: Vec<String>,
    index: AHashMap<String, usize>,
}

impl CategorySet {
    /// Build a category set, rejecting an empty list and duplicate names.
    ///
    /// ```
    /// use bayes_text::classifier::category::CategorySet;
    ///
    /// let categories = CategorySet::new(["spam", "ham"]).unwrap();
    /// assert_eq!(categories.first(), "spam");
    /// assert!(CategorySet::new(["spam", "spam"]).is_err());
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ClassifierError::invalid_config(
                "at least one category is required",
            ));
        }

        let mut index = AHashMap::with_capacity(names.len());
        for (position, name) in names.iter().enumerate() {
            if index.insert(name.clone(), position).is_some() {
                return Err(ClassifierError::invalid_config(format!(
                    "duplicate category: {name}"
                )));
            }
        }

        Ok(CategorySet { names, index })
    }

    /// Position of `name` in the configured order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Position of `name`, or an `InvalidCategory` error.
    pub fn require(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| ClassifierError::invalid_category(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The category at `index`, in configured order.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The first configured category, the default classification winner.
    pub fn first(&self) -> &str {
        &self.names[0]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// False for every constructed set; `new` rejects an empty list.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names.join(", "))
    }
}

/// Which categories an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Every configured category.
    All,
    /// A single category by name.
    Category(&'a str),
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(category: &'a str) -> Self {
        Target::Category(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let categories = CategorySet::new(vec!["spam", "ham", "eggs"]).unwrap();

        assert_eq!(categories.len(), 3);
        assert_eq!(categories.first(), "spam");
        assert_eq!(categories.index_of("ham"), Some(1));
        assert_eq!(categories.name(2), Some("eggs"));
        assert_eq!(categories.name(3), None);
        assert_eq!(
            categories.iter().collect::<Vec<_>>(),
            vec!["spam", "ham", "eggs"]
        );
        assert_eq!(categories.to_string(), "[spam, ham, eggs]");
    }

    #[test]
    fn test_empty_category_list() {
        let result = CategorySet::new(Vec::<String>::new());
        assert!(matches!(result, Err(ClassifierError::InvalidConfig(_))));
    }

    #[test]
    fn test_duplicate_category() {
        let result = CategorySet::new(["spam", "ham", "spam"]);
        assert!(matches!(result, Err(ClassifierError::InvalidConfig(_))));
    }

    #[test]
    fn test_require_unknown_category() {
        let categories = CategorySet::new(["spam", "ham"]).unwrap();

        assert_eq!(categories.require("ham").unwrap(), 1);
        assert!(matches!(
            categories.require("eggs"),
            Err(ClassifierError::InvalidCategory(name)) if name == "eggs"
        ));
    }

    #[test]
    fn test_target_from_str() {
        assert_eq!(Target::from("spam"), Target::Category("spam"));
    }
}
