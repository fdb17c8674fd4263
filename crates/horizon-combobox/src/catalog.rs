//! The option catalog and the prefix matching helpers built on it.
//!
//! A combobox is built over one [`OptionCatalog`]: an ordered list of display
//! strings that never changes after construction. Everything else the engine
//! tracks (the filtered set, the active option, the committed option) refers
//! back into it by index, so duplicate entries stay distinguishable.
//!
//! Matching is a case-insensitive prefix test: an option matches a query when
//! its lowercase form starts with the lowercase query. The empty query matches
//! everything.
//!
//! # Example
//!
//! ```
//! use horizon_combobox::catalog::{OptionCatalog, exact_matches, filter_options};
//!
//! let catalog = OptionCatalog::from(["Apple", "Apricot", "Banana"]);
//! assert_eq!(catalog.filter_indices("ap"), vec![0, 1]);
//!
//! let fruit = ["Apple", "Apricot", "Banana"];
//! assert_eq!(filter_options(&fruit, "AP", &["Apple"]), vec!["Apricot"]);
//! assert_eq!(exact_matches(&fruit, "banana, apple, kiwi"), vec!["Banana", "Apple"]);
//! ```

use std::ops::Index;
use std::sync::Arc;

use horizon_combobox_core::logging::targets;

/// Whether `option` starts with `query`, ignoring case.
pub fn matches_prefix(option: &str, query: &str) -> bool {
    query.is_empty() || option.to_lowercase().starts_with(&query.to_lowercase())
}

/// Filter `options` against `query`, keeping catalog order.
///
/// Returns every option whose lowercase form starts with the lowercase query,
/// except those listed in `exclude` (compared exactly).
pub fn filter_options<'a, S: AsRef<str>>(
    options: &'a [S],
    query: &str,
    exclude: &[&str],
) -> Vec<&'a str> {
    let query = query.to_lowercase();
    options
        .iter()
        .map(|option| option.as_ref())
        .filter(|option| option.to_lowercase().starts_with(&query))
        .filter(|option| !exclude.contains(option))
        .collect()
}

/// Resolve a comma-separated list of names against `options`.
///
/// Each token is trimmed and compared case-insensitively for equality. The
/// first option equal to a token is returned, in token order; tokens that
/// match nothing are dropped.
pub fn exact_matches<'a, S: AsRef<str>>(options: &'a [S], search: &str) -> Vec<&'a str> {
    search
        .split(',')
        .filter_map(|name| {
            let name = name.trim().to_lowercase();
            options
                .iter()
                .map(|option| option.as_ref())
                .find(|option| option.to_lowercase() == name)
        })
        .collect()
}

/// An immutable, ordered sequence of candidate options.
///
/// Cloning is cheap: clones share the same backing storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionCatalog {
    options: Arc<[String]>,
}

impl OptionCatalog {
    /// Create a catalog from any sequence of strings.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the catalog has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The option at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// All options in catalog order.
    pub fn as_slice(&self) -> &[String] {
        &self.options
    }

    /// Iterate over the options in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(String::as_str)
    }

    /// Index of the first option exactly equal to `option`.
    pub fn position(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|candidate| candidate == option)
    }

    /// Catalog indices of every option matching `query`, in catalog order.
    pub fn filter_indices(&self, query: &str) -> Vec<usize> {
        let query = query.to_lowercase();
        let indices: Vec<usize> = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.to_lowercase().starts_with(&query))
            .map(|(index, _)| index)
            .collect();
        tracing::trace!(target: targets::FILTER, %query, matched = indices.len(), "filtered catalog");
        indices
    }

    /// Catalog index of the first option matching `query`.
    pub fn first_index_by_prefix(&self, query: &str) -> Option<usize> {
        let query = query.to_lowercase();
        self.options
            .iter()
            .position(|option| option.to_lowercase().starts_with(&query))
    }

    /// Every catalog index, in order.
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.options.len()).collect()
    }
}

impl Index<usize> for OptionCatalog {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.options[index]
    }
}

impl From<Vec<String>> for OptionCatalog {
    fn from(options: Vec<String>) -> Self {
        Self {
            options: options.into(),
        }
    }
}

impl From<Vec<&str>> for OptionCatalog {
    fn from(options: Vec<&str>) -> Self {
        Self::new(options)
    }
}

impl<const N: usize> From<[&str; N]> for OptionCatalog {
    fn from(options: [&str; N]) -> Self {
        Self::new(options)
    }
}
