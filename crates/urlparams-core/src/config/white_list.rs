//! Ordered, duplicate-free set of whitelisted parameter names.

use serde::Serialize;

/// Whitelisted names in first-seen order. Iteration order is stable so the
/// same input always produces the same output properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WhiteList(Vec<String>);

impl WhiteList {
    /// Splits a comma-separated list, trimming each piece. Duplicates collapse.
    /// An empty string gives an empty list.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        raw.split(',').map(str::trim).collect()
    }

    /// Adds `name` unless already present. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WhiteList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::default();
        for name in iter {
            list.insert(name);
        }
        list
    }
}
