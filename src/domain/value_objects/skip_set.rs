//! Skip set value object - keys that are never pushed

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Provider-injected token that must not be overwritten from a local file
pub const VERCEL_OIDC_TOKEN: &str = "VERCEL_OIDC_TOKEN";

/// Key names excluded from synchronization regardless of file contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkipSet(BTreeSet<String>);

impl SkipSet {
    /// An empty skip set (every non-empty key is eligible)
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn insert(&mut self, key: impl Into<String>) {
        let key = key.into();
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            self.0.insert(trimmed.to_string());
        }
    }

    pub fn extend<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            self.insert(key);
        }
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

impl Default for SkipSet {
    fn default() -> Self {
        [VERCEL_OIDC_TOKEN].into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SkipSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl From<Vec<String>> for SkipSet {
    fn from(keys: Vec<String>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<SkipSet> for Vec<String> {
    fn from(skip: SkipSet) -> Self {
        skip.0.into_iter().collect()
    }
}
