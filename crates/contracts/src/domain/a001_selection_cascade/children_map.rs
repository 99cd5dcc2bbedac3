use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parent id → ordered indices into the child option pool.
///
/// Built once from page data and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildrenMap(pub HashMap<String, Vec<usize>>);

impl ChildrenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parent: impl Into<String>, children: Vec<usize>) {
        self.0.insert(parent.into(), children);
    }

    /// Child indices for `parent`; `None` when the parent was never listed.
    pub fn children(&self, parent: &str) -> Option<&[usize]> {
        self.0.get(parent).map(Vec::as_slice)
    }

    /// Largest child index referenced by any parent
    pub fn max_index(&self) -> Option<usize> {
        self.0.values().flatten().copied().max()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<usize>)> for ChildrenMap {
    fn from_iter<I: IntoIterator<Item = (K, Vec<usize>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_lookup() {
        let map: ChildrenMap = serde_json::from_str(r#"{"7": [2, 0], "8": []}"#).unwrap();
        assert_eq!(map.children("7"), Some(&[2, 0][..]));
        assert_eq!(map.children("8"), Some(&[][..]));
        assert_eq!(map.children("9"), None);
        assert_eq!(map.max_index(), Some(2));
    }
}
