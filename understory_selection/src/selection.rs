// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection values: a key set with range markers, and the select-all sentinel.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;
use hashbrown::hash_set::Iter;

/// A set of selected keys plus the two markers used for range gestures.
///
/// - The **anchor** is the fixed end of a range (where a shift-click range starts).
/// - The **current** key is the most recently touched end of the range.
///
/// Equality compares set membership only; two selections with the same keys
/// but different markers are equal.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "K: serde::Serialize + Eq + Hash",
        deserialize = "K: serde::Deserialize<'de> + Eq + Hash"
    ))
)]
pub struct Selection<K> {
    keys: HashSet<K>,
    anchor_key: Option<K>,
    current_key: Option<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
            anchor_key: None,
            current_key: None,
        }
    }
}

impl<K> Selection<K> {
    /// Creates an empty selection without markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no keys are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns an iterator over the selected keys in unspecified order.
    pub fn iter(&self) -> Iter<'_, K> {
        self.keys.iter()
    }

    /// Returns the anchor key, if any.
    #[must_use]
    pub fn anchor_key(&self) -> Option<&K> {
        self.anchor_key.as_ref()
    }

    /// Returns the current key, if any.
    #[must_use]
    pub fn current_key(&self) -> Option<&K> {
        self.current_key.as_ref()
    }

    /// Sets or clears the anchor key.
    pub fn set_anchor_key(&mut self, key: Option<K>) {
        self.anchor_key = key;
    }

    /// Sets or clears the current key.
    pub fn set_current_key(&mut self, key: Option<K>) {
        self.current_key = key;
    }

    /// Returns this selection with the given markers.
    #[must_use]
    pub fn with_markers(mut self, anchor_key: Option<K>, current_key: Option<K>) -> Self {
        self.anchor_key = anchor_key;
        self.current_key = current_key;
        self
    }
}

impl<K> Selection<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a selection holding exactly `key`, with both markers on it.
    #[must_use]
    pub fn single(key: K) -> Self {
        let mut keys = HashSet::with_capacity(1);
        keys.insert(key.clone());
        Self {
            keys,
            anchor_key: Some(key.clone()),
            current_key: Some(key),
        }
    }

    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Adds `key`. Returns `true` if it was not already selected.
    pub fn insert(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    /// Removes `key`. Returns `true` if it was selected.
    ///
    /// Markers pointing at `key` are left alone; callers resolve stale markers
    /// against the collection when they use them.
    pub fn remove(&mut self, key: &K) -> bool {
        self.keys.remove(key)
    }

    /// Returns `true` if both selections hold the same keys.
    #[must_use]
    pub fn is_same_set(&self, other: &HashSet<K>) -> bool {
        self.keys == *other
    }
}

impl<K: Eq + Hash> PartialEq for Selection<K> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl<K: Eq + Hash> Eq for Selection<K> {}

impl<K: Eq + Hash> FromIterator<K> for Selection<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
            anchor_key: None,
            current_key: None,
        }
    }
}

impl<K: Eq + Hash> Extend<K> for Selection<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.keys.extend(iter);
    }
}

impl<'a, K> IntoIterator for &'a Selection<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// The selected keys of a collection: either a concrete [`Selection`], or the
/// "everything" sentinel.
///
/// Select-all never materializes every key. Anything reading a selection must
/// handle [`SelectedKeys::All`] explicitly.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        rename_all = "lowercase",
        bound(
            serialize = "K: serde::Serialize + Eq + Hash",
            deserialize = "K: serde::Deserialize<'de> + Eq + Hash"
        )
    )
)]
pub enum SelectedKeys<K> {
    /// Every selectable item in the collection.
    All,
    /// An explicit set of keys.
    Keys(Selection<K>),
}

impl<K> Default for SelectedKeys<K> {
    fn default() -> Self {
        Self::Keys(Selection::new())
    }
}

impl<K> SelectedKeys<K> {
    /// Returns `true` for the select-all sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns `true` for an empty key set. The sentinel is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::All => false,
            Self::Keys(selection) => selection.is_empty(),
        }
    }

    /// Returns the concrete selection, or `None` for the sentinel.
    #[must_use]
    pub fn as_selection(&self) -> Option<&Selection<K>> {
        match self {
            Self::All => None,
            Self::Keys(selection) => Some(selection),
        }
    }
}

impl<K: Clone + Eq + Hash> SelectedKeys<K> {
    /// Returns `true` if `key` is in the set, or if this is the sentinel.
    ///
    /// This is a raw membership test; it knows nothing about disabled keys.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        match self {
            Self::All => true,
            Self::Keys(selection) => selection.contains(key),
        }
    }
}

impl<K: Eq + Hash> PartialEq for SelectedKeys<K> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::All, Self::All) => true,
            (Self::Keys(a), Self::Keys(b)) => a == b,
            _ => false,
        }
    }
}

impl<K: Eq + Hash> Eq for SelectedKeys<K> {}

impl<K> From<Selection<K>> for SelectedKeys<K> {
    fn from(selection: Selection<K>) -> Self {
        Self::Keys(selection)
    }
}

impl<K: Eq + Hash> FromIterator<K> for SelectedKeys<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::Keys(iter.into_iter().collect())
    }
}

impl<K: Eq + Hash, const N: usize> From<[K; N]> for SelectedKeys<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Eq + Hash> From<Vec<K>> for SelectedKeys<K> {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Eq + Hash> From<HashSet<K>> for SelectedKeys<K> {
    fn from(keys: HashSet<K>) -> Self {
        Self::Keys(Selection {
            keys,
            anchor_key: None,
            current_key: None,
        })
    }
}
