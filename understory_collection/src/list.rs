// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flat, `Vec`-backed collection.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::{Collection, CollectionItem};

/// A flat collection of items in insertion order.
///
/// Items live in a `Vec`, with a hashed key index for O(1) lookups. Keys are
/// expected to be unique; inserting a key that is already present replaces
/// the existing item in place and keeps its position.
#[derive(Clone, Debug)]
pub struct ListCollection<K> {
    items: Vec<CollectionItem<K>>,
    index: HashMap<K, usize>,
}

impl<K> Default for ListCollection<K> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K> ListCollection<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item`, or replaces the item with the same key.
    pub fn push(&mut self, mut item: CollectionItem<K>) {
        if let Some(&idx) = self.index.get(&item.key) {
            item.index = idx;
            self.items[idx] = item;
            return;
        }

        let idx = self.items.len();
        item.index = idx;
        self.index.insert(item.key.clone(), idx);
        self.items.push(item);
    }

    /// Removes the item with `key`, returning it if it was present.
    ///
    /// Items after the removed one shift down by one position.
    pub fn remove(&mut self, key: &K) -> Option<CollectionItem<K>> {
        let idx = self.index.remove(key)?;
        let removed = self.items.remove(idx);
        for (offset, item) in self.items[idx..].iter_mut().enumerate() {
            item.index = idx + offset;
            self.index.insert(item.key.clone(), idx + offset);
        }
        Some(removed)
    }

    /// Sets the `disabled` flag of the item with `key`, if present.
    pub fn set_disabled(&mut self, key: &K, disabled: bool) {
        if let Some(&idx) = self.index.get(key) {
            self.items[idx].disabled = disabled;
        }
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    /// Returns the items in collection order.
    #[must_use]
    pub fn items(&self) -> &[CollectionItem<K>] {
        &self.items
    }

    /// Returns the item at `index`, if in range.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&CollectionItem<K>> {
        self.items.get(index)
    }
}

impl<K> FromIterator<CollectionItem<K>> for ListCollection<K>
where
    K: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = CollectionItem<K>>>(iter: I) -> Self {
        let mut collection = Self::new();
        for item in iter {
            collection.push(item);
        }
        collection
    }
}

impl<K> Collection<K> for ListCollection<K>
where
    K: Clone + Eq + Hash,
{
    fn size(&self) -> usize {
        self.items.len()
    }

    fn item(&self, key: &K) -> Option<&CollectionItem<K>> {
        self.index.get(key).map(|&idx| &self.items[idx])
    }

    fn first_key(&self) -> Option<&K> {
        self.items.first().map(|item| &item.key)
    }

    fn last_key(&self) -> Option<&K> {
        self.items.last().map(|item| &item.key)
    }

    fn key_after(&self, key: &K) -> Option<&K> {
        let idx = *self.index.get(key)?;
        self.items.get(idx + 1).map(|item| &item.key)
    }

    fn key_before(&self, key: &K) -> Option<&K> {
        let idx = *self.index.get(key)?;
        let prev = idx.checked_sub(1)?;
        self.items.get(prev).map(|item| &item.key)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}
