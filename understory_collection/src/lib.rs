// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_collection --heading-base-level=0

//! Understory Collection: ordered item collections and keyboard delegates.
//!
//! Selection and focus logic needs two things from whatever owns the items:
//!
//! - A way to walk the items in a stable order and look up per-item metadata.
//!   That is the [`Collection`] trait. [`ListCollection`] is a ready-made
//!   implementation backed by a `Vec` plus a key index.
//! - A way to answer "which key is below / left of / a page after this one?".
//!   That is the [`KeyboardDelegate`] trait. Each widget kind answers these
//!   questions differently: a vertical list ignores left/right, a horizontal
//!   tab strip wraps around, a calendar grid moves by whole weeks.
//!
//! Consumers such as `understory_selection` and `understory_event_state` only
//! ever talk to these traits, so one selection engine drives listboxes, menus,
//! tab lists, and date grids alike.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_collection::{
//!     Collection, CollectionItem, KeyboardDelegate, ListCollection, ListKeyboardDelegate,
//! };
//!
//! let collection: ListCollection<&str> = [
//!     CollectionItem::new("apple", "Apple"),
//!     CollectionItem::new("banana", "Banana").with_disabled(true),
//!     CollectionItem::new("cherry", "Cherry"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(collection.size(), 3);
//!
//! let delegate = ListKeyboardDelegate::new(&collection);
//!
//! // Disabled items are skipped by navigation.
//! assert_eq!(delegate.key_below(&"apple"), Some("cherry"));
//!
//! // Type-ahead search is a case-insensitive prefix match.
//! assert_eq!(delegate.key_for_search("CH", None), Some("cherry"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod delegate;
mod list;
mod list_delegate;
mod tabs_delegate;

pub use delegate::{KeyboardDelegate, Orientation, TextDirection};
pub use list::ListCollection;
pub use list_delegate::ListKeyboardDelegate;
pub use tabs_delegate::TabsKeyboardDelegate;

use alloc::string::String;

/// Descriptor for a single item in a [`Collection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionItem<K> {
    /// Opaque key identifying the item. Must be unique within its collection.
    pub key: K,
    /// Plain-text label, used for type-ahead search.
    pub text_value: String,
    /// Whether the item itself is disabled.
    pub disabled: bool,
    /// Position of the item in collection order.
    ///
    /// Collections assign this when the item is inserted; any value set by the
    /// caller is overwritten.
    pub index: usize,
}

impl<K> CollectionItem<K> {
    /// Creates an enabled item with the given key and label.
    pub fn new(key: K, text_value: impl Into<String>) -> Self {
        Self {
            key,
            text_value: text_value.into(),
            disabled: false,
            index: 0,
        }
    }

    /// Returns this item with its `disabled` flag set.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Read access to an ordered set of keyed items.
///
/// Iteration order must be stable between mutations of the collection;
/// selection ranges and navigation both rely on it.
pub trait Collection<K> {
    /// Returns the number of items.
    fn size(&self) -> usize;

    /// Returns the item for `key`, if it is part of the collection.
    fn item(&self, key: &K) -> Option<&CollectionItem<K>>;

    /// Returns the first key in collection order.
    fn first_key(&self) -> Option<&K>;

    /// Returns the last key in collection order.
    fn last_key(&self) -> Option<&K>;

    /// Returns the key following `key`, or `None` at the end or for unknown keys.
    fn key_after(&self, key: &K) -> Option<&K>;

    /// Returns the key preceding `key`, or `None` at the start or for unknown keys.
    fn key_before(&self, key: &K) -> Option<&K>;

    /// Returns `true` if `key` is part of the collection.
    fn contains_key(&self, key: &K) -> bool {
        self.item(key).is_some()
    }

    /// Returns an iterator over all keys in collection order.
    ///
    /// For unsized collections (`dyn Collection<K>`), use [`Keys::new`].
    fn keys(&self) -> Keys<'_, K, Self>
    where
        Self: Sized,
    {
        Keys::new(self)
    }
}

/// Iterator over the keys of a [`Collection`], created by [`Collection::keys`].
pub struct Keys<'a, K, C: ?Sized> {
    collection: &'a C,
    next: Option<&'a K>,
}

impl<'a, K, C> Keys<'a, K, C>
where
    C: Collection<K> + ?Sized,
{
    /// Creates an iterator over the keys of `collection`.
    pub fn new(collection: &'a C) -> Self {
        Self {
            collection,
            next: collection.first_key(),
        }
    }
}

impl<K: core::fmt::Debug, C: ?Sized> core::fmt::Debug for Keys<'_, K, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Keys").field("next", &self.next).finish()
    }
}

impl<'a, K, C> Iterator for Keys<'a, K, C>
where
    C: Collection<K> + ?Sized,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.collection.key_after(current);
        Some(current)
    }
}
