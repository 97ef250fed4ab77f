// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard delegate for flat lists (listboxes, menus, selects).

use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::{Collection, KeyboardDelegate, Orientation, TextDirection};

/// Default number of items moved by Page Up / Page Down.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Keyboard navigation over a linear [`Collection`].
///
/// - Disabled items (the item's own flag, or membership in the optional
///   disabled key set) are skipped by every query.
/// - A vertical list answers up/down; a horizontal list answers left/right,
///   mirrored for [`TextDirection::Rtl`].
/// - Paging moves [`page_size`](Self::with_page_size) enabled items, stopping
///   at the end of the list.
/// - Search is a case-insensitive prefix match against
///   [`CollectionItem::text_value`](crate::CollectionItem::text_value).
///
/// The delegate is a cheap borrowed view; build a new one whenever the
/// collection changes.
pub struct ListKeyboardDelegate<'a, K, C: ?Sized> {
    collection: &'a C,
    disabled_keys: Option<&'a HashSet<K>>,
    orientation: Orientation,
    direction: TextDirection,
    page_size: usize,
}

impl<K, C: ?Sized> fmt::Debug for ListKeyboardDelegate<'_, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListKeyboardDelegate")
            .field("has_disabled_keys", &self.disabled_keys.is_some())
            .field("orientation", &self.orientation)
            .field("direction", &self.direction)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl<'a, K, C> ListKeyboardDelegate<'a, K, C>
where
    K: Clone + Eq + Hash,
    C: Collection<K> + ?Sized,
{
    /// Creates a vertical, left-to-right delegate over `collection`.
    pub fn new(collection: &'a C) -> Self {
        Self {
            collection,
            disabled_keys: None,
            orientation: Orientation::Vertical,
            direction: TextDirection::Ltr,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Also skips keys in `disabled_keys`.
    #[must_use]
    pub fn with_disabled_keys(mut self, disabled_keys: &'a HashSet<K>) -> Self {
        self.disabled_keys = Some(disabled_keys);
        self
    }

    /// Sets the layout axis.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the reading direction used for horizontal lists.
    #[must_use]
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Sets how many enabled items Page Up / Page Down move. Zero is treated as one.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    fn is_disabled(&self, key: &K) -> bool {
        let item_disabled = self.collection.item(key).is_none_or(|item| item.disabled);
        item_disabled || self.disabled_keys.is_some_and(|keys| keys.contains(key))
    }

    fn next_enabled(&self, key: &K) -> Option<K> {
        let mut next = self.collection.key_after(key);
        while let Some(candidate) = next {
            if !self.is_disabled(candidate) {
                return Some(candidate.clone());
            }
            next = self.collection.key_after(candidate);
        }
        None
    }

    fn previous_enabled(&self, key: &K) -> Option<K> {
        let mut prev = self.collection.key_before(key);
        while let Some(candidate) = prev {
            if !self.is_disabled(candidate) {
                return Some(candidate.clone());
            }
            prev = self.collection.key_before(candidate);
        }
        None
    }

    fn first_enabled(&self) -> Option<K> {
        let first = self.collection.first_key()?;
        if self.is_disabled(first) {
            self.next_enabled(first)
        } else {
            Some(first.clone())
        }
    }

    fn last_enabled(&self) -> Option<K> {
        let last = self.collection.last_key()?;
        if self.is_disabled(last) {
            self.previous_enabled(last)
        } else {
            Some(last.clone())
        }
    }

    fn step(&self, key: &K, forward: bool) -> Option<K> {
        if forward {
            self.next_enabled(key)
        } else {
            self.previous_enabled(key)
        }
    }

    fn page(&self, key: &K, forward: bool) -> Option<K> {
        let mut current = self.step(key, forward)?;
        for _ in 1..self.page_size {
            match self.step(&current, forward) {
                Some(next) => current = next,
                None => break,
            }
        }
        Some(current)
    }
}

impl<K, C> KeyboardDelegate<K> for ListKeyboardDelegate<'_, K, C>
where
    K: Clone + Eq + Hash,
    C: Collection<K> + ?Sized,
{
    fn key_below(&self, key: &K) -> Option<K> {
        match self.orientation {
            Orientation::Vertical => self.next_enabled(key),
            Orientation::Horizontal => None,
        }
    }

    fn key_above(&self, key: &K) -> Option<K> {
        match self.orientation {
            Orientation::Vertical => self.previous_enabled(key),
            Orientation::Horizontal => None,
        }
    }

    fn key_left_of(&self, key: &K) -> Option<K> {
        match self.orientation {
            Orientation::Horizontal => self.step(key, self.direction.is_rtl()),
            Orientation::Vertical => None,
        }
    }

    fn key_right_of(&self, key: &K) -> Option<K> {
        match self.orientation {
            Orientation::Horizontal => self.step(key, !self.direction.is_rtl()),
            Orientation::Vertical => None,
        }
    }

    fn key_page_below(&self, key: &K) -> Option<K> {
        self.page(key, true)
    }

    fn key_page_above(&self, key: &K) -> Option<K> {
        self.page(key, false)
    }

    fn first_key(&self, _from: Option<&K>, _global: bool) -> Option<K> {
        self.first_enabled()
    }

    fn last_key(&self, _from: Option<&K>, _global: bool) -> Option<K> {
        self.last_enabled()
    }

    fn key_for_search(&self, search: &str, from: Option<&K>) -> Option<K> {
        let mut key = match from {
            Some(from) if self.collection.contains_key(from) => Some(from.clone()),
            _ => self.first_enabled(),
        };

        while let Some(candidate) = key {
            if let Some(item) = self.collection.item(&candidate)
                && !self.is_disabled(&candidate)
                && starts_with_ignore_case(&item.text_value, search)
            {
                return Some(candidate);
            }
            key = self.next_enabled(&candidate);
        }
        None
    }
}

/// Case-insensitive prefix test.
///
/// Compares lowercase expansions char by char, which folds ASCII and most
/// alphabetic scripts without locale tables.
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return false;
    }
    let mut text = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| text.next() == Some(p))
}
