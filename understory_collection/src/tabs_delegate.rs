// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard delegate for tab lists.

use core::fmt;

use crate::{Collection, KeyboardDelegate, Orientation, TextDirection};

/// Keyboard navigation for a tab list.
///
/// Unlike [`ListKeyboardDelegate`](crate::ListKeyboardDelegate), moving past
/// either end wraps around, and only the arrow keys along the tab list's
/// orientation move. Disabled tabs are always skipped.
pub struct TabsKeyboardDelegate<'a, C: ?Sized> {
    collection: &'a C,
    orientation: Orientation,
    direction: TextDirection,
}

impl<C: ?Sized> fmt::Debug for TabsKeyboardDelegate<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabsKeyboardDelegate")
            .field("orientation", &self.orientation)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl<'a, C: ?Sized> TabsKeyboardDelegate<'a, C> {
    /// Creates a delegate for a tab list laid out along `orientation`.
    pub fn new(collection: &'a C, orientation: Orientation, direction: TextDirection) -> Self {
        Self {
            collection,
            orientation,
            direction,
        }
    }

    fn flip_direction(&self) -> bool {
        self.direction.is_rtl() && self.orientation == Orientation::Horizontal
    }

    fn is_disabled<K>(&self, key: &K) -> bool
    where
        C: Collection<K>,
    {
        self.collection.item(key).is_none_or(|item| item.disabled)
    }

    /// Next enabled key, wrapping to the start. Bounded by the collection size
    /// so a fully disabled list terminates.
    fn next_key<K: Clone>(&self, key: &K) -> Option<K>
    where
        C: Collection<K>,
    {
        let mut current = key.clone();
        for _ in 0..self.collection.size() {
            let next = self
                .collection
                .key_after(&current)
                .or_else(|| self.collection.first_key())?
                .clone();
            if !self.is_disabled(&next) {
                return Some(next);
            }
            current = next;
        }
        None
    }

    fn previous_key<K: Clone>(&self, key: &K) -> Option<K>
    where
        C: Collection<K>,
    {
        let mut current = key.clone();
        for _ in 0..self.collection.size() {
            let prev = self
                .collection
                .key_before(&current)
                .or_else(|| self.collection.last_key())?
                .clone();
            if !self.is_disabled(&prev) {
                return Some(prev);
            }
            current = prev;
        }
        None
    }
}

impl<K, C> KeyboardDelegate<K> for TabsKeyboardDelegate<'_, C>
where
    K: Clone,
    C: Collection<K> + ?Sized,
{
    fn key_left_of(&self, key: &K) -> Option<K> {
        if self.flip_direction() {
            return self.next_key(key);
        }
        match self.orientation {
            Orientation::Horizontal => self.previous_key(key),
            Orientation::Vertical => None,
        }
    }

    fn key_right_of(&self, key: &K) -> Option<K> {
        if self.flip_direction() {
            return self.previous_key(key);
        }
        match self.orientation {
            Orientation::Horizontal => self.next_key(key),
            Orientation::Vertical => None,
        }
    }

    fn key_above(&self, key: &K) -> Option<K> {
        match self.orientation {
            Orientation::Vertical => self.previous_key(key),
            Orientation::Horizontal => None,
        }
    }

    fn key_below(&self, key: &K) -> Option<K> {
        match self.orientation {
            Orientation::Vertical => self.next_key(key),
            Orientation::Horizontal => None,
        }
    }

    fn first_key(&self, _from: Option<&K>, _global: bool) -> Option<K> {
        let first = self.collection.first_key()?;
        if self.is_disabled(first) {
            self.next_key(first)
        } else {
            Some(first.clone())
        }
    }

    fn last_key(&self, _from: Option<&K>, _global: bool) -> Option<K> {
        let last = self.collection.last_key()?;
        if self.is_disabled(last) {
            self.previous_key(last)
        } else {
            Some(last.clone())
        }
    }
}
