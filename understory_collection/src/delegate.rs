// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The keyboard delegate capability.

/// Navigation queries a collection answers for keyboard interaction.
///
/// Every method has a default that returns `None`, meaning "this collection
/// does not move in that direction". Interaction layers never branch on the
/// kind of collection; they only look at what the delegate returns.
///
/// Keys are returned by value so delegates may compute keys that are not
/// stored anywhere (for example, dates in a calendar grid).
pub trait KeyboardDelegate<K> {
    /// Returns the key visually below `key`.
    fn key_below(&self, key: &K) -> Option<K> {
        let _ = key;
        None
    }

    /// Returns the key visually above `key`.
    fn key_above(&self, key: &K) -> Option<K> {
        let _ = key;
        None
    }

    /// Returns the key visually to the left of `key`.
    fn key_left_of(&self, key: &K) -> Option<K> {
        let _ = key;
        None
    }

    /// Returns the key visually to the right of `key`.
    fn key_right_of(&self, key: &K) -> Option<K> {
        let _ = key;
        None
    }

    /// Returns the key one page below `key`.
    fn key_page_below(&self, key: &K) -> Option<K> {
        let _ = key;
        None
    }

    /// Returns the key one page above `key`.
    fn key_page_above(&self, key: &K) -> Option<K> {
        let _ = key;
        None
    }

    /// Returns the first key.
    ///
    /// `from` is the currently focused key, if any. `global` is set when the
    /// user asked for the first key of the whole collection rather than of the
    /// current section or row (for example, Ctrl+Home in a grid).
    fn first_key(&self, from: Option<&K>, global: bool) -> Option<K> {
        let _ = (from, global);
        None
    }

    /// Returns the last key. See [`KeyboardDelegate::first_key`].
    fn last_key(&self, from: Option<&K>, global: bool) -> Option<K> {
        let _ = (from, global);
        None
    }

    /// Returns the first key at or after `from` whose label matches `search`.
    ///
    /// When `from` is `None` the search starts at the first key.
    fn key_for_search(&self, search: &str, from: Option<&K>) -> Option<K> {
        let _ = (search, from);
        None
    }
}

/// Layout axis of a linear collection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Items flow left to right (or right to left).
    Horizontal,
    /// Items flow top to bottom.
    #[default]
    Vertical,
}

/// Reading direction of the surrounding locale.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left. Horizontal navigation is mirrored.
    Rtl,
}

impl TextDirection {
    /// Returns `true` for [`TextDirection::Rtl`].
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}
