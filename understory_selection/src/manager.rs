// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection queries and gestures over a collection.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;
use understory_collection::{Collection, Keys};

use crate::{
    DisabledBehavior, FocusStrategy, MultipleSelectionState, SelectedKeys, Selection,
    SelectionBehavior, SelectionEvent, SelectionMode,
};

/// A short-lived view combining a [`Collection`] with its selection state.
///
/// Create one per event (or per render) and drop it afterwards. All gestures
/// are silent no-ops when they do not apply: a mode that forbids them, a key
/// that cannot be selected, or a change that would empty a selection that
/// must stay non-empty.
pub struct SelectionManager<'a, K, C: ?Sized> {
    collection: &'a C,
    state: &'a mut MultipleSelectionState<K>,
}

impl<K: fmt::Debug, C: ?Sized> fmt::Debug for SelectionManager<'_, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionManager")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<'a, K, C> SelectionManager<'a, K, C>
where
    K: Clone + Eq + Hash,
    C: Collection<K> + ?Sized,
{
    /// Creates a manager over `collection` and `state`.
    pub fn new(collection: &'a C, state: &'a mut MultipleSelectionState<K>) -> Self {
        Self { collection, state }
    }

    /// Returns the collection this manager reads from.
    #[must_use]
    pub fn collection(&self) -> &'a C {
        self.collection
    }

    /// Returns the underlying state.
    #[must_use]
    pub fn state(&self) -> &MultipleSelectionState<K> {
        self.state
    }

    // --- configuration and focus passthroughs ---

    /// Returns the selection mode.
    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        self.state.selection_mode()
    }

    /// Returns the selection behavior currently in effect.
    #[must_use]
    pub fn selection_behavior(&self) -> SelectionBehavior {
        self.state.selection_behavior()
    }

    /// Overrides the selection behavior in effect.
    pub fn set_selection_behavior(&mut self, behavior: SelectionBehavior) {
        self.state.set_selection_behavior(behavior);
    }

    /// Returns whether emptying a non-empty selection is rejected.
    #[must_use]
    pub fn disallow_empty_selection(&self) -> bool {
        self.state.disallow_empty_selection()
    }

    /// Returns the disabled keys.
    #[must_use]
    pub fn disabled_keys(&self) -> &HashSet<K> {
        self.state.disabled_keys()
    }

    /// Returns whether the collection has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    /// Sets whether the collection has focus.
    pub fn set_focused(&mut self, is_focused: bool) {
        self.state.set_focused(is_focused);
    }

    /// Returns the focused key.
    #[must_use]
    pub fn focused_key(&self) -> Option<&K> {
        self.state.focused_key()
    }

    /// Returns which child of the focused item should receive focus.
    #[must_use]
    pub fn child_focus_strategy(&self) -> FocusStrategy {
        self.state.child_focus_strategy()
    }

    /// Sets the focused key.
    pub fn set_focused_key(&mut self, key: Option<K>, child_focus_strategy: FocusStrategy) {
        self.state.set_focused_key(key, child_focus_strategy);
    }

    // --- queries ---

    /// Returns the stored selection, ignoring the selection mode.
    #[must_use]
    pub fn raw_selection(&self) -> &SelectedKeys<K> {
        self.state.selected_keys()
    }

    /// Returns the selection as the user sees it: empty when selection is off.
    #[must_use]
    pub fn selected_keys(&self) -> SelectedKeys<K> {
        if self.selection_mode() == SelectionMode::None {
            return SelectedKeys::default();
        }
        self.raw_selection().clone()
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection_mode() == SelectionMode::None || self.raw_selection().is_empty()
    }

    /// Returns `true` if every selectable key is selected.
    #[must_use]
    pub fn is_select_all(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        match self.raw_selection() {
            SelectedKeys::All => true,
            SelectedKeys::Keys(selection) => Keys::new(self.collection)
                .filter(|key| self.can_select_item(key))
                .all(|key| selection.contains(key)),
        }
    }

    /// Returns `true` if `key` is part of the collection and disabled under
    /// [`DisabledBehavior::All`].
    #[must_use]
    pub fn is_disabled(&self, key: &K) -> bool {
        self.state.disabled_behavior() == DisabledBehavior::All && self.is_key_disabled(key)
    }

    /// Returns `true` if `key` reads as selected.
    ///
    /// Disabled keys never read as selected, not even under select-all.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        if self.selection_mode() == SelectionMode::None || self.is_key_disabled(key) {
            return false;
        }
        self.raw_selection().contains(key)
    }

    /// Returns `true` if `key` may be added to the selection.
    #[must_use]
    pub fn can_select_item(&self, key: &K) -> bool {
        self.selection_mode() != SelectionMode::None
            && self.collection.contains_key(key)
            && !self.is_key_disabled(key)
    }

    /// Returns `true` if the selection holds exactly `keys`.
    ///
    /// Select-all is compared as the set of selectable keys.
    #[must_use]
    pub fn is_selection_equal(&self, keys: &HashSet<K>) -> bool {
        if self.selection_mode() == SelectionMode::None {
            return keys.is_empty();
        }
        match self.raw_selection() {
            SelectedKeys::All => {
                let all = self.selectable_keys();
                all.len() == keys.len() && all.iter().all(|key| keys.contains(*key))
            }
            SelectedKeys::Keys(selection) => selection.is_same_set(keys),
        }
    }

    /// Returns the selected key that comes first in collection order.
    #[must_use]
    pub fn first_selected_key(&self) -> Option<&'a K> {
        match self.selection_mode() {
            SelectionMode::None => None,
            _ => match self.raw_selection() {
                SelectedKeys::All => Keys::new(self.collection).find(|k| self.can_select_item(k)),
                SelectedKeys::Keys(selection) => self
                    .ordered_items(selection)
                    .min_by_key(|item| item.index)
                    .map(|item| &item.key),
            },
        }
    }

    /// Returns the selected key that comes last in collection order.
    #[must_use]
    pub fn last_selected_key(&self) -> Option<&'a K> {
        match self.selection_mode() {
            SelectionMode::None => None,
            _ => match self.raw_selection() {
                SelectedKeys::All => {
                    let mut key = self.collection.last_key();
                    while let Some(k) = key {
                        if self.can_select_item(k) {
                            return Some(k);
                        }
                        key = self.collection.key_before(k);
                    }
                    None
                }
                SelectedKeys::Keys(selection) => self
                    .ordered_items(selection)
                    .max_by_key(|item| item.index)
                    .map(|item| &item.key),
            },
        }
    }

    // --- gestures ---

    /// Selects `key` the way a click or Enter/Space would, given `event`.
    ///
    /// In [`SelectionMode::Multiple`] the first matching rule wins:
    ///
    /// 1. Shift extends from the anchor, or replaces when there is no anchor.
    /// 2. Toggle behavior, Ctrl/Meta, or a touch/virtual pointer toggles.
    /// 3. Anything else replaces.
    pub fn select(&mut self, key: &K, event: SelectionEvent) {
        match self.selection_mode() {
            SelectionMode::None => {}
            SelectionMode::Single => self.replace_selection(key),
            SelectionMode::Multiple => {
                if event.modifiers.shift() {
                    if self.resolved_anchor().is_some() {
                        self.extend_selection(key);
                    } else {
                        self.replace_selection(key);
                    }
                } else if self.selection_behavior() == SelectionBehavior::Toggle
                    || event.modifiers.ctrl_or_meta()
                    || event.pointer_type.lacks_modifiers()
                {
                    self.toggle_selection(key);
                } else {
                    self.replace_selection(key);
                }
            }
        }
    }

    /// Selects exactly the selectable keys between the anchor and `to_key`.
    pub fn extend_selection(&mut self, to_key: &K) {
        if self.selection_mode() != SelectionMode::Multiple {
            log::trace!("extend_selection ignored outside multiple selection mode");
            return;
        }
        let Some(anchor) = self.resolved_anchor() else {
            log::trace!("extend_selection ignored without an anchor");
            return;
        };
        let collection = self.collection;
        let (Some(from), Some(to)) = (collection.item(&anchor), collection.item(to_key)) else {
            return;
        };
        let (start, end) = if from.index <= to.index {
            (&from.key, &to.key)
        } else {
            (&to.key, &from.key)
        };

        let mut selection =
            Selection::new().with_markers(Some(anchor.clone()), Some(to_key.clone()));
        let mut key = Some(start);
        while let Some(k) = key {
            if self.can_select_item(k) {
                selection.insert(k.clone());
            }
            if k == end {
                break;
            }
            key = collection.key_after(k);
        }
        self.commit(selection.into());
    }

    /// Adds `key` if unselected, otherwise removes it.
    pub fn toggle_selection(&mut self, key: &K) {
        match self.selection_mode() {
            SelectionMode::None => return,
            SelectionMode::Single if !self.is_selected(key) => {
                self.replace_selection(key);
                return;
            }
            _ => {}
        }

        let mut selection = match self.raw_selection() {
            SelectedKeys::All => self.selectable_keys().into_iter().cloned().collect(),
            SelectedKeys::Keys(selection) => selection.clone(),
        };
        if !selection.remove(key) {
            if !self.can_select_item(key) {
                log::trace!("toggle_selection ignored for a key that cannot be selected");
                return;
            }
            selection.insert(key.clone());
            selection.set_anchor_key(Some(key.clone()));
            selection.set_current_key(Some(key.clone()));
        }
        if self.would_empty(&selection) {
            log::trace!("toggle_selection would empty a selection that must stay non-empty");
            return;
        }

        if self.selection_mode() == SelectionMode::Multiple {
            self.state.set_selection_behavior(SelectionBehavior::Toggle);
        }
        self.commit(selection.into());
    }

    /// Selects exactly `key`.
    pub fn replace_selection(&mut self, key: &K) {
        if !self.can_select_item(key) {
            log::trace!("replace_selection ignored for a key that cannot be selected");
            return;
        }
        self.commit(Selection::single(key.clone()).into());
    }

    /// Replaces the selection with `keys`, dropping keys the collection does
    /// not know. Only the first key is kept in single selection mode.
    pub fn set_selected_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        let mode = self.selection_mode();
        if mode == SelectionMode::None {
            return;
        }
        let known = keys
            .into_iter()
            .filter(|key| self.collection.contains_key(key));
        let selection: Selection<K> = if mode == SelectionMode::Single {
            known.take(1).collect()
        } else {
            known.collect()
        };
        self.commit(selection.into());
    }

    /// Selects every item.
    pub fn select_all(&mut self) {
        if self.selection_mode() == SelectionMode::Multiple && !self.raw_selection().is_all() {
            self.commit(SelectedKeys::All);
        }
    }

    /// Clears the selection unless it must stay non-empty.
    pub fn clear_selection(&mut self) {
        if self.disallow_empty_selection() || self.raw_selection().is_empty() {
            return;
        }
        self.commit(SelectedKeys::default());
    }

    /// Flips between select-all and an empty selection.
    pub fn toggle_select_all(&mut self) {
        if self.is_select_all() {
            self.clear_selection();
        } else {
            self.select_all();
        }
    }

    // --- internals ---

    fn is_key_disabled(&self, key: &K) -> bool {
        self.state.disabled_keys().contains(key)
            || self.collection.item(key).is_some_and(|item| item.disabled)
    }

    /// Returns the anchor if it still names a selectable key.
    fn resolved_anchor(&self) -> Option<K> {
        let anchor = self.raw_selection().as_selection()?.anchor_key()?;
        self.can_select_item(anchor).then(|| anchor.clone())
    }

    fn selectable_keys(&self) -> Vec<&'a K> {
        Keys::new(self.collection)
            .filter(|key| self.can_select_item(key))
            .collect()
    }

    fn ordered_items<'s>(
        &'s self,
        selection: &'s Selection<K>,
    ) -> impl Iterator<Item = &'a understory_collection::CollectionItem<K>> + 's {
        let collection = self.collection;
        selection.iter().filter_map(move |key| collection.item(key))
    }

    fn would_empty(&self, next: &Selection<K>) -> bool {
        self.disallow_empty_selection() && next.is_empty() && !self.raw_selection().is_empty()
    }

    /// Single write path for every gesture.
    fn commit(&mut self, next: SelectedKeys<K>) {
        if self.selection_mode() == SelectionMode::None {
            return;
        }
        if self.disallow_empty_selection() && next.is_empty() && !self.raw_selection().is_empty()
        {
            log::trace!("selection change rejected: selection must stay non-empty");
            return;
        }
        self.state.set_selected_keys(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MultipleSelectionProps;
    use understory_collection::{CollectionItem, ListCollection};

    fn abc() -> ListCollection<&'static str> {
        ["a", "b", "c"]
            .into_iter()
            .map(|k| CollectionItem::new(k, k))
            .collect()
    }

    #[test]
    fn first_and_last_follow_collection_order() {
        let collection = abc();
        let mut state = MultipleSelectionState::new(
            MultipleSelectionProps::new(SelectionMode::Multiple)
                .with_default_selected_keys(["c", "a"]),
        );
        let manager = SelectionManager::new(&collection, &mut state);
        assert_eq!(manager.first_selected_key(), Some(&"a"));
        assert_eq!(manager.last_selected_key(), Some(&"c"));
    }

    #[test]
    fn item_level_disabled_flag_blocks_selection() {
        let collection: ListCollection<&str> = [
            CollectionItem::new("a", "A"),
            CollectionItem::new("b", "B").with_disabled(true),
        ]
        .into_iter()
        .collect();
        let mut state =
            MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
        let mut manager = SelectionManager::new(&collection, &mut state);
        assert!(!manager.can_select_item(&"b"));
        manager.replace_selection(&"b");
        assert!(manager.is_empty());
    }

    #[test]
    fn stale_anchor_is_ignored() {
        let collection = abc();
        let mut state = MultipleSelectionState::new(
            MultipleSelectionProps::new(SelectionMode::Multiple).with_default_selected_keys(
                Selection::from_iter(["a"]).with_markers(Some("gone"), Some("gone")),
            ),
        );
        let mut manager = SelectionManager::new(&collection, &mut state);
        manager.select(&"c", SelectionEvent::shift());
        assert!(manager.is_selection_equal(&["c"].into_iter().collect()));
    }
}
