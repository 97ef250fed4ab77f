// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection and focus state for one collection.

use core::fmt;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::controllable::Controllable;
use crate::{DisabledBehavior, FocusStrategy, SelectedKeys, SelectionBehavior, SelectionMode};

/// Initial configuration for a [`MultipleSelectionState`].
///
/// Defaults: no selection, toggle behavior, disabled keys block everything,
/// empty selections allowed, duplicate change events suppressed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        default,
        bound(
            serialize = "K: serde::Serialize + Eq + Hash",
            deserialize = "K: serde::Deserialize<'de> + Eq + Hash"
        )
    )
)]
pub struct MultipleSelectionProps<K> {
    /// How many items may be selected.
    pub selection_mode: SelectionMode,
    /// Behavior of unmodified selection gestures.
    pub selection_behavior: SelectionBehavior,
    /// Reject changes that would empty a non-empty selection.
    pub disallow_empty_selection: bool,
    /// Emit a change even when the new selection equals the current one.
    pub allow_duplicate_selection_events: bool,
    /// What disabled keys block.
    pub disabled_behavior: DisabledBehavior,
    /// Host-owned selection. `Some` makes the selection controlled.
    pub selected_keys: Option<SelectedKeys<K>>,
    /// Starting selection in uncontrolled mode.
    pub default_selected_keys: Option<SelectedKeys<K>>,
    /// Keys excluded from interaction.
    pub disabled_keys: HashSet<K>,
}

impl<K> Default for MultipleSelectionProps<K> {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::None,
            selection_behavior: SelectionBehavior::Toggle,
            disallow_empty_selection: false,
            allow_duplicate_selection_events: false,
            disabled_behavior: DisabledBehavior::All,
            selected_keys: None,
            default_selected_keys: None,
            disabled_keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> MultipleSelectionProps<K> {
    /// Creates props with the given selection mode and all other defaults.
    #[must_use]
    pub fn new(selection_mode: SelectionMode) -> Self {
        Self {
            selection_mode,
            ..Self::default()
        }
    }

    /// Sets the selection behavior.
    #[must_use]
    pub fn with_selection_behavior(mut self, behavior: SelectionBehavior) -> Self {
        self.selection_behavior = behavior;
        self
    }

    /// Sets whether emptying a non-empty selection is rejected.
    #[must_use]
    pub fn with_disallow_empty_selection(mut self, disallow: bool) -> Self {
        self.disallow_empty_selection = disallow;
        self
    }

    /// Sets whether equal selections still emit change events.
    #[must_use]
    pub fn with_allow_duplicate_selection_events(mut self, allow: bool) -> Self {
        self.allow_duplicate_selection_events = allow;
        self
    }

    /// Sets what disabled keys block.
    #[must_use]
    pub fn with_disabled_behavior(mut self, behavior: DisabledBehavior) -> Self {
        self.disabled_behavior = behavior;
        self
    }

    /// Makes the selection controlled by the host.
    #[must_use]
    pub fn with_selected_keys(mut self, keys: impl Into<SelectedKeys<K>>) -> Self {
        self.selected_keys = Some(keys.into());
        self
    }

    /// Sets the starting selection for uncontrolled mode.
    #[must_use]
    pub fn with_default_selected_keys(mut self, keys: impl Into<SelectedKeys<K>>) -> Self {
        self.default_selected_keys = Some(keys.into());
        self
    }

    /// Sets the disabled keys.
    #[must_use]
    pub fn with_disabled_keys(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.disabled_keys = keys.into_iter().collect();
        self
    }
}

/// Selection and focus state for a collection.
///
/// This is the storage layer. It knows nothing about the items themselves;
/// [`SelectionManager`](crate::SelectionManager) combines it with a
/// [`Collection`](understory_collection::Collection) to implement the actual
/// selection gestures.
///
/// All writes to the selection go through [`set_selected_keys`], which
/// suppresses no-op changes (unless configured otherwise) and reconciles the
/// selection behavior afterwards.
///
/// [`set_selected_keys`]: Self::set_selected_keys
pub struct MultipleSelectionState<K> {
    selection_mode: SelectionMode,
    disallow_empty_selection: bool,
    allow_duplicate_selection_events: bool,
    disabled_behavior: DisabledBehavior,
    disabled_keys: HashSet<K>,
    /// Behavior requested by the host.
    selection_behavior_prop: SelectionBehavior,
    /// Behavior in effect; may temporarily differ from the prop.
    selection_behavior: SelectionBehavior,
    selected_keys: Controllable<SelectedKeys<K>>,
    is_focused: bool,
    focused_key: Option<K>,
    child_focus_strategy: FocusStrategy,
}

impl<K: fmt::Debug> fmt::Debug for MultipleSelectionState<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultipleSelectionState")
            .field("selection_mode", &self.selection_mode)
            .field("selection_behavior", &self.selection_behavior)
            .field("disallow_empty_selection", &self.disallow_empty_selection)
            .field("disabled_behavior", &self.disabled_behavior)
            .field("disabled_keys", &self.disabled_keys)
            .field("selected_keys", &self.selected_keys)
            .field("is_focused", &self.is_focused)
            .field("focused_key", &self.focused_key)
            .field("child_focus_strategy", &self.child_focus_strategy)
            .finish_non_exhaustive()
    }
}

impl<K> MultipleSelectionState<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates state from `props`.
    ///
    /// Whether the selection is controlled is decided here by
    /// `props.selected_keys`.
    pub fn new(props: MultipleSelectionProps<K>) -> Self {
        let default_keys = props.default_selected_keys.unwrap_or_default();
        Self {
            selection_mode: props.selection_mode,
            disallow_empty_selection: props.disallow_empty_selection,
            allow_duplicate_selection_events: props.allow_duplicate_selection_events,
            disabled_behavior: props.disabled_behavior,
            disabled_keys: props.disabled_keys,
            selection_behavior_prop: props.selection_behavior,
            selection_behavior: props.selection_behavior,
            selected_keys: Controllable::new(props.selected_keys, default_keys),
            is_focused: false,
            focused_key: None,
            child_focus_strategy: FocusStrategy::First,
        }
    }

    /// Returns this state with a selection change callback installed.
    #[must_use]
    pub fn with_on_selection_change(
        mut self,
        on_change: impl FnMut(&SelectedKeys<K>) + 'static,
    ) -> Self {
        self.selected_keys.set_on_change(on_change);
        self
    }

    /// Installs or replaces the selection change callback.
    pub fn set_on_selection_change(&mut self, on_change: impl FnMut(&SelectedKeys<K>) + 'static) {
        self.selected_keys.set_on_change(on_change);
    }

    /// Returns the selection mode.
    #[must_use]
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// Returns the behavior currently in effect.
    #[must_use]
    pub fn selection_behavior(&self) -> SelectionBehavior {
        self.selection_behavior
    }

    /// Returns whether emptying a non-empty selection is rejected.
    #[must_use]
    pub fn disallow_empty_selection(&self) -> bool {
        self.disallow_empty_selection
    }

    /// Returns whether equal selections still emit change events.
    #[must_use]
    pub fn allow_duplicate_selection_events(&self) -> bool {
        self.allow_duplicate_selection_events
    }

    /// Returns what disabled keys block.
    #[must_use]
    pub fn disabled_behavior(&self) -> DisabledBehavior {
        self.disabled_behavior
    }

    /// Returns the disabled keys.
    #[must_use]
    pub fn disabled_keys(&self) -> &HashSet<K> {
        &self.disabled_keys
    }

    /// Returns the effective selection, preferring the controlled value.
    #[must_use]
    pub fn selected_keys(&self) -> &SelectedKeys<K> {
        self.selected_keys.get()
    }

    /// Returns `true` if the host controls the selection.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.selected_keys.is_controlled()
    }

    /// Returns whether the collection has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Returns the focused key, if any.
    #[must_use]
    pub fn focused_key(&self) -> Option<&K> {
        self.focused_key.as_ref()
    }

    /// Returns which child of the focused item should receive focus.
    #[must_use]
    pub fn child_focus_strategy(&self) -> FocusStrategy {
        self.child_focus_strategy
    }

    /// Sets whether the collection has focus.
    pub fn set_focused(&mut self, is_focused: bool) {
        self.is_focused = is_focused;
    }

    /// Sets the focused key and the strategy for focusing its children.
    pub fn set_focused_key(&mut self, key: Option<K>, child_focus_strategy: FocusStrategy) {
        self.child_focus_strategy = child_focus_strategy;
        self.focused_key = key;
    }

    /// Sets the behavior in effect without touching the host's prop.
    pub fn set_selection_behavior(&mut self, behavior: SelectionBehavior) {
        self.selection_behavior = behavior;
    }

    /// Replaces the selection.
    ///
    /// Returns `true` if the change was accepted and reported. Nothing is
    /// stored in [`SelectionMode::None`]. Equal selections are dropped unless
    /// duplicate events are allowed.
    pub fn set_selected_keys(&mut self, keys: impl Into<SelectedKeys<K>>) -> bool {
        if self.selection_mode == SelectionMode::None {
            log::trace!("selection change ignored in selection mode none");
            return false;
        }
        let keys = keys.into();
        if !self.allow_duplicate_selection_events && keys == *self.selected_keys.get() {
            log::trace!("selection unchanged; change event suppressed");
            return false;
        }

        self.selected_keys.set(keys);
        self.reconcile_selection_behavior();
        true
    }

    /// Pushes a new host-controlled selection, or `None` to stop controlling.
    pub fn set_controlled_selected_keys(&mut self, keys: Option<SelectedKeys<K>>) {
        self.selected_keys.set_controlled(keys);
        self.reconcile_selection_behavior();
    }

    /// Updates the selection mode.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.selection_mode = mode;
    }

    /// Updates the host's selection behavior prop; the effective behavior follows it.
    pub fn set_selection_behavior_prop(&mut self, behavior: SelectionBehavior) {
        self.selection_behavior_prop = behavior;
        self.selection_behavior = behavior;
    }

    /// Updates whether emptying a non-empty selection is rejected.
    pub fn set_disallow_empty_selection(&mut self, disallow: bool) {
        self.disallow_empty_selection = disallow;
    }

    /// Updates whether equal selections still emit change events.
    pub fn set_allow_duplicate_selection_events(&mut self, allow: bool) {
        self.allow_duplicate_selection_events = allow;
    }

    /// Updates what disabled keys block.
    pub fn set_disabled_behavior(&mut self, behavior: DisabledBehavior) {
        self.disabled_behavior = behavior;
    }

    /// Replaces the disabled keys.
    pub fn set_disabled_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        self.disabled_keys = keys.into_iter().collect();
    }

    /// Falls back from a temporary toggle behavior (for example after a
    /// long-press on touch) once the selection is emptied.
    fn reconcile_selection_behavior(&mut self) {
        if self.selection_behavior_prop == SelectionBehavior::Replace
            && self.selection_behavior == SelectionBehavior::Toggle
            && matches!(self.selected_keys.get(), SelectedKeys::Keys(s) if s.is_empty())
        {
            log::debug!("selection emptied; selection behavior reverts to replace");
            self.selection_behavior = SelectionBehavior::Replace;
        }
    }
}
