// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard and focus handling for selectable collections.
//!
//! [`SelectableCollection`] turns key presses and focus changes into calls on
//! a [`SelectionManager`] and a [`KeyboardDelegate`]. It never looks at what
//! kind of collection it drives; the delegate decides where each key moves.
//!
//! ## Usage
//!
//! 1) Keep one [`SelectableCollection`] per collection widget.
//! 2) On every key press, build a manager and a delegate and call
//!    [`SelectableCollection::on_key_down`]. Suppress the host's default
//!    action when it returns [`KeyOutcome::Handled`].
//! 3) Forward focus changes to [`on_focus_in`](SelectableCollection::on_focus_in)
//!    and [`on_focus_out`](SelectableCollection::on_focus_out).
//! 4) Call [`tick`](SelectableCollection::tick) from a timer so that an idle
//!    type-ahead search expires, and [`reset`](SelectableCollection::reset)
//!    when the widget goes away.
//!
//! ## Minimal example
//!
//! ```
//! use understory_collection::{CollectionItem, ListCollection, ListKeyboardDelegate};
//! use understory_event_state::keyboard::{KeyboardEvent, NamedKey};
//! use understory_event_state::selectable::{
//!     InteractionState, SelectableCollection, SelectableCollectionOptions,
//! };
//! use understory_selection::{
//!     MultipleSelectionProps, MultipleSelectionState, SelectionManager, SelectionMode,
//! };
//!
//! let items: ListCollection<&str> = ["one", "two", "three"]
//!     .into_iter()
//!     .map(|k| CollectionItem::new(k, k))
//!     .collect();
//! let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
//! let mut interaction =
//!     SelectableCollection::new(SelectableCollectionOptions::default().with_select_on_focus(true));
//!
//! let delegate = ListKeyboardDelegate::new(&items);
//! let mut manager = SelectionManager::new(&items, &mut state);
//! interaction.on_focus_in(&mut manager, &delegate, false);
//! interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::new(NamedKey::ArrowDown), 0);
//!
//! assert_eq!(manager.focused_key(), Some(&"two"));
//! assert!(manager.is_selected(&"two"));
//! assert_eq!(interaction.interaction_state(), InteractionState::Focused);
//! ```

use core::hash::Hash;

use understory_collection::{Collection, KeyboardDelegate, TextDirection};
use understory_selection::{
    FocusStrategy, PointerType, SelectionEvent, SelectionManager, SelectionMode,
};

use crate::keyboard::{Key, KeyboardEvent, NamedKey};
use crate::typeahead::TypeSelect;

/// Behavior switches for a [`SelectableCollection`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectableCollectionOptions {
    /// Moving focus also replaces the selection with the focused key.
    pub select_on_focus: bool,
    /// Escape leaves the selection alone.
    pub disallow_empty_selection: bool,
    /// Ctrl/Cmd+A does nothing.
    pub disallow_select_all: bool,
    /// Printable characters do not search.
    pub disallow_type_ahead: bool,
    /// Arrow keys wrap from one end of the collection to the other.
    pub should_focus_wrap: bool,
    /// Reading direction; flips the child focus strategy for Left/Right.
    pub direction: TextDirection,
}

impl SelectableCollectionOptions {
    /// Sets [`select_on_focus`](Self::select_on_focus).
    #[must_use]
    pub fn with_select_on_focus(mut self, value: bool) -> Self {
        self.select_on_focus = value;
        self
    }

    /// Sets [`disallow_empty_selection`](Self::disallow_empty_selection).
    #[must_use]
    pub fn with_disallow_empty_selection(mut self, value: bool) -> Self {
        self.disallow_empty_selection = value;
        self
    }

    /// Sets [`disallow_select_all`](Self::disallow_select_all).
    #[must_use]
    pub fn with_disallow_select_all(mut self, value: bool) -> Self {
        self.disallow_select_all = value;
        self
    }

    /// Sets [`disallow_type_ahead`](Self::disallow_type_ahead).
    #[must_use]
    pub fn with_disallow_type_ahead(mut self, value: bool) -> Self {
        self.disallow_type_ahead = value;
        self
    }

    /// Sets [`should_focus_wrap`](Self::should_focus_wrap).
    #[must_use]
    pub fn with_should_focus_wrap(mut self, value: bool) -> Self {
        self.should_focus_wrap = value;
        self
    }

    /// Sets [`direction`](Self::direction).
    #[must_use]
    pub fn with_direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// Coarse interaction phase of a collection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// The collection does not have focus.
    #[default]
    Idle,
    /// The collection has focus.
    Focused,
    /// A type-ahead search is in progress.
    TypeaheadActive,
}

/// Whether a key press was consumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// The key did something; the host should suppress its default action.
    Handled,
    /// The key is not meaningful here.
    Ignored,
}

impl KeyOutcome {
    /// Returns `true` for [`KeyOutcome::Handled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

/// Keyboard and focus state machine for a selectable collection.
#[derive(Clone, Debug, Default)]
pub struct SelectableCollection {
    options: SelectableCollectionOptions,
    state: InteractionState,
    type_select: TypeSelect,
}

impl SelectableCollection {
    /// Creates an idle state machine.
    #[must_use]
    pub fn new(options: SelectableCollectionOptions) -> Self {
        Self {
            options,
            state: InteractionState::Idle,
            type_select: TypeSelect::new(),
        }
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &SelectableCollectionOptions {
        &self.options
    }

    /// Replaces the options.
    pub fn set_options(&mut self, options: SelectableCollectionOptions) {
        self.options = options;
    }

    /// Returns the current interaction phase.
    #[must_use]
    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// Returns the type-ahead buffer.
    #[must_use]
    pub fn type_select(&self) -> &TypeSelect {
        &self.type_select
    }

    /// Expires an idle type-ahead search. Returns `true` if one expired.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let expired = self.type_select.tick(now_ms);
        if expired && self.state == InteractionState::TypeaheadActive {
            self.state = InteractionState::Focused;
        }
        expired
    }

    /// Cancels pending type-ahead and returns to [`InteractionState::Idle`].
    pub fn reset(&mut self) {
        self.type_select.cancel();
        self.state = InteractionState::Idle;
    }

    /// Focuses the first selected key, else the delegate's first or last key,
    /// as when a menu or listbox opens. Returns the focused key.
    pub fn auto_focus<K, C, D>(
        &mut self,
        manager: &mut SelectionManager<'_, K, C>,
        delegate: &D,
        strategy: FocusStrategy,
    ) -> Option<K>
    where
        K: Clone + Eq + Hash,
        C: Collection<K> + ?Sized,
        D: KeyboardDelegate<K> + ?Sized,
    {
        let key = match manager.first_selected_key() {
            Some(key) => Some(key.clone()),
            None => match strategy {
                FocusStrategy::First => delegate.first_key(None, false),
                FocusStrategy::Last => delegate.last_key(None, false),
            },
        };
        manager.set_focused(true);
        manager.set_focused_key(key.clone(), FocusStrategy::First);
        self.state = InteractionState::Focused;
        key
    }

    /// Handles focus entering the collection.
    ///
    /// `entered_from_after` is `true` when focus came from an element after
    /// the collection (Shift+Tab), which lands on the last key instead of the
    /// first.
    pub fn on_focus_in<K, C, D>(
        &mut self,
        manager: &mut SelectionManager<'_, K, C>,
        delegate: &D,
        entered_from_after: bool,
    ) where
        K: Clone + Eq + Hash,
        C: Collection<K> + ?Sized,
        D: KeyboardDelegate<K> + ?Sized,
    {
        if self.state == InteractionState::Idle {
            self.state = InteractionState::Focused;
        }
        if manager.is_focused() {
            return;
        }
        manager.set_focused(true);
        if manager.focused_key().is_some() {
            return;
        }

        let key = if entered_from_after {
            manager
                .last_selected_key()
                .cloned()
                .or_else(|| delegate.last_key(None, false))
        } else {
            manager
                .first_selected_key()
                .cloned()
                .or_else(|| delegate.first_key(None, false))
        };
        if let Some(key) = key {
            manager.set_focused_key(Some(key.clone()), FocusStrategy::First);
            if self.options.select_on_focus {
                manager.replace_selection(&key);
            }
        }
    }

    /// Handles focus leaving the collection.
    pub fn on_focus_out<K, C>(&mut self, manager: &mut SelectionManager<'_, K, C>)
    where
        K: Clone + Eq + Hash,
        C: Collection<K> + ?Sized,
    {
        self.reset();
        manager.set_focused(false);
    }

    /// Handles a key press at time `now_ms`.
    pub fn on_key_down<K, C, D>(
        &mut self,
        manager: &mut SelectionManager<'_, K, C>,
        delegate: &D,
        event: &KeyboardEvent,
        now_ms: u64,
    ) -> KeyOutcome
    where
        K: Clone + Eq + Hash,
        C: Collection<K> + ?Sized,
        D: KeyboardDelegate<K> + ?Sized,
    {
        self.tick(now_ms);
        if self.state == InteractionState::Idle {
            self.state = InteractionState::Focused;
            manager.set_focused(true);
        }

        let outcome = match event.key {
            Key::Named(NamedKey::Escape) => {
                if !self.options.disallow_empty_selection {
                    manager.clear_selection();
                }
                self.reset();
                return KeyOutcome::Handled;
            }
            Key::Named(named) => self.on_named_key(manager, delegate, named, event),
            Key::Character(c) => self.on_character(manager, delegate, c, event, now_ms),
        };

        if event.key.printable().is_none() {
            self.type_select.restart(now_ms);
        }
        self.state = if self.type_select.is_active() {
            InteractionState::TypeaheadActive
        } else {
            InteractionState::Focused
        };
        outcome
    }

    fn on_named_key<K, C, D>(
        &mut self,
        manager: &mut SelectionManager<'_, K, C>,
        delegate: &D,
        key: NamedKey,
        event: &KeyboardEvent,
    ) -> KeyOutcome
    where
        K: Clone + Eq + Hash,
        C: Collection<K> + ?Sized,
        D: KeyboardDelegate<K> + ?Sized,
    {
        let focused = manager.focused_key().cloned();
        let focused = focused.as_ref();
        let rtl = self.options.direction.is_rtl();

        match key {
            NamedKey::ArrowDown => {
                let next = match focused {
                    Some(key) => delegate.key_below(key),
                    None => delegate.first_key(None, false),
                };
                let next = next.or_else(|| self.wrap(|| delegate.first_key(focused, false)));
                self.navigate_to(manager, next, FocusStrategy::First, event)
            }
            NamedKey::ArrowUp => {
                let next = match focused {
                    Some(key) => delegate.key_above(key),
                    None => delegate.last_key(None, false),
                };
                let next = next.or_else(|| self.wrap(|| delegate.last_key(focused, false)));
                self.navigate_to(manager, next, FocusStrategy::First, event)
            }
            NamedKey::ArrowLeft => {
                let next = match focused {
                    Some(key) => delegate.key_left_of(key),
                    None => delegate.last_key(None, false),
                };
                let strategy = if rtl {
                    FocusStrategy::First
                } else {
                    FocusStrategy::Last
                };
                self.navigate_to(manager, next, strategy, event)
            }
            NamedKey::ArrowRight => {
                let next = match focused {
                    Some(key) => delegate.key_right_of(key),
                    None => delegate.first_key(None, false),
                };
                let strategy = if rtl {
                    FocusStrategy::Last
                } else {
                    FocusStrategy::First
                };
                self.navigate_to(manager, next, strategy, event)
            }
            NamedKey::Home | NamedKey::End => {
                let global = event.ctrl_or_meta();
                let target = if key == NamedKey::Home {
                    delegate.first_key(focused, global)
                } else {
                    delegate.last_key(focused, global)
                };
                let Some(target) = target else {
                    return KeyOutcome::Ignored;
                };
                manager.set_focused_key(Some(target.clone()), FocusStrategy::First);
                if global && event.shift() && manager.selection_mode() == SelectionMode::Multiple {
                    manager.extend_selection(&target);
                } else if self.options.select_on_focus {
                    manager.replace_selection(&target);
                }
                KeyOutcome::Handled
            }
            NamedKey::PageDown => {
                let next = focused.and_then(|key| delegate.key_page_below(key));
                self.navigate_to(manager, next, FocusStrategy::First, event)
            }
            NamedKey::PageUp => {
                let next = focused.and_then(|key| delegate.key_page_above(key));
                self.navigate_to(manager, next, FocusStrategy::First, event)
            }
            NamedKey::Enter => self.activate(manager, event),
            NamedKey::Escape | NamedKey::Tab => KeyOutcome::Ignored,
        }
    }

    fn on_character<K, C, D>(
        &mut self,
        manager: &mut SelectionManager<'_, K, C>,
        delegate: &D,
        c: char,
        event: &KeyboardEvent,
        now_ms: u64,
    ) -> KeyOutcome
    where
        K: Clone + Eq + Hash,
        C: Collection<K> + ?Sized,
        D: KeyboardDelegate<K> + ?Sized,
    {
        if event.ctrl_or_meta() {
            if c.eq_ignore_ascii_case(&'a')
                && manager.selection_mode() == SelectionMode::Multiple
                && !self.options.disallow_select_all
            {
                manager.select_all();
                return KeyOutcome::Handled;
            }
            return KeyOutcome::Ignored;
        }

        if !self.options.disallow_type_ahead && self.type_select.push(c, now_ms) {
            let focused = manager.focused_key().cloned();
            let search = self.type_select.search();
            let found = delegate
                .key_for_search(search, focused.as_ref())
                .or_else(|| delegate.key_for_search(search, None));
            log::trace!("type-ahead search {search:?} matched: {}", found.is_some());
            if let Some(key) = found {
                manager.set_focused_key(Some(key.clone()), FocusStrategy::First);
                if self.options.select_on_focus {
                    manager.replace_selection(&key);
                }
            }
            return KeyOutcome::Handled;
        }

        if event.key.is_space() {
            return self.activate(manager, event);
        }
        KeyOutcome::Ignored
    }

    /// Enter or a lone Space selects the focused key.
    fn activate<K, C>(
        &mut self,
        manager: &mut SelectionManager<'_, K, C>,
        event: &KeyboardEvent,
    ) -> KeyOutcome
    where
        K: Clone + Eq + Hash,
        C: Collection<K> + ?Sized,
    {
        let Some(key) = manager.focused_key().cloned() else {
            return KeyOutcome::Ignored;
        };
        manager.select(
            &key,
            SelectionEvent {
                modifiers: event.modifiers,
                pointer_type: PointerType::Keyboard,
            },
        );
        KeyOutcome::Handled
    }

    fn wrap<K>(&self, first_or_last: impl FnOnce() -> Option<K>) -> Option<K> {
        if self.options.should_focus_wrap {
            first_or_last()
        } else {
            None
        }
    }

    fn navigate_to<K, C>(
        &mut self,
        manager: &mut SelectionManager<'_, K, C>,
        key: Option<K>,
        child_focus_strategy: FocusStrategy,
        event: &KeyboardEvent,
    ) -> KeyOutcome
    where
        K: Clone + Eq + Hash,
        C: Collection<K> + ?Sized,
    {
        let Some(key) = key else {
            return KeyOutcome::Ignored;
        };
        manager.set_focused_key(Some(key.clone()), child_focus_strategy);
        if event.shift() && manager.selection_mode() == SelectionMode::Multiple {
            manager.extend_selection(&key);
        } else if self.options.select_on_focus && !event.ctrl_or_meta() {
            manager.replace_selection(&key);
        }
        KeyOutcome::Handled
    }
}
