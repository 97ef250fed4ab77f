// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection --heading-base-level=0

//! Understory Selection: selection state and gestures for keyed collections.
//!
//! This crate tracks _what is selected_ in a list, menu, tab strip, or grid,
//! and turns user gestures (click, Ctrl-click, Shift-click, Select All) into
//! selection changes. It does not render anything and does not know how the
//! items are laid out; item order and metadata come from an
//! [`understory_collection::Collection`].
//!
//! The pieces, from the bottom up:
//!
//! - [`Selection`]: a set of keys plus an **anchor** (fixed end of a range
//!   gesture) and a **current** key (moving end). [`SelectedKeys`] wraps it
//!   together with the [`SelectedKeys::All`] sentinel so that "select all" on
//!   a large collection never materializes every key.
//! - [`controllable::Controllable`]: a value that is either owned by the host
//!   (controlled) or kept internally (uncontrolled), with a change callback.
//! - [`MultipleSelectionState`]: mode, behavior, disabled keys, focus state,
//!   and the current selection. Equal selections are not reported twice
//!   unless [`MultipleSelectionProps::allow_duplicate_selection_events`] is set.
//! - [`SelectionManager`]: a short-lived view borrowing a collection and its
//!   state. All queries and gestures live here.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_collection::{CollectionItem, ListCollection};
//! use understory_selection::{
//!     MultipleSelectionProps, MultipleSelectionState, SelectionEvent, SelectionManager,
//!     SelectionMode,
//! };
//!
//! let collection: ListCollection<&str> = ["a", "b", "c"]
//!     .into_iter()
//!     .map(|key| CollectionItem::new(key, key))
//!     .collect();
//! let mut state =
//!     MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
//!
//! let mut manager = SelectionManager::new(&collection, &mut state);
//! manager.select(&"a", SelectionEvent::default());
//! manager.select(&"b", SelectionEvent::shift());
//! manager.select(&"c", SelectionEvent::default());
//!
//! // Toggle behavior: the plain click on "c" adds to the range.
//! assert!(manager.is_select_all());
//! assert_eq!(manager.first_selected_key(), Some(&"a"));
//! ```
//!
//! ## Gesture rules
//!
//! [`SelectionManager::select`] is the single entry point for click-like
//! input. In multiple selection mode Shift wins over Ctrl/Meta, which wins
//! over the configured [`SelectionBehavior`]. Touch and virtual pointers
//! cannot hold modifiers, so they always toggle.
//!
//! Gestures that do not apply are silent no-ops. They never panic and never
//! emit a change. Rejections are reported at `trace` level through the
//! [`log`] facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controllable;
mod event;
mod manager;
mod selection;
mod state;
mod types;

pub use event::{Modifiers, PointerType, SelectionEvent};
pub use manager::SelectionManager;
pub use selection::{SelectedKeys, Selection};
pub use state::{MultipleSelectionProps, MultipleSelectionState};
pub use types::{
    DisabledBehavior, FocusStrategy, ParseEnumError, SelectionBehavior, SelectionMode,
};
