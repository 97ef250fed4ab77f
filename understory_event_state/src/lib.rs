// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: interaction state machines for selectable collections.
//!
//! This crate sits between raw input and `understory_selection`. Each module
//! handles one piece of the interaction:
//!
//! - [`keyboard`]: a small, toolkit-neutral key event model
//! - [`typeahead`]: a type-to-search buffer that clears after a period of inactivity
//! - [`selectable`]: arrow keys, Home/End, paging, Select All, Escape,
//!   type-ahead, and focus entry/exit for lists, menus, and tab strips
//!
//! ## Design Philosophy
//!
//! - **No clocks, no timers**: every time-dependent call takes a host-supplied
//!   millisecond timestamp, and expiry is checked with `tick`.
//! - **No collection knowledge**: navigation goes through a
//!   [`KeyboardDelegate`](understory_collection::KeyboardDelegate), so the same
//!   state machine drives a vertical listbox, a wrapping tab strip, or a date grid.
//! - **Borrowed views**: callers build a
//!   [`SelectionManager`](understory_selection::SelectionManager) and a delegate
//!   per event and hand both in.
//!
//! ## Type-ahead
//!
//! ```rust
//! use understory_collection::{CollectionItem, ListCollection, ListKeyboardDelegate};
//! use understory_event_state::keyboard::KeyboardEvent;
//! use understory_event_state::selectable::{
//!     InteractionState, SelectableCollection, SelectableCollectionOptions,
//! };
//! use understory_event_state::typeahead::TYPEAHEAD_TIMEOUT_MS;
//! use understory_selection::{
//!     MultipleSelectionProps, MultipleSelectionState, SelectionManager, SelectionMode,
//! };
//!
//! let fruit: ListCollection<u32> = [(1, "Apple"), (2, "Banana"), (3, "Blueberry")]
//!     .into_iter()
//!     .map(|(key, label)| CollectionItem::new(key, label))
//!     .collect();
//! let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
//! let mut interaction = SelectableCollection::new(SelectableCollectionOptions::default());
//! let delegate = ListKeyboardDelegate::new(&fruit);
//!
//! let mut manager = SelectionManager::new(&fruit, &mut state);
//! interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('b'), 0);
//! interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('l'), 100);
//! assert_eq!(manager.focused_key(), Some(&3));
//! assert_eq!(interaction.interaction_state(), InteractionState::TypeaheadActive);
//!
//! interaction.tick(100 + TYPEAHEAD_TIMEOUT_MS);
//! assert_eq!(interaction.interaction_state(), InteractionState::Focused);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod keyboard;
pub mod selectable;
pub mod typeahead;
