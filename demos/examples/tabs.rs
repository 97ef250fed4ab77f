// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Right-to-left tab strip.
//!
//! Tabs select on focus and wrap around at either end. In a right-to-left
//! layout the left arrow moves to the next tab.
//!
//! Run:
//! - `cargo run -p understory_demos --example tabs`

use understory_collection::{
    Collection, CollectionItem, ListCollection, Orientation, TabsKeyboardDelegate, TextDirection,
};
use understory_event_state::keyboard::{KeyboardEvent, NamedKey};
use understory_event_state::selectable::{SelectableCollection, SelectableCollectionOptions};
use understory_selection::{
    MultipleSelectionProps, MultipleSelectionState, Selection, SelectionManager, SelectionMode,
};

fn selected_label(manager: &SelectionManager<'_, u8, ListCollection<u8>>) -> String {
    manager
        .first_selected_key()
        .and_then(|key| manager.collection().item(key))
        .map_or_else(|| "-".to_owned(), |item| item.text_value.clone())
}

fn main() {
    let tabs: ListCollection<u8> = [(1, "General"), (2, "Privacy"), (3, "Billing"), (4, "Danger")]
        .into_iter()
        .map(|(key, label)| CollectionItem::new(key, label).with_disabled(key == 3))
        .collect();

    let mut state = MultipleSelectionState::new(
        MultipleSelectionProps::new(SelectionMode::Single)
            .with_disallow_empty_selection(true)
            .with_default_selected_keys(Selection::single(1)),
    );
    let mut interaction = SelectableCollection::new(
        SelectableCollectionOptions::default()
            .with_select_on_focus(true)
            .with_disallow_empty_selection(true)
            .with_direction(TextDirection::Rtl),
    );
    let delegate = TabsKeyboardDelegate::new(&tabs, Orientation::Horizontal, TextDirection::Rtl);

    let mut manager = SelectionManager::new(&tabs, &mut state);
    interaction.on_focus_in(&mut manager, &delegate, false);

    println!("focus in          -> {}", selected_label(&manager));

    let presses = [
        NamedKey::ArrowLeft,
        NamedKey::ArrowLeft,
        NamedKey::ArrowLeft,
        NamedKey::ArrowRight,
        NamedKey::Escape,
    ];
    for (i, key) in presses.into_iter().enumerate() {
        let outcome =
            interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::new(key), i as u64 * 100);
        println!(
            "{:<17} -> {} ({:?})",
            format!("{key:?}"),
            selected_label(&manager),
            outcome
        );
    }
}
