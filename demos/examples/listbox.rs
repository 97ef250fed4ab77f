// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-select listbox.
//!
//! Drive a listbox of fruit with simulated clicks and key presses and print the
//! selection after each step.
//!
//! Run:
//! - `cargo run -p understory_demos --example listbox`

use understory_collection::{Collection, CollectionItem, ListCollection, ListKeyboardDelegate};
use understory_event_state::keyboard::{KeyboardEvent, Modifiers, NamedKey};
use understory_event_state::selectable::{SelectableCollection, SelectableCollectionOptions};
use understory_selection::{
    MultipleSelectionProps, MultipleSelectionState, SelectedKeys, SelectionEvent,
    SelectionManager, SelectionMode,
};

fn print_state(step: &str, manager: &SelectionManager<'_, &'static str, ListCollection<&'static str>>) {
    let selected: Vec<&str> = manager
        .collection()
        .keys()
        .filter(|key| manager.is_selected(*key))
        .copied()
        .collect();
    println!(
        "{step:<24} focus={:<10} selected={selected:?}{}",
        manager.focused_key().copied().unwrap_or("-"),
        if manager.is_select_all() { " (all)" } else { "" },
    );
}

fn main() {
    let fruit: ListCollection<&'static str> = [
        ("apple", false),
        ("banana", false),
        ("blueberry", false),
        ("cherry", true),
        ("date", false),
        ("elderberry", false),
    ]
    .into_iter()
    .map(|(key, disabled)| CollectionItem::new(key, key).with_disabled(disabled))
    .collect();

    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple))
        .with_on_selection_change(|keys: &SelectedKeys<&'static str>| match keys {
            SelectedKeys::All => println!("  change -> all"),
            SelectedKeys::Keys(selection) => println!("  change -> {} key(s)", selection.len()),
        });
    let mut interaction = SelectableCollection::new(SelectableCollectionOptions::default());
    let delegate = ListKeyboardDelegate::new(&fruit);

    let mut manager = SelectionManager::new(&fruit, &mut state);
    interaction.on_focus_in(&mut manager, &delegate, false);
    print_state("focus in", &manager);

    manager.select(&"apple", SelectionEvent::default());
    print_state("click apple", &manager);

    manager.select(&"date", SelectionEvent::shift());
    print_state("shift-click date", &manager);

    manager.select(&"banana", SelectionEvent::with_modifiers(Modifiers::CTRL));
    print_state("ctrl-click banana", &manager);

    let mut now = 0;
    for key in [NamedKey::ArrowDown, NamedKey::ArrowDown] {
        now += 50;
        interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::new(key), now);
    }
    print_state("down, down", &manager);

    for c in "el".chars() {
        now += 120;
        interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character(c), now);
    }
    print_state("type \"el\"", &manager);

    let select_all = KeyboardEvent::character('a').with_modifiers(Modifiers::CTRL);
    interaction.on_key_down(&mut manager, &delegate, &select_all, now + 2_000);
    print_state("ctrl+a", &manager);

    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::new(NamedKey::Escape), now + 2_100);
    print_state("escape", &manager);

    println!("collection has {} items", fruit.size());
}
