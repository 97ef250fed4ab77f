// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `SelectableCollection` driving a list and a tab strip.

use understory_collection::{
    CollectionItem, ListCollection, ListKeyboardDelegate, Orientation, TabsKeyboardDelegate,
    TextDirection,
};
use understory_event_state::keyboard::{KeyboardEvent, Modifiers, NamedKey};
use understory_event_state::selectable::{
    InteractionState, KeyOutcome, SelectableCollection, SelectableCollectionOptions,
};
use understory_event_state::typeahead::TYPEAHEAD_TIMEOUT_MS;
use understory_selection::{
    FocusStrategy, MultipleSelectionProps, MultipleSelectionState, SelectionManager,
    SelectionMode,
};

fn fruit() -> ListCollection<&'static str> {
    [
        CollectionItem::new("apple", "Apple"),
        CollectionItem::new("apricot", "Apricot"),
        CollectionItem::new("banana", "Banana"),
        CollectionItem::new("cherry", "Cherry"),
        CollectionItem::new("date", "Date"),
    ]
    .into_iter()
    .collect()
}

fn key(named: NamedKey) -> KeyboardEvent {
    KeyboardEvent::new(named)
}

fn with(named: NamedKey, modifiers: Modifiers) -> KeyboardEvent {
    KeyboardEvent::new(named).with_modifiers(modifiers)
}

#[test]
fn focus_in_lands_on_first_selected_or_first_key() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);

    let mut state =
        MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);
    interaction.on_focus_in(&mut manager, &delegate, false);
    assert_eq!(manager.focused_key(), Some(&"apple"));
    assert!(manager.is_focused());
    assert_eq!(interaction.interaction_state(), InteractionState::Focused);

    let mut state = MultipleSelectionState::new(
        MultipleSelectionProps::new(SelectionMode::Multiple)
            .with_default_selected_keys(["cherry", "banana"]),
    );
    let mut manager = SelectionManager::new(&items, &mut state);
    SelectableCollection::default().on_focus_in(&mut manager, &delegate, false);
    assert_eq!(manager.focused_key(), Some(&"banana"));

    let mut state = MultipleSelectionState::new(
        MultipleSelectionProps::new(SelectionMode::Multiple)
            .with_default_selected_keys(["cherry", "banana"]),
    );
    let mut manager = SelectionManager::new(&items, &mut state);
    SelectableCollection::default().on_focus_in(&mut manager, &delegate, true);
    assert_eq!(manager.focused_key(), Some(&"cherry"));
}

#[test]
fn focus_in_keeps_an_existing_focused_key() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut manager = SelectionManager::new(&items, &mut state);
    manager.set_focused_key(Some("date"), FocusStrategy::First);

    let mut interaction =
        SelectableCollection::new(SelectableCollectionOptions::default().with_select_on_focus(true));
    interaction.on_focus_in(&mut manager, &delegate, false);
    assert_eq!(manager.focused_key(), Some(&"date"));
    assert!(manager.is_empty());
}

#[test]
fn arrows_move_focus_and_stop_at_the_ends() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);

    // Nothing focused: Up starts from the end.
    let outcome = interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowUp), 0);
    assert_eq!(outcome, KeyOutcome::Handled);
    assert_eq!(manager.focused_key(), Some(&"date"));
    // A key press without a prior focus-in still marks the collection focused.
    assert!(manager.is_focused());
    assert_eq!(interaction.interaction_state(), InteractionState::Focused);

    let outcome = interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowDown), 0);
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert_eq!(manager.focused_key(), Some(&"date"));

    // A vertical list does not move sideways.
    let outcome = interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowLeft), 0);
    assert_eq!(outcome, KeyOutcome::Ignored);

    // Focus alone does not select.
    assert!(manager.is_empty());
}

#[test]
fn wrapping_goes_around() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut interaction = SelectableCollection::new(
        SelectableCollectionOptions::default().with_should_focus_wrap(true),
    );
    let mut manager = SelectionManager::new(&items, &mut state);
    manager.set_focused_key(Some("date"), FocusStrategy::First);

    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowDown), 0);
    assert_eq!(manager.focused_key(), Some(&"apple"));
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowUp), 0);
    assert_eq!(manager.focused_key(), Some(&"date"));
}

#[test]
fn select_on_focus_replaces_unless_ctrl_is_held() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state =
        MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
    let mut interaction =
        SelectableCollection::new(SelectableCollectionOptions::default().with_select_on_focus(true));
    let mut manager = SelectionManager::new(&items, &mut state);

    interaction.on_focus_in(&mut manager, &delegate, false);
    assert!(manager.is_selected(&"apple"));

    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowDown), 0);
    assert!(manager.is_selected(&"apricot"));
    assert!(!manager.is_selected(&"apple"));

    interaction.on_key_down(
        &mut manager,
        &delegate,
        &with(NamedKey::ArrowDown, Modifiers::CTRL),
        0,
    );
    assert_eq!(manager.focused_key(), Some(&"banana"));
    assert!(!manager.is_selected(&"banana"));
    assert!(manager.is_selected(&"apricot"));
}

#[test]
fn shift_arrows_extend_in_multiple_mode() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state =
        MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);

    manager.set_focused_key(Some("apricot"), FocusStrategy::First);
    manager.replace_selection(&"apricot");
    let shift_down = with(NamedKey::ArrowDown, Modifiers::SHIFT);
    interaction.on_key_down(&mut manager, &delegate, &shift_down, 0);
    interaction.on_key_down(&mut manager, &delegate, &shift_down, 0);

    let expected = ["apricot", "banana", "cherry"].into_iter().collect();
    assert!(manager.is_selection_equal(&expected));

    // Ctrl+Shift+Home extends to the very top.
    interaction.on_key_down(
        &mut manager,
        &delegate,
        &with(NamedKey::Home, Modifiers::CTRL | Modifiers::SHIFT),
        0,
    );
    assert_eq!(manager.focused_key(), Some(&"apple"));
    let expected = ["apple", "apricot"].into_iter().collect();
    assert!(manager.is_selection_equal(&expected));
}

#[test]
fn home_end_and_paging() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items).with_page_size(2);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);

    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::End), 0);
    assert_eq!(manager.focused_key(), Some(&"date"));
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::PageUp), 0);
    assert_eq!(manager.focused_key(), Some(&"banana"));
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::Home), 0);
    assert_eq!(manager.focused_key(), Some(&"apple"));
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::PageDown), 0);
    assert_eq!(manager.focused_key(), Some(&"banana"));
}

#[test]
fn ctrl_a_selects_all_unless_disallowed() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let ctrl_a = KeyboardEvent::character('a').with_modifiers(Modifiers::CTRL);

    let mut state =
        MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
    let mut manager = SelectionManager::new(&items, &mut state);
    let outcome =
        SelectableCollection::default().on_key_down(&mut manager, &delegate, &ctrl_a, 0);
    assert!(outcome.is_handled());
    assert!(manager.is_select_all());

    let mut state =
        MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
    let mut manager = SelectionManager::new(&items, &mut state);
    let mut interaction = SelectableCollection::new(
        SelectableCollectionOptions::default().with_disallow_select_all(true),
    );
    let outcome = interaction.on_key_down(&mut manager, &delegate, &ctrl_a, 0);
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert!(manager.is_empty());
    // Ctrl+A never feeds type-ahead.
    assert!(!interaction.type_select().is_active());
}

#[test]
fn escape_clears_selection_and_goes_idle() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(
        MultipleSelectionProps::new(SelectionMode::Multiple).with_default_selected_keys(["date"]),
    );
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);

    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('c'), 0);
    assert_eq!(interaction.interaction_state(), InteractionState::TypeaheadActive);

    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::Escape), 10);
    assert!(manager.is_empty());
    assert!(!interaction.type_select().is_active());
    assert_eq!(interaction.interaction_state(), InteractionState::Idle);
}

#[test]
fn escape_respects_disallow_empty() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(
        MultipleSelectionProps::new(SelectionMode::Multiple).with_default_selected_keys(["date"]),
    );
    let mut interaction = SelectableCollection::new(
        SelectableCollectionOptions::default().with_disallow_empty_selection(true),
    );
    let mut manager = SelectionManager::new(&items, &mut state);
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::Escape), 0);
    assert!(manager.is_selected(&"date"));
}

#[test]
fn type_ahead_searches_from_focus_then_from_top() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);
    manager.set_focused_key(Some("cherry"), FocusStrategy::First);

    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('a'), 0);
    assert_eq!(manager.focused_key(), Some(&"apple"));
    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('p'), 100);
    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('r'), 200);
    assert_eq!(manager.focused_key(), Some(&"apricot"));
    assert_eq!(interaction.type_select().search(), "apr");

    // No match leaves focus alone.
    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('z'), 300);
    assert_eq!(manager.focused_key(), Some(&"apricot"));

    // After the window passes, a new search starts.
    interaction.on_key_down(
        &mut manager,
        &delegate,
        &KeyboardEvent::character('d'),
        300 + TYPEAHEAD_TIMEOUT_MS,
    );
    assert_eq!(interaction.type_select().search(), "d");
    assert_eq!(manager.focused_key(), Some(&"date"));
}

#[test]
fn type_ahead_selects_when_select_on_focus() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut interaction =
        SelectableCollection::new(SelectableCollectionOptions::default().with_select_on_focus(true));
    let mut manager = SelectionManager::new(&items, &mut state);
    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('b'), 0);
    assert!(manager.is_selected(&"banana"));
}

#[test]
fn disallowed_type_ahead_ignores_letters() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut interaction = SelectableCollection::new(
        SelectableCollectionOptions::default().with_disallow_type_ahead(true),
    );
    let mut manager = SelectionManager::new(&items, &mut state);
    let outcome =
        interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('b'), 0);
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert_eq!(manager.focused_key(), None);
}

#[test]
fn space_selects_unless_it_joins_a_search() {
    let items: ListCollection<&str> = [
        CollectionItem::new("new", "New"),
        CollectionItem::new("new-york", "New York"),
    ]
    .into_iter()
    .collect();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state =
        MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);
    manager.set_focused_key(Some("new"), FocusStrategy::First);

    // A lone space activates the focused item.
    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character(' '), 0);
    assert!(manager.is_selected(&"new"));

    for (i, c) in "new y".chars().enumerate() {
        interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character(c), 10 * i as u64 + 10);
    }
    assert_eq!(manager.focused_key(), Some(&"new-york"));
    assert!(!manager.is_selected(&"new-york"));
}

#[test]
fn enter_selects_the_focused_key() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state =
        MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Multiple));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);

    assert_eq!(
        interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::Enter), 0),
        KeyOutcome::Ignored
    );
    manager.set_focused_key(Some("cherry"), FocusStrategy::First);
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::Enter), 0);
    assert!(manager.is_selected(&"cherry"));
}

#[test]
fn typeahead_expires_back_to_focused() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);

    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('b'), 0);
    // A navigation key keeps the search alive.
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowDown), 900);
    assert!(!interaction.tick(1500));
    assert_eq!(interaction.interaction_state(), InteractionState::TypeaheadActive);
    assert!(interaction.tick(1900));
    assert_eq!(interaction.interaction_state(), InteractionState::Focused);
}

#[test]
fn focus_out_and_reset_go_idle() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);
    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut interaction = SelectableCollection::default();
    let mut manager = SelectionManager::new(&items, &mut state);

    interaction.on_focus_in(&mut manager, &delegate, false);
    interaction.on_key_down(&mut manager, &delegate, &KeyboardEvent::character('c'), 0);
    interaction.on_focus_out(&mut manager);
    assert!(!manager.is_focused());
    assert!(!interaction.type_select().is_active());
    assert_eq!(interaction.interaction_state(), InteractionState::Idle);

    interaction.on_focus_in(&mut manager, &delegate, false);
    interaction.reset();
    assert_eq!(interaction.interaction_state(), InteractionState::Idle);
}

#[test]
fn auto_focus_prefers_selection_then_strategy() {
    let items = fruit();
    let delegate = ListKeyboardDelegate::new(&items);

    let mut state = MultipleSelectionState::new(MultipleSelectionProps::new(SelectionMode::Single));
    let mut manager = SelectionManager::new(&items, &mut state);
    let focused = SelectableCollection::default().auto_focus(&mut manager, &delegate, FocusStrategy::Last);
    assert_eq!(focused, Some("date"));
    assert!(manager.is_focused());

    let mut state = MultipleSelectionState::new(
        MultipleSelectionProps::new(SelectionMode::Single).with_default_selected_keys(["banana"]),
    );
    let mut manager = SelectionManager::new(&items, &mut state);
    let focused = SelectableCollection::default().auto_focus(&mut manager, &delegate, FocusStrategy::Last);
    assert_eq!(focused, Some("banana"));
}

#[test]
fn tabs_drive_the_same_state_machine() {
    let tabs: ListCollection<&str> = ["one", "two", "three"]
        .into_iter()
        .map(|k| CollectionItem::new(k, k))
        .collect();
    let delegate = TabsKeyboardDelegate::new(&tabs, Orientation::Horizontal, TextDirection::Rtl);
    let mut state = MultipleSelectionState::new(
        MultipleSelectionProps::new(SelectionMode::Single)
            .with_disallow_empty_selection(true)
            .with_default_selected_keys(["one"]),
    );
    let mut interaction = SelectableCollection::new(
        SelectableCollectionOptions::default()
            .with_select_on_focus(true)
            .with_direction(TextDirection::Rtl),
    );
    let mut manager = SelectionManager::new(&tabs, &mut state);
    interaction.on_focus_in(&mut manager, &delegate, false);
    assert_eq!(manager.focused_key(), Some(&"one"));

    // In RTL, Left moves forward.
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowLeft), 0);
    assert_eq!(manager.focused_key(), Some(&"two"));
    assert!(manager.is_selected(&"two"));
    assert_eq!(manager.child_focus_strategy(), FocusStrategy::First);

    // Right from the first tab wraps to the last.
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowRight), 0);
    interaction.on_key_down(&mut manager, &delegate, &key(NamedKey::ArrowRight), 0);
    assert_eq!(manager.focused_key(), Some(&"three"));
    assert_eq!(manager.child_focus_strategy(), FocusStrategy::Last);
}
