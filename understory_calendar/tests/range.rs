// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range calendar behavior through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use understory_calendar::{
    CalendarProps, DateRange, RangeCalendarProps, RangeCalendarState, ValidationState,
};
use understory_collection::TextDirection;
use understory_event_state::keyboard::{Key, KeyboardEvent, Modifiers, NamedKey};

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn january_props() -> RangeCalendarProps {
    RangeCalendarProps::new(
        CalendarProps::default()
            .with_bounds(Some(jan(1)), Some(jan(31)))
            .with_default_focused_value(jan(10)),
    )
}

fn booked_15th(props: RangeCalendarProps) -> RangeCalendarState {
    RangeCalendarState::new(props).with_date_unavailable(|date| date == jan(15))
}

type Changes = Rc<RefCell<Vec<Option<DateRange>>>>;

fn recorded(state: RangeCalendarState) -> (RangeCalendarState, Changes) {
    let changes = Changes::default();
    let sink = Rc::clone(&changes);
    let state = state.with_on_change(move |value| sink.borrow_mut().push(*value));
    (state, changes)
}

fn key(key: NamedKey) -> KeyboardEvent {
    KeyboardEvent::new(key)
}

#[test]
fn range_stops_before_an_unavailable_day() {
    let (mut state, changes) = recorded(booked_15th(january_props()));

    state.select_date(jan(10));
    assert_eq!(state.anchor_date(), Some(jan(10)));
    assert!(changes.borrow().is_empty());

    state.select_date(jan(20));
    assert_eq!(state.value(), Some(DateRange::new(jan(10), jan(14))));
    assert_eq!(state.anchor_date(), None);
    assert_eq!(*changes.borrow(), [Some(DateRange::new(jan(10), jan(14)))]);
}

#[test]
fn backwards_pick_orders_the_range() {
    let mut state = booked_15th(january_props());
    state.select_date(jan(20));
    state.select_date(jan(17));
    assert_eq!(state.value(), Some(DateRange::new(jan(17), jan(20))));

    state.select_date(jan(20));
    state.select_date(jan(3));
    assert_eq!(state.value(), Some(DateRange::new(jan(16), jan(20))));
}

#[test]
fn non_contiguous_ranges_may_span_unavailable_days() {
    let mut state = booked_15th(january_props().with_allows_non_contiguous_ranges(true));
    state.select_date(jan(10));
    state.select_date(jan(20));
    assert_eq!(state.value(), Some(DateRange::new(jan(10), jan(20))));
    // The unavailable day is inside the range but never paints as selected.
    assert!(!state.is_selected(jan(15)));
    assert!(state.is_selected(jan(16)));
    assert_eq!(state.validation_state(), ValidationState::Valid);
}

#[test]
fn picks_are_clamped_to_bounds() {
    let mut state = RangeCalendarState::new(RangeCalendarProps::new(
        CalendarProps::default()
            .with_bounds(Some(jan(5)), Some(jan(25)))
            .with_default_focused_value(jan(10)),
    ));
    state.select_date(jan(1));
    assert_eq!(state.anchor_date(), Some(jan(5)));
    state.select_date(jan(31));
    assert_eq!(state.value(), Some(DateRange::new(jan(5), jan(25))));
}

#[test]
fn read_only_and_disabled_ignore_picks() {
    let mut state = booked_15th(RangeCalendarProps::new(
        CalendarProps::default()
            .with_default_focused_value(jan(10))
            .with_read_only(true),
    ));
    state.select_date(jan(10));
    assert_eq!(state.anchor_date(), None);

    let mut state = booked_15th(RangeCalendarProps::new(
        CalendarProps::default()
            .with_default_focused_value(jan(10))
            .with_disabled(true),
    ));
    state.select_date(jan(10));
    assert_eq!(state.anchor_date(), None);
    assert!(!state.on_key_down(&key(NamedKey::Enter), TextDirection::Ltr).is_handled());
}

#[test]
fn highlight_follows_focus_while_anchored() {
    let mut state = booked_15th(january_props());
    state.highlight_date(jan(12));
    assert_eq!(state.calendar().focused_date(), jan(10));
    assert_eq!(state.highlighted_range(), None);

    state.select_date(jan(10));
    state.highlight_date(jan(13));
    assert_eq!(state.highlighted_range(), Some(DateRange::new(jan(10), jan(13))));
    assert!(state.is_selected(jan(12)));
    assert!(!state.is_selected(jan(14)));

    // Focus cannot move past the last reachable day.
    state.highlight_date(jan(25));
    assert_eq!(state.calendar().focused_date(), jan(14));
    assert!(state.is_invalid(jan(16)));
}

#[test]
fn keyboard_builds_a_range() {
    let mut state = booked_15th(january_props());
    state.on_focus_in();
    assert!(state.calendar().is_focused());

    assert!(state.on_key_down(&key(NamedKey::Enter), TextDirection::Ltr).is_handled());
    assert_eq!(state.anchor_date(), Some(jan(10)));

    state.on_key_down(&key(NamedKey::ArrowDown), TextDirection::Ltr);
    assert_eq!(state.calendar().focused_date(), jan(14));

    state.on_key_down(&key(NamedKey::ArrowLeft), TextDirection::Ltr);
    assert_eq!(state.calendar().focused_date(), jan(13));

    state.on_key_down(&KeyboardEvent::character(' '), TextDirection::Ltr);
    assert_eq!(state.value(), Some(DateRange::new(jan(10), jan(13))));

    state.on_focus_out();
    assert!(!state.calendar().is_focused());
}

#[test]
fn grid_keys_respect_direction_and_paging() {
    let mut state = RangeCalendarState::new(RangeCalendarProps::new(
        CalendarProps::default().with_default_focused_value(jan(10)),
    ));

    state.on_key_down(&key(NamedKey::ArrowLeft), TextDirection::Rtl);
    assert_eq!(state.calendar().focused_date(), jan(11));
    state.on_key_down(&key(NamedKey::ArrowUp), TextDirection::Ltr);
    assert_eq!(state.calendar().focused_date(), jan(4));

    state.on_key_down(&key(NamedKey::End), TextDirection::Ltr);
    assert_eq!(state.calendar().focused_date(), jan(31));
    state.on_key_down(&key(NamedKey::Home), TextDirection::Ltr);
    assert_eq!(state.calendar().focused_date(), jan(1));

    state.on_key_down(&key(NamedKey::PageDown), TextDirection::Ltr);
    assert_eq!(
        state.calendar().focused_date(),
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    );
    state.on_key_down(
        &key(NamedKey::PageUp).with_modifiers(Modifiers::SHIFT),
        TextDirection::Ltr,
    );
    assert_eq!(
        state.calendar().focused_date(),
        NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
    );

    assert!(
        !state
            .on_key_down(&KeyboardEvent::new(Key::Character('x')), TextDirection::Ltr)
            .is_handled()
    );
}

#[test]
fn escape_drops_the_anchor() {
    let mut state = booked_15th(january_props());
    assert!(!state.on_key_down(&key(NamedKey::Escape), TextDirection::Ltr).is_handled());

    state.select_date(jan(10));
    assert!(state.on_key_down(&key(NamedKey::Escape), TextDirection::Ltr).is_handled());
    assert_eq!(state.anchor_date(), None);
    assert!(!state.is_invalid(jan(20)));
}

#[test]
fn validation_reports_unavailable_endpoints() {
    let state = booked_15th(january_props().with_default_value(DateRange::new(jan(15), jan(18))));
    assert_eq!(state.validation_state(), ValidationState::Invalid);

    let state = booked_15th(
        january_props().with_default_value(DateRange::new(
            NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
            jan(3),
        )),
    );
    assert_eq!(state.validation_state(), ValidationState::Invalid);

    let mut state = booked_15th(
        january_props()
            .with_default_value(DateRange::new(jan(15), jan(18)))
            .with_validation_state(ValidationState::Valid),
    );
    assert_eq!(state.validation_state(), ValidationState::Valid);
    state.set_validation_state(None);
    assert_eq!(state.validation_state(), ValidationState::Invalid);

    // A gesture in progress is not judged.
    state.select_date(jan(3));
    assert_eq!(state.validation_state(), ValidationState::Valid);
}

#[test]
fn controlled_value_reports_without_changing() {
    let (mut state, changes) = recorded(booked_15th(
        january_props().with_value(DateRange::new(jan(2), jan(4))),
    ));
    state.select_date(jan(10));
    state.select_date(jan(12));
    assert_eq!(state.value(), Some(DateRange::new(jan(2), jan(4))));
    assert_eq!(*changes.borrow(), [Some(DateRange::new(jan(10), jan(12)))]);

    state.set_controlled_value(Some(DateRange::new(jan(10), jan(12))));
    assert_eq!(state.value(), Some(DateRange::new(jan(10), jan(12))));
    assert!(state.is_selected(jan(11)));
}

#[test]
fn dragging_flag_clears_on_focus_out() {
    let mut state = booked_15th(january_props());
    state.set_dragging(true);
    assert!(state.is_dragging());
    state.on_focus_out();
    assert!(!state.is_dragging());
}

#[test]
fn leading_days_before_the_view_can_anchor() {
    let feb = |day| NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
    let mut state = RangeCalendarState::new(RangeCalendarProps::new(
        CalendarProps::default().with_default_focused_value(feb(10)),
    ));
    assert_eq!(state.calendar().visible_range().start, feb(1));

    state.select_date(jan(30));
    assert_eq!(state.anchor_date(), Some(jan(30)));
    state.select_date(feb(3));
    assert_eq!(state.value(), Some(DateRange::new(jan(30), feb(3))));
}
