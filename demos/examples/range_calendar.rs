// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Booking a stay around unavailable nights.
//!
//! Render January 2024 as text, then pick a range with the keyboard. The 15th
//! and 16th are booked, so the range cannot cross them.
//!
//! Run:
//! - `cargo run -p understory_demos --example range_calendar`

use chrono::{Datelike, NaiveDate};
use understory_calendar::{CalendarProps, RangeCalendarProps, RangeCalendarState};
use understory_collection::TextDirection;
use understory_event_state::keyboard::{KeyboardEvent, NamedKey};

fn render(state: &RangeCalendarState) {
    let visible = state.calendar().visible_range();
    println!("{}", visible.start.format("%B %Y"));
    println!(" Mo  Tu  We  Th  Fr  Sa  Su");
    let lead = visible.start.weekday().num_days_from_monday() as usize;
    let mut line = "    ".repeat(lead);
    for date in visible.start.iter_days().take_while(|date| *date <= visible.end) {
        let marker = if state.calendar().is_cell_unavailable(date) {
            'x'
        } else if date == state.calendar().focused_date() {
            '>'
        } else if state.is_selected(date) {
            '*'
        } else {
            ' '
        };
        line.push_str(&format!("{marker}{:>2} ", date.day()));
        if date.weekday().num_days_from_monday() == 6 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }
    println!(
        "anchor={:?} value={:?} validation={:?}\n",
        state.anchor_date(),
        state.value(),
        state.validation_state()
    );
}

fn main() {
    let jan = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    let booked = [jan(15), jan(16)];

    let mut state = RangeCalendarState::new(RangeCalendarProps::new(
        CalendarProps::default()
            .with_bounds(Some(jan(1)), Some(jan(31)))
            .with_default_focused_value(jan(10)),
    ))
    .with_date_unavailable(move |date| booked.contains(&date))
    .with_on_change(|range| println!("  on_change: {range:?}"));

    state.on_focus_in();
    render(&state);

    let ltr = TextDirection::Ltr;
    state.on_key_down(&KeyboardEvent::new(NamedKey::Enter), ltr);
    for _ in 0..2 {
        state.on_key_down(&KeyboardEvent::new(NamedKey::ArrowDown), ltr);
    }
    println!("anchored on the 10th, two rows down (stops at the 14th):");
    render(&state);

    state.on_key_down(&KeyboardEvent::character(' '), ltr);
    println!("committed:");
    render(&state);
}
