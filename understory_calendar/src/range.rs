// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-click date range selection over a [`CalendarState`].
//!
//! The first [`select_date`](RangeCalendarState::select_date) drops an anchor;
//! the second emits the range between the anchor and the picked date. While an
//! anchor is down and unavailable dates are configured, the pickable span is
//! capped at the nearest unavailable date on either side of the anchor, so a
//! committed range never straddles one (unless non-contiguous ranges are
//! allowed).

use std::fmt;

use chrono::NaiveDate;
use understory_collection::{KeyboardDelegate, TextDirection};
use understory_event_state::keyboard::{Key, KeyboardEvent, NamedKey};
use understory_event_state::selectable::KeyOutcome;
use understory_selection::controllable::Controllable;

use crate::calendar::{CalendarProps, CalendarState};
use crate::date::{self, DateRange};
use crate::grid_delegate::CalendarGridDelegate;

/// Validity of the committed range.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationState {
    /// Nothing wrong with the value.
    #[default]
    Valid,
    /// The value touches an unavailable date or leaves the bounds.
    Invalid,
}

/// Configuration for a [`RangeCalendarState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RangeCalendarProps {
    /// Focus, paging, and bounds configuration.
    pub calendar: CalendarProps,
    /// Host-controlled range.
    pub value: Option<DateRange>,
    /// Initial range in uncontrolled mode.
    pub default_value: Option<DateRange>,
    /// Lets a range span unavailable dates.
    pub allows_non_contiguous_ranges: bool,
    /// Overrides the computed [`ValidationState`].
    pub validation_state: Option<ValidationState>,
}

impl RangeCalendarProps {
    /// Creates props around the given calendar configuration.
    pub fn new(calendar: CalendarProps) -> Self {
        Self {
            calendar,
            ..Self::default()
        }
    }

    /// Makes the range host-controlled.
    #[must_use]
    pub fn with_value(mut self, value: DateRange) -> Self {
        self.value = Some(value);
        self
    }

    /// Sets the initial range.
    #[must_use]
    pub fn with_default_value(mut self, value: DateRange) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Sets whether ranges may span unavailable dates.
    #[must_use]
    pub fn with_allows_non_contiguous_ranges(mut self, allow: bool) -> Self {
        self.allows_non_contiguous_ranges = allow;
        self
    }

    /// Forces a validation state.
    #[must_use]
    pub fn with_validation_state(mut self, state: ValidationState) -> Self {
        self.validation_state = Some(state);
        self
    }
}

/// Range selection state for a calendar grid.
pub struct RangeCalendarState {
    calendar: CalendarState,
    value: Controllable<Option<DateRange>>,
    anchor_date: Option<NaiveDate>,
    /// Days reachable from the anchor without crossing an unavailable date.
    /// An open end means nothing unavailable was found in view on that side.
    available_range: Option<(Option<NaiveDate>, Option<NaiveDate>)>,
    min_value: Option<NaiveDate>,
    max_value: Option<NaiveDate>,
    allows_non_contiguous_ranges: bool,
    validation_state: Option<ValidationState>,
    is_dragging: bool,
}

impl fmt::Debug for RangeCalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeCalendarState")
            .field("calendar", &self.calendar)
            .field("value", &self.value)
            .field("anchor_date", &self.anchor_date)
            .field("available_range", &self.available_range)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field(
                "allows_non_contiguous_ranges",
                &self.allows_non_contiguous_ranges,
            )
            .field("validation_state", &self.validation_state)
            .field("is_dragging", &self.is_dragging)
            .finish()
    }
}

impl RangeCalendarState {
    /// Creates range state. The calendar opens on the start of the current
    /// range when no focused value is configured.
    pub fn new(props: RangeCalendarProps) -> Self {
        let initial = props.value.or(props.default_value);
        let min_value = props.calendar.min_value;
        let max_value = props.calendar.max_value;
        let calendar = CalendarState::new(props.calendar, initial.map(|range| range.start));
        Self {
            calendar,
            value: Controllable::new(props.value.map(Some), props.default_value),
            anchor_date: None,
            available_range: None,
            min_value,
            max_value,
            allows_non_contiguous_ranges: props.allows_non_contiguous_ranges,
            validation_state: props.validation_state,
            is_dragging: false,
        }
    }

    /// Returns this state with an unavailable-date predicate installed.
    #[must_use]
    pub fn with_date_unavailable(
        mut self,
        predicate: impl Fn(NaiveDate) -> bool + 'static,
    ) -> Self {
        self.calendar.set_date_unavailable(Some(Box::new(predicate)));
        self.update_available_range();
        self
    }

    /// Returns this state with a range change callback installed.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(&Option<DateRange>) + 'static) -> Self {
        self.value.set_on_change(on_change);
        self
    }

    /// The underlying calendar, for focus and visible-range queries.
    #[must_use]
    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    /// Returns the committed range.
    #[must_use]
    pub fn value(&self) -> Option<DateRange> {
        *self.value.get()
    }

    /// Accepts a new range and notifies the change callback.
    pub fn set_value(&mut self, value: Option<DateRange>) {
        self.value.set(value);
    }

    /// Pushes a new host-controlled range; `None` returns to uncontrolled mode.
    pub fn set_controlled_value(&mut self, value: Option<DateRange>) {
        self.value.set_controlled(value.map(Some));
    }

    /// Returns the fixed end of an in-progress range gesture.
    #[must_use]
    pub fn anchor_date(&self) -> Option<NaiveDate> {
        self.anchor_date
    }

    /// Drops or lifts the anchor and recomputes the reachable span.
    pub fn set_anchor_date(&mut self, date: Option<NaiveDate>) {
        log::trace!("range calendar anchor: {date:?}");
        self.anchor_date = date;
        self.update_available_range();
    }

    /// The range to paint: anchor to focus while a gesture is in progress,
    /// otherwise the committed value.
    #[must_use]
    pub fn highlighted_range(&self) -> Option<DateRange> {
        match self.anchor_date {
            Some(anchor) => Some(DateRange::new(anchor, self.calendar.focused_date())),
            None => self.value(),
        }
    }

    /// Picks `date` as one end of the range.
    ///
    /// The date is first clamped to the effective bounds and then pulled back
    /// to the nearest available day. The first pick sets the anchor; the
    /// second emits the range and clears it. Read-only and disabled calendars
    /// ignore picks.
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.calendar.is_read_only() || self.calendar.is_disabled() {
            return;
        }

        let date = date::constrain(date, self.effective_min(), self.effective_max());
        let Some(date) = self.previous_available_date(date, self.calendar.visible_range().start)
        else {
            return;
        };

        match self.anchor_date {
            None => self.set_anchor_date(Some(date)),
            Some(anchor) => {
                let range = DateRange::new(anchor, date);
                log::debug!("range calendar commit: {} to {}", range.start, range.end);
                self.value.set(Some(range));
                self.set_anchor_date(None);
            }
        }
    }

    /// Picks the focused date.
    pub fn select_focused_date(&mut self) {
        self.select_date(self.calendar.focused_date());
    }

    /// Moves focus to `date` while a gesture is in progress, growing the
    /// highlighted range under the pointer.
    pub fn highlight_date(&mut self, date: NaiveDate) {
        if self.anchor_date.is_some() {
            self.set_focused_date(date);
        }
    }

    /// Returns `true` if `date` should paint as selected.
    #[must_use]
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.highlighted_range().is_some_and(|range| {
            range.contains(date)
                && !self.calendar.is_cell_disabled(date)
                && !self.calendar.is_cell_unavailable(date)
        })
    }

    /// Returns `true` if `date` is out of bounds or unreachable from the anchor.
    #[must_use]
    pub fn is_invalid(&self, date: NaiveDate) -> bool {
        self.calendar.is_invalid(date)
            || self
                .available_range
                .is_some_and(|(start, end)| date::is_out_of_bounds(date, start, end))
    }

    /// Validity of the committed range. An in-progress gesture is never invalid.
    #[must_use]
    pub fn validation_state(&self) -> ValidationState {
        if let Some(state) = self.validation_state {
            return state;
        }
        let Some(range) = self.value() else {
            return ValidationState::Valid;
        };
        if self.anchor_date.is_some() {
            return ValidationState::Valid;
        }
        let unavailable = self.calendar.is_cell_unavailable(range.start)
            || self.calendar.is_cell_unavailable(range.end);
        let out_of_bounds = date::is_out_of_bounds(range.start, self.min_value, self.max_value)
            || date::is_out_of_bounds(range.end, self.min_value, self.max_value);
        if unavailable || out_of_bounds {
            ValidationState::Invalid
        } else {
            ValidationState::Valid
        }
    }

    /// Replaces the validation override.
    pub fn set_validation_state(&mut self, state: Option<ValidationState>) {
        self.validation_state = state;
    }

    /// Returns `true` while a pointer drag is painting a range.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Sets the drag flag.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    /// Replaces the configured bounds.
    pub fn set_bounds(&mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) {
        self.min_value = min;
        self.max_value = max;
        self.sync_calendar_bounds();
    }

    /// Sets whether ranges may span unavailable dates.
    pub fn set_allows_non_contiguous_ranges(&mut self, allow: bool) {
        self.allows_non_contiguous_ranges = allow;
        self.update_available_range();
    }

    /// Moves focus, keeping the reachable span in step with the visible range.
    pub fn set_focused_date(&mut self, date: NaiveDate) {
        self.after_focus_move(|calendar| calendar.set_focused_date(date));
    }

    /// Pages forward by the visible months, or by a year when `larger`.
    pub fn focus_next_section(&mut self, larger: bool) {
        self.after_focus_move(|calendar| calendar.focus_next_section(larger));
    }

    /// Pages back by the visible months, or by a year when `larger`.
    pub fn focus_previous_section(&mut self, larger: bool) {
        self.after_focus_move(|calendar| calendar.focus_previous_section(larger));
    }

    /// The grid gained keyboard focus.
    pub fn on_focus_in(&mut self) {
        self.calendar.set_focused(true);
    }

    /// The grid lost keyboard focus.
    pub fn on_focus_out(&mut self) {
        self.calendar.set_focused(false);
        self.is_dragging = false;
    }

    /// Handles a key press on the grid.
    pub fn on_key_down(&mut self, event: &KeyboardEvent, direction: TextDirection) -> KeyOutcome {
        if self.calendar.is_disabled() {
            return KeyOutcome::Ignored;
        }
        if event.key.is_space() {
            self.select_focused_date();
            return KeyOutcome::Handled;
        }
        let Key::Named(key) = event.key else {
            return KeyOutcome::Ignored;
        };

        match key {
            NamedKey::Enter => {
                self.select_focused_date();
                return KeyOutcome::Handled;
            }
            NamedKey::Escape => {
                if self.anchor_date.is_none() {
                    return KeyOutcome::Ignored;
                }
                self.set_anchor_date(None);
                return KeyOutcome::Handled;
            }
            NamedKey::PageDown => {
                self.focus_next_section(event.shift());
                return KeyOutcome::Handled;
            }
            NamedKey::PageUp => {
                self.focus_previous_section(event.shift());
                return KeyOutcome::Handled;
            }
            _ => {}
        }

        let focused = self.calendar.focused_date();
        let delegate = CalendarGridDelegate::new(&self.calendar, direction);
        let target = match key {
            NamedKey::ArrowDown => delegate.key_below(&focused),
            NamedKey::ArrowUp => delegate.key_above(&focused),
            NamedKey::ArrowLeft => delegate.key_left_of(&focused),
            NamedKey::ArrowRight => delegate.key_right_of(&focused),
            NamedKey::Home => delegate.first_key(Some(&focused), false),
            NamedKey::End => delegate.last_key(Some(&focused), false),
            _ => None,
        };

        match target {
            Some(date) => {
                self.set_focused_date(date);
                KeyOutcome::Handled
            }
            None => KeyOutcome::Ignored,
        }
    }

    fn effective_min(&self) -> Option<NaiveDate> {
        let available = self.available_range.and_then(|(start, _)| start);
        date::tighter_min(self.min_value, available)
    }

    fn effective_max(&self) -> Option<NaiveDate> {
        let available = self.available_range.and_then(|(_, end)| end);
        date::tighter_max(self.max_value, available)
    }

    fn after_focus_move(&mut self, step: impl FnOnce(&mut CalendarState)) {
        let before = self.calendar.visible_range();
        step(&mut self.calendar);
        if self.calendar.visible_range() != before {
            self.update_available_range();
        }
    }

    fn update_available_range(&mut self) {
        self.available_range = match self.anchor_date {
            Some(anchor)
                if self.calendar.has_unavailable_dates() && !self.allows_non_contiguous_ranges =>
            {
                Some((
                    self.next_unavailable_date(anchor, -1),
                    self.next_unavailable_date(anchor, 1),
                ))
            }
            _ => None,
        };
        self.sync_calendar_bounds();
    }

    fn sync_calendar_bounds(&mut self) {
        let (min, max) = (self.effective_min(), self.effective_max());
        self.calendar.set_bounds(min, max);
    }

    /// Walks from `anchor` in `step` direction through the visible range and
    /// returns the last day before an unavailable one, if any is found.
    fn next_unavailable_date(&self, anchor: NaiveDate, step: i64) -> Option<NaiveDate> {
        let visible = self.calendar.visible_range();
        let mut next = date::add_days(anchor, step);
        loop {
            let in_view = if step < 0 {
                next >= visible.start
            } else {
                next <= visible.end
            };
            if !in_view || self.calendar.is_cell_unavailable(next) {
                break;
            }
            let advanced = date::add_days(next, step);
            if advanced == next {
                break;
            }
            next = advanced;
        }
        self.calendar
            .is_cell_unavailable(next)
            .then(|| date::add_days(next, -step))
    }

    /// Steps back from `date` to the nearest available day not before `min`.
    /// Without an unavailable-date predicate every day is available.
    fn previous_available_date(&self, date: NaiveDate, min: NaiveDate) -> Option<NaiveDate> {
        if !self.calendar.has_unavailable_dates() {
            return Some(date);
        }
        let mut date = date;
        while date >= min && self.calendar.is_cell_unavailable(date) {
            let previous = date::add_days(date, -1);
            if previous == date {
                return None;
            }
            date = previous;
        }
        (date >= min).then_some(date)
    }
}
