// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focused date and visible range of a month-based calendar.

use std::fmt;

use chrono::NaiveDate;
use understory_selection::controllable::Controllable;

use crate::date::{self, DateRange};

/// Predicate marking dates that cannot be picked (booked, holidays, ...).
pub type UnavailablePredicate = Box<dyn Fn(NaiveDate) -> bool>;

/// Configuration for a [`CalendarState`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarProps {
    /// Earliest selectable date.
    pub min_value: Option<NaiveDate>,
    /// Latest selectable date.
    pub max_value: Option<NaiveDate>,
    /// Number of months shown side by side. Zero is treated as one.
    pub visible_months: u32,
    /// Host-controlled focused date.
    pub focused_value: Option<NaiveDate>,
    /// Initial focused date in uncontrolled mode.
    pub default_focused_value: Option<NaiveDate>,
    /// Dates can be focused but not selected.
    pub is_read_only: bool,
    /// Nothing can be focused or selected.
    pub is_disabled: bool,
}

impl Default for CalendarProps {
    fn default() -> Self {
        Self {
            min_value: None,
            max_value: None,
            visible_months: 1,
            focused_value: None,
            default_focused_value: None,
            is_read_only: false,
            is_disabled: false,
        }
    }
}

impl CalendarProps {
    /// Sets the selectable bounds.
    #[must_use]
    pub fn with_bounds(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Sets the number of visible months.
    #[must_use]
    pub fn with_visible_months(mut self, months: u32) -> Self {
        self.visible_months = months;
        self
    }

    /// Sets the initial focused date.
    #[must_use]
    pub fn with_default_focused_value(mut self, date: NaiveDate) -> Self {
        self.default_focused_value = Some(date);
        self
    }

    /// Makes the focused date host-controlled.
    #[must_use]
    pub fn with_focused_value(mut self, date: NaiveDate) -> Self {
        self.focused_value = Some(date);
        self
    }

    /// Sets the read-only flag.
    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.is_read_only = read_only;
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }
}

/// Focus and paging state for a calendar grid.
///
/// The visible range always covers whole months starting at the first of a
/// month, and always contains the focused date.
pub struct CalendarState {
    min_value: Option<NaiveDate>,
    max_value: Option<NaiveDate>,
    visible_months: u32,
    is_read_only: bool,
    is_disabled: bool,
    is_focused: bool,
    focused_date: Controllable<NaiveDate>,
    visible_start: NaiveDate,
    is_date_unavailable: Option<UnavailablePredicate>,
}

impl fmt::Debug for CalendarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarState")
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("visible_months", &self.visible_months)
            .field("is_read_only", &self.is_read_only)
            .field("is_disabled", &self.is_disabled)
            .field("is_focused", &self.is_focused)
            .field("focused_date", &self.focused_date)
            .field("visible_start", &self.visible_start)
            .field("has_unavailable_dates", &self.is_date_unavailable.is_some())
            .finish()
    }
}

impl CalendarState {
    /// Creates calendar state. `selected` seeds the focused date when no
    /// focused value is configured.
    ///
    /// Without any hint the calendar opens on today's date (local time).
    pub fn new(props: CalendarProps, selected: Option<NaiveDate>) -> Self {
        let initial = props
            .default_focused_value
            .or(selected)
            .or(props.min_value)
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let initial = date::constrain(initial, props.min_value, props.max_value);
        let focused_date = Controllable::new(props.focused_value, initial);

        let mut state = Self {
            min_value: props.min_value,
            max_value: props.max_value,
            visible_months: props.visible_months.max(1),
            is_read_only: props.is_read_only,
            is_disabled: props.is_disabled,
            is_focused: false,
            visible_start: date::start_of_month(*focused_date.get()),
            focused_date,
            is_date_unavailable: None,
        };
        state.align_to_focus();
        state
    }

    /// Returns this state with an unavailable-date predicate installed.
    #[must_use]
    pub fn with_date_unavailable(mut self, predicate: impl Fn(NaiveDate) -> bool + 'static) -> Self {
        self.is_date_unavailable = Some(Box::new(predicate));
        self
    }

    /// Returns this state with a focus change callback installed.
    #[must_use]
    pub fn with_on_focus_change(mut self, on_change: impl FnMut(&NaiveDate) + 'static) -> Self {
        self.focused_date.set_on_change(on_change);
        self
    }

    /// Installs or clears the unavailable-date predicate.
    pub fn set_date_unavailable(&mut self, predicate: Option<UnavailablePredicate>) {
        self.is_date_unavailable = predicate;
    }

    /// Returns `true` if an unavailable-date predicate is installed.
    #[must_use]
    pub fn has_unavailable_dates(&self) -> bool {
        self.is_date_unavailable.is_some()
    }

    /// Earliest focusable date.
    #[must_use]
    pub fn min_value(&self) -> Option<NaiveDate> {
        self.min_value
    }

    /// Latest focusable date.
    #[must_use]
    pub fn max_value(&self) -> Option<NaiveDate> {
        self.max_value
    }

    /// Replaces the focusable bounds. The focused date is not moved.
    pub fn set_bounds(&mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) {
        self.min_value = min;
        self.max_value = max;
    }

    /// Number of months shown at once.
    #[must_use]
    pub fn visible_months(&self) -> u32 {
        self.visible_months
    }

    /// Returns the read-only flag.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    /// Updates the read-only flag.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.is_read_only = read_only;
    }

    /// Returns the disabled flag.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    /// Updates the disabled flag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    /// Returns whether the grid has keyboard focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Sets whether the grid has keyboard focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    /// Returns the focused date.
    #[must_use]
    pub fn focused_date(&self) -> NaiveDate {
        *self.focused_date.get()
    }

    /// Pushes a new host-controlled focused date.
    pub fn set_controlled_focused_date(&mut self, date: Option<NaiveDate>) {
        self.focused_date.set_controlled(date);
        self.align_to_focus();
    }

    /// The visible days, from the first of the first month to the last of the last.
    #[must_use]
    pub fn visible_range(&self) -> DateRange {
        let months = i32::try_from(self.visible_months).unwrap_or(i32::MAX);
        let end = date::add_days(date::add_months(self.visible_start, months), -1);
        DateRange::new(self.visible_start, end)
    }

    /// Moves focus to `date`, clamped to the bounds, paging the visible range
    /// if needed.
    pub fn set_focused_date(&mut self, date: NaiveDate) {
        let date = date::constrain(date, self.min_value, self.max_value);
        self.focused_date.set(date);
        self.align_to_focus();
    }

    /// Moves focus one day forward.
    pub fn focus_next_day(&mut self) {
        self.set_focused_date(date::add_days(self.focused_date(), 1));
    }

    /// Moves focus one day back.
    pub fn focus_previous_day(&mut self) {
        self.set_focused_date(date::add_days(self.focused_date(), -1));
    }

    /// Moves focus one week forward.
    pub fn focus_next_row(&mut self) {
        self.set_focused_date(date::add_days(self.focused_date(), 7));
    }

    /// Moves focus one week back.
    pub fn focus_previous_row(&mut self) {
        self.set_focused_date(date::add_days(self.focused_date(), -7));
    }

    /// Pages forward by the visible months, or by a year when `larger`.
    pub fn focus_next_section(&mut self, larger: bool) {
        self.page_by(self.section_months(larger));
    }

    /// Pages back by the visible months, or by a year when `larger`.
    pub fn focus_previous_section(&mut self, larger: bool) {
        self.page_by(-self.section_months(larger));
    }

    /// Focuses the first visible day.
    pub fn focus_section_start(&mut self) {
        self.set_focused_date(self.visible_range().start);
    }

    /// Focuses the last visible day.
    pub fn focus_section_end(&mut self) {
        self.set_focused_date(self.visible_range().end);
    }

    /// Returns `true` if `date` lies outside the bounds.
    #[must_use]
    pub fn is_invalid(&self, date: NaiveDate) -> bool {
        date::is_out_of_bounds(date, self.min_value, self.max_value)
    }

    /// Returns `true` if the unavailable-date predicate rejects `date`.
    #[must_use]
    pub fn is_cell_unavailable(&self, date: NaiveDate) -> bool {
        self.is_date_unavailable
            .as_ref()
            .is_some_and(|unavailable| unavailable(date))
    }

    /// Returns `true` if `date` cannot be interacted with at all.
    #[must_use]
    pub fn is_cell_disabled(&self, date: NaiveDate) -> bool {
        self.is_disabled || !self.visible_range().contains(date) || self.is_invalid(date)
    }

    fn section_months(&self, larger: bool) -> i32 {
        if larger {
            12
        } else {
            i32::try_from(self.visible_months).unwrap_or(i32::MAX)
        }
    }

    fn page_by(&mut self, months: i32) {
        self.visible_start = date::add_months(self.visible_start, months);
        self.set_focused_date(date::add_months(self.focused_date(), months));
    }

    /// Pages the visible range so it contains the focused date.
    fn align_to_focus(&mut self) {
        let focused = self.focused_date();
        let visible = self.visible_range();
        if focused < visible.start {
            self.visible_start = date::start_of_month(focused);
        } else if focused > visible.end {
            let span = i32::try_from(self.visible_months - 1).unwrap_or(0);
            self.visible_start = date::add_months(date::start_of_month(focused), -span);
        }
    }
}
