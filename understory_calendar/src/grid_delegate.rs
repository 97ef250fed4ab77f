// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard delegate for a month grid of days.

use chrono::NaiveDate;
use understory_collection::{KeyboardDelegate, TextDirection};

use crate::calendar::CalendarState;
use crate::date;

/// Answers navigation queries over the days of a [`CalendarState`].
///
/// Rows are weeks, so up/down move by seven days. Left/right move by one day
/// and swap in right-to-left layouts. Paging moves by the number of visible
/// months. First/last are the ends of the visible range.
///
/// Returned dates are not clamped; [`CalendarState::set_focused_date`] does
/// that when focus moves.
#[derive(Debug)]
pub struct CalendarGridDelegate<'a> {
    calendar: &'a CalendarState,
    direction: TextDirection,
}

impl<'a> CalendarGridDelegate<'a> {
    /// Creates a delegate over `calendar`.
    pub fn new(calendar: &'a CalendarState, direction: TextDirection) -> Self {
        Self {
            calendar,
            direction,
        }
    }

    fn page_months(&self) -> i32 {
        i32::try_from(self.calendar.visible_months()).unwrap_or(i32::MAX)
    }
}

impl KeyboardDelegate<NaiveDate> for CalendarGridDelegate<'_> {
    fn key_below(&self, key: &NaiveDate) -> Option<NaiveDate> {
        Some(date::add_days(*key, 7))
    }

    fn key_above(&self, key: &NaiveDate) -> Option<NaiveDate> {
        Some(date::add_days(*key, -7))
    }

    fn key_left_of(&self, key: &NaiveDate) -> Option<NaiveDate> {
        let step = if self.direction.is_rtl() { 1 } else { -1 };
        Some(date::add_days(*key, step))
    }

    fn key_right_of(&self, key: &NaiveDate) -> Option<NaiveDate> {
        let step = if self.direction.is_rtl() { -1 } else { 1 };
        Some(date::add_days(*key, step))
    }

    fn key_page_below(&self, key: &NaiveDate) -> Option<NaiveDate> {
        Some(date::add_months(*key, self.page_months()))
    }

    fn key_page_above(&self, key: &NaiveDate) -> Option<NaiveDate> {
        Some(date::add_months(*key, -self.page_months()))
    }

    fn first_key(&self, _from: Option<&NaiveDate>, _global: bool) -> Option<NaiveDate> {
        Some(self.calendar.visible_range().start)
    }

    fn last_key(&self, _from: Option<&NaiveDate>, _global: bool) -> Option<NaiveDate> {
        Some(self.calendar.visible_range().end)
    }
}
