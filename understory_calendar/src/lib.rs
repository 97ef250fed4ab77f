// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_calendar --heading-base-level=0

//! Understory Calendar: date focus, grid navigation, and range selection.
//!
//! Dates are [`chrono::NaiveDate`] values. The crate has three layers:
//!
//! - [`CalendarState`]: the focused date, the visible months, and the
//!   `min_value`/`max_value` bounds. Moving focus out of view pages the
//!   visible range.
//! - [`CalendarGridDelegate`]: a
//!   [`KeyboardDelegate`](understory_collection::KeyboardDelegate) over the day
//!   grid (weeks as rows, right-to-left aware).
//! - [`RangeCalendarState`]: two-click range selection that refuses to span
//!   unavailable dates unless told otherwise.
//!
//! ## Range selection around an unavailable day
//!
//! ```rust
//! use chrono::NaiveDate;
//! use understory_calendar::{CalendarProps, DateRange, RangeCalendarProps, RangeCalendarState};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let booked = day(15);
//! let mut state = RangeCalendarState::new(RangeCalendarProps::new(
//!     CalendarProps::default().with_bounds(Some(day(1)), Some(day(31))),
//! ))
//! .with_date_unavailable(move |date| date == booked);
//!
//! state.select_date(day(10));
//! assert_eq!(state.anchor_date(), Some(day(10)));
//!
//! // The 15th is booked, so the range stops the day before.
//! state.select_date(day(20));
//! assert_eq!(state.value(), Some(DateRange::new(day(10), day(14))));
//! assert_eq!(state.anchor_date(), None);
//! ```
//!
//! Unlike the other Understory selection crates this one requires `std`, since
//! the calendar falls back to the local date when nothing else seeds focus.

mod calendar;
mod date;
mod grid_delegate;
mod range;

pub use calendar::{CalendarProps, CalendarState, UnavailablePredicate};
pub use date::DateRange;
pub use grid_delegate::CalendarGridDelegate;
pub use range::{RangeCalendarProps, RangeCalendarState, ValidationState};
