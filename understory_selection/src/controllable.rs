// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled/uncontrolled value synchronization.
//!
//! A widget value is *controlled* when the host owns it and passes it back in
//! on every update, and *uncontrolled* when the widget keeps it internally
//! after starting from a default. [`Controllable`] hides the difference:
//!
//! - [`Controllable::get`] returns the controlled value when there is one,
//!   otherwise the internal value.
//! - [`Controllable::set`] always notifies the change callback, but only
//!   writes internal storage when uncontrolled. A controlled host is expected
//!   to feed the accepted value back through [`Controllable::set_controlled`].
//!
//! ```
//! use understory_selection::controllable::Controllable;
//!
//! // Uncontrolled: starts at the default and stores writes.
//! let mut open = Controllable::new(None, false);
//! open.set(true);
//! assert!(*open.get());
//!
//! // Controlled: writes are reported but the host's value wins.
//! let mut open = Controllable::new(Some(false), false);
//! open.set(true);
//! assert!(!*open.get());
//! ```

use alloc::boxed::Box;
use core::fmt;

/// Callback invoked with every accepted value.
pub type ChangeHandler<T> = Box<dyn FnMut(&T)>;

/// A value that may be owned by the host (controlled) or by the widget.
pub struct Controllable<T> {
    controlled: Option<T>,
    internal: T,
    on_change: Option<ChangeHandler<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Controllable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controllable")
            .field("controlled", &self.controlled)
            .field("internal", &self.internal)
            .field("has_on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<T> Controllable<T> {
    /// Creates a value, controlled when `controlled` is `Some`.
    ///
    /// `default_value` seeds internal storage and is only read in
    /// uncontrolled mode.
    pub fn new(controlled: Option<T>, default_value: T) -> Self {
        Self {
            controlled,
            internal: default_value,
            on_change: None,
        }
    }

    /// Returns this value with a change callback installed.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Installs or replaces the change callback.
    pub fn set_on_change(&mut self, on_change: impl FnMut(&T) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Removes the change callback.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Returns the effective value.
    #[must_use]
    pub fn get(&self) -> &T {
        self.controlled.as_ref().unwrap_or(&self.internal)
    }

    /// Returns `true` while the host supplies the value.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Accepts `value` and notifies the change callback.
    ///
    /// Internal storage is only written in uncontrolled mode.
    pub fn set(&mut self, value: T) {
        match &self.controlled {
            Some(_) => {
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(&value);
                }
            }
            None => {
                self.internal = value;
                if let Some(on_change) = self.on_change.as_mut() {
                    on_change(&self.internal);
                }
            }
        }
    }

    /// Replaces the host-supplied value. `None` leaves the value uncontrolled
    /// from now on, reading internal storage again.
    ///
    /// This does not invoke the change callback.
    pub fn set_controlled(&mut self, controlled: Option<T>) {
        self.controlled = controlled;
    }
}
