// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input context for [`SelectionManager::select`](crate::SelectionManager::select).

bitflags::bitflags! {
    /// Keyboard modifiers held during an input event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0000_0001;
        /// Control.
        const CTRL  = 0b0000_0010;
        /// Meta (Command on macOS, Windows key elsewhere).
        const META  = 0b0000_0100;
        /// Alt / Option.
        const ALT   = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` if Shift is held.
    #[must_use]
    pub fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` if Control or Meta is held.
    ///
    /// Both count as the platform "toggle" modifier (Ctrl on Windows/Linux,
    /// Cmd on macOS).
    #[must_use]
    pub fn ctrl_or_meta(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}

/// The kind of device that produced a pointer event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerType {
    /// A mouse or trackpad.
    #[default]
    Mouse,
    /// A pen or stylus.
    Pen,
    /// A finger on a touch screen.
    Touch,
    /// A keyboard activation (Enter/Space).
    Keyboard,
    /// A synthetic activation from assistive technology.
    Virtual,
}

impl PointerType {
    /// Returns `true` for inputs that cannot hold modifier keys.
    ///
    /// Selection treats these as toggles so multi-selection stays reachable.
    #[must_use]
    pub fn lacks_modifiers(self) -> bool {
        matches!(self, Self::Touch | Self::Virtual)
    }
}

/// Input details that shape how a selection gesture is interpreted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectionEvent {
    /// Modifiers held during the gesture.
    pub modifiers: Modifiers,
    /// Device that produced the gesture.
    pub pointer_type: PointerType,
}

impl SelectionEvent {
    /// A mouse gesture with the given modifiers.
    #[must_use]
    pub fn with_modifiers(modifiers: Modifiers) -> Self {
        Self {
            modifiers,
            pointer_type: PointerType::Mouse,
        }
    }

    /// A gesture from `pointer_type` without modifiers.
    #[must_use]
    pub fn from_pointer(pointer_type: PointerType) -> Self {
        Self {
            modifiers: Modifiers::empty(),
            pointer_type,
        }
    }

    /// A Shift gesture.
    #[must_use]
    pub fn shift() -> Self {
        Self::with_modifiers(Modifiers::SHIFT)
    }

    /// A Ctrl gesture.
    #[must_use]
    pub fn ctrl() -> Self {
        Self::with_modifiers(Modifiers::CTRL)
    }
}
