// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-neutral keyboard events.
//!
//! Hosts translate their windowing toolkit's key events into [`KeyboardEvent`]
//! before handing them to the interaction state machines in this crate.

pub use understory_selection::Modifiers;

/// Non-printable keys the interaction layer reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Escape.
    Escape,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
}

/// A logical key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A named, non-printable key.
    Named(NamedKey),
    /// A printable character, including the space bar as `' '`.
    Character(char),
}

impl Key {
    /// Returns `true` for the space bar.
    #[must_use]
    pub fn is_space(self) -> bool {
        self == Self::Character(' ')
    }

    /// Returns the character this key types, if it is printable.
    #[must_use]
    pub fn printable(self) -> Option<char> {
        match self {
            Self::Character(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

impl From<NamedKey> for Key {
    fn from(key: NamedKey) -> Self {
        Self::Named(key)
    }
}

/// A key press with its held modifiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyboardEvent {
    /// The pressed key.
    pub key: Key,
    /// Modifiers held while pressing it.
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// A key press without modifiers.
    #[must_use]
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::empty(),
        }
    }

    /// A printable character without modifiers.
    #[must_use]
    pub fn character(c: char) -> Self {
        Self::new(Key::Character(c))
    }

    /// Returns this event with `modifiers` held.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns `true` if Shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.shift()
    }

    /// Returns `true` if the platform command modifier (Ctrl or Meta) is held.
    #[must_use]
    pub fn ctrl_or_meta(&self) -> bool {
        self.modifiers.ctrl_or_meta()
    }
}
