// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration enums shared by selection state and its consumers.

use core::fmt;
use core::str::FromStr;

/// How many items may be selected at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectionMode {
    /// Nothing can be selected.
    #[default]
    None,
    /// At most one item.
    Single,
    /// Any number of items.
    Multiple,
}

/// What an unmodified selection gesture does in [`SelectionMode::Multiple`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SelectionBehavior {
    /// A click adds or removes the item (checkbox-like lists).
    #[default]
    Toggle,
    /// A click selects only the item (file-manager-like lists).
    Replace,
}

/// Which interactions [`disabled keys`](crate::MultipleSelectionState::disabled_keys) block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DisabledBehavior {
    /// Disabled keys cannot be selected but can still be focused and activated.
    Selection,
    /// Disabled keys cannot be selected, focused, or activated.
    #[default]
    All,
}

/// Which child of the focused item should receive focus, if it has any.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FocusStrategy {
    /// The first focusable child.
    #[default]
    First,
    /// The last focusable child.
    Last,
}

/// Error returned when parsing one of the configuration enums from a string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseEnumError {
    /// Name of the enum being parsed.
    pub kind: &'static str,
    /// Accepted spellings.
    pub expected: &'static [&'static str],
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}, expected one of: ", self.kind)?;
        for (i, name) in self.expected.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl core::error::Error for ParseEnumError {}

macro_rules! string_enum {
    ($ty:ident, $kind:literal, { $($name:literal => $variant:ident),+ $(,)? }) => {
        impl $ty {
            /// Returns the lowercase name of this value.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(ParseEnumError {
                        kind: $kind,
                        expected: &[$($name),+],
                    }),
                }
            }
        }
    };
}

string_enum!(SelectionMode, "selection mode", {
    "none" => None,
    "single" => Single,
    "multiple" => Multiple,
});

string_enum!(SelectionBehavior, "selection behavior", {
    "toggle" => Toggle,
    "replace" => Replace,
});

string_enum!(DisabledBehavior, "disabled behavior", {
    "selection" => Selection,
    "all" => All,
});

string_enum!(FocusStrategy, "focus strategy", {
    "first" => First,
    "last" => Last,
});
