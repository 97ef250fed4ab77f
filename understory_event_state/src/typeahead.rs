// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type-ahead search buffer with an inactivity deadline.
//!
//! ## Usage
//!
//! 1) Feed printable characters to [`TypeSelect::push`] with the event timestamp.
//! 2) Search the collection for [`TypeSelect::search`].
//! 3) Call [`TypeSelect::tick`] from the host's timer or frame loop; the buffer
//!    clears once [`TYPEAHEAD_TIMEOUT_MS`] pass without a keystroke.
//!
//! Time is whatever monotonic millisecond clock the host uses. Nothing here
//! reads a clock on its own.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::typeahead::{TypeSelect, TYPEAHEAD_TIMEOUT_MS};
//!
//! let mut ts = TypeSelect::new();
//! assert!(ts.push('b', 0));
//! assert!(ts.push('a', 200));
//! assert_eq!(ts.search(), "ba");
//!
//! // Still within the window of the last keystroke.
//! assert!(!ts.tick(200 + TYPEAHEAD_TIMEOUT_MS - 1));
//! // Expired.
//! assert!(ts.tick(200 + TYPEAHEAD_TIMEOUT_MS));
//! assert_eq!(ts.search(), "");
//! ```

use smallvec::SmallVec;

/// Inactivity window after which the search buffer clears.
pub const TYPEAHEAD_TIMEOUT_MS: u64 = 1000;

/// Bytes stored inline before the buffer spills to the heap.
const INLINE_CAPACITY: usize = 32;

/// Accumulates typed characters into a search string.
#[derive(Clone, Debug, Default)]
pub struct TypeSelect {
    /// UTF-8 bytes of the search string. Only whole chars are ever appended.
    buffer: SmallVec<[u8; INLINE_CAPACITY]>,
    deadline_ms: Option<u64>,
}

impl TypeSelect {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current search string.
    #[must_use]
    pub fn search(&self) -> &str {
        core::str::from_utf8(&self.buffer).unwrap_or_default()
    }

    /// Returns `true` while a search is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Returns the timestamp at which the buffer will clear, if a search is in progress.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Appends `c` at time `now_ms` and restarts the inactivity window.
    ///
    /// An expired search is dropped first. A space is only accepted as part
    /// of a non-empty search, so a lone space stays available for selection.
    /// Returns whether `c` was appended.
    pub fn push(&mut self, c: char, now_ms: u64) -> bool {
        self.tick(now_ms);
        if c == ' ' && self.search().trim().is_empty() {
            return false;
        }
        let mut utf8 = [0_u8; 4];
        self.buffer
            .extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
        self.restart(now_ms);
        true
    }

    /// Pushes the inactivity deadline out from `now_ms` if a search is in progress.
    pub fn restart(&mut self, now_ms: u64) {
        if self.is_active() {
            self.deadline_ms = Some(now_ms.saturating_add(TYPEAHEAD_TIMEOUT_MS));
        }
    }

    /// Clears the buffer if its deadline has passed. Returns `true` if it did.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                log::trace!("type-ahead search expired");
                self.cancel();
                true
            }
            _ => false,
        }
    }

    /// Drops the current search immediately.
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.deadline_ms = None;
    }
}
