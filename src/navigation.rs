// SPDX-License-Identifier: MPL-2.0
//! Index navigation through a fixed-size collection.
//!
//! The navigator holds the current 0-based index and the item count taken at
//! startup. Sequential moves are clamped at both ends: asking for the next
//! item on the last one (or the previous item on the first one) keeps the
//! index and reports the [`Boundary`] that was hit. Go-to targets are 1-based
//! and must fall inside `1..=total`.

use crate::error::{Error, Result};

/// End of the collection a clamped move ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    First,
    Last,
}

/// Result of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// Set when the requested move was clamped.
    pub boundary: Option<Boundary>,
}

impl Transition {
    /// Returns true if the index changed.
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Current position within a collection of `total` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    total: usize,
}

impl Navigator {
    /// Creates a navigator positioned on the first item.
    pub fn new(total: usize) -> Self {
        Self { current: 0, total }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn is_at_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_at_last(&self) -> bool {
        self.current >= self.last_index()
    }

    /// Index of the last item (0 for an empty collection).
    fn last_index(&self) -> usize {
        self.total.saturating_sub(1)
    }

    fn move_to(&mut self, to: usize, boundary: Option<Boundary>) -> Transition {
        let from = self.current;
        self.current = to;
        Transition { from, to, boundary }
    }

    pub fn first(&mut self) -> Transition {
        self.move_to(0, None)
    }

    pub fn last(&mut self) -> Transition {
        self.move_to(self.last_index(), None)
    }

    pub fn next(&mut self) -> Transition {
        if self.is_at_last() {
            self.move_to(self.current, Some(Boundary::Last))
        } else {
            self.move_to(self.current + 1, None)
        }
    }

    pub fn previous(&mut self) -> Transition {
        if self.is_at_first() {
            self.move_to(self.current, Some(Boundary::First))
        } else {
            self.move_to(self.current - 1, None)
        }
    }

    /// Jumps to the 1-based position typed by the user.
    ///
    /// The index is left untouched when the input is rejected.
    pub fn goto(&mut self, input: &str) -> Result<Transition> {
        let target = parse_target(input)?;
        if target < 1 || target as u64 > self.total as u64 {
            return Err(Error::TargetOutOfRange {
                target,
                total: self.total,
            });
        }
        Ok(self.move_to((target - 1) as usize, None))
    }

    /// Position shown to the user, as `"current/total"` with a 1-based current.
    pub fn position_label(&self) -> String {
        if self.is_empty() {
            "0/0".to_string()
        } else {
            format!("{}/{}", self.current + 1, self.total)
        }
    }
}

/// Parses a go-to input. Surrounding whitespace and a leading `+` are accepted.
pub fn parse_target(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidTarget(input.to_string()))
}
