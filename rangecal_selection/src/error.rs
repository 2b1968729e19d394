// Copyright 2025 the Rangecal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::SelectionKind;

/// Error returned when no transition is defined between two selection kinds.
///
/// Hosting widgets should treat this as a programming error: callers are
/// expected to split an unsupported change into supported steps (for example
/// a cell to none, then none to a range).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionError {
    /// Kind of the state the transition would start from.
    pub previous: SelectionKind,
    /// Kind of the state the transition would end at.
    pub current: SelectionKind,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} selection can't be transitioned to {} selection",
            self.previous, self.current
        )
    }
}

impl core::error::Error for TransitionError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn message_names_both_kinds() {
        let err = TransitionError {
            previous: SelectionKind::Range,
            current: SelectionKind::Cell,
        };

        assert_eq!(
            err.to_string(),
            "Range selection can't be transitioned to Cell selection"
        );
    }
}
