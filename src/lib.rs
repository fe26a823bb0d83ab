#![doc = include_str!("../readme.md")]
#![allow(clippy::collapsible_else_if)]

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod mask;
pub mod text_field;

pub mod event {
    //!
    //! Event-handler traits and Keybindings.
    //!

    pub use rat_event::*;
    use rat_text::event::TextOutcome;

    /// Result of event handling for the text-field.
    #[derive(Debug, Default, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
    pub enum FieldOutcome {
        /// The given event has not been used at all.
        #[default]
        Continue,
        /// The event has been recognized, but the result was nil.
        /// Further processing for this event may stop.
        Unchanged,
        /// The event has been recognized and there is some change
        /// due to it. Cursor movement, focus.
        /// Further processing for this event may stop.
        /// Rendering the ui is advised.
        ///
        /// An edit that ran through the mask but left the value
        /// as it was is reported as Changed too. The change callback
        /// has been called for it.
        Changed,
        /// The value has been run through the mask, it differs
        /// from the previous value and the change has been reported.
        ValueChanged,
    }

    impl ConsumedEvent for FieldOutcome {
        fn is_consumed(&self) -> bool {
            *self != FieldOutcome::Continue
        }
    }

    // Useful for converting most navigation/edit results.
    impl From<bool> for FieldOutcome {
        fn from(value: bool) -> Self {
            if value {
                FieldOutcome::Changed
            } else {
                FieldOutcome::Unchanged
            }
        }
    }

    impl From<Outcome> for FieldOutcome {
        fn from(value: Outcome) -> Self {
            match value {
                Outcome::Continue => FieldOutcome::Continue,
                Outcome::Unchanged => FieldOutcome::Unchanged,
                Outcome::Changed => FieldOutcome::Changed,
            }
        }
    }

    impl From<TextOutcome> for FieldOutcome {
        fn from(value: TextOutcome) -> Self {
            match value {
                TextOutcome::Continue => FieldOutcome::Continue,
                TextOutcome::Unchanged => FieldOutcome::Unchanged,
                TextOutcome::Changed => FieldOutcome::Changed,
                TextOutcome::TextChanged => FieldOutcome::ValueChanged,
            }
        }
    }

    impl From<FieldOutcome> for Outcome {
        fn from(value: FieldOutcome) -> Self {
            match value {
                FieldOutcome::Continue => Outcome::Continue,
                FieldOutcome::Unchanged => Outcome::Unchanged,
                FieldOutcome::Changed => Outcome::Changed,
                FieldOutcome::ValueChanged => Outcome::Changed,
            }
        }
    }
}

/// Errors for the position based accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    /// Char position out of bounds.
    ///
    /// Contains the position attempted and the length
    /// of the value in chars, in that order.
    PositionOutOfBounds(usize, usize),
    /// Char range out of bounds.
    ///
    /// Contains start and end of the range and the length
    /// of the value in chars.
    RangeOutOfBounds(usize, usize, usize),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for FieldError {}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
