//!
//! Digit input mask.
//!
//! A mask is a template string where `#` marks a slot for one
//! input digit and every other character is a literal that is
//! copied to the output.
//!
//! ```
//! use rat_field::mask::{apply_mask, Mask};
//!
//! assert_eq!(apply_mask("5551234567", "(###) ###-####"), "(555) 123-4567");
//!
//! let phone = Mask::new("###-###-####");
//! assert_eq!(phone.format("tel: 123 456 7890"), "123-456-7890");
//! ```
//!
//! Masking never fails. A pattern without any `#` only ever
//! emits literals, and input that doesn't fit is dropped.
//!
use std::fmt::{Display, Formatter};

/// Placeholder for one digit.
pub const DIGIT_SLOT: char = '#';

/// Remove everything that is not an ascii digit.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Number of ascii digits in the text.
pub fn digit_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Apply the mask to the given digits.
///
/// Walks the mask left to right and takes one digit for each `#`.
/// Any other mask char is copied. If the next digit happens to be
/// the same char as the literal it is consumed too, so pasting
/// an already formatted value doesn't duplicate it.
///
/// Stops when either the mask or the digits run out. No literal
/// is ever emitted ahead of input, and the result is never longer
/// than the mask.
pub fn apply_mask(value: &str, mask: &str) -> String {
    let mut masked = String::with_capacity(mask.len());
    let mut value = value.chars().peekable();

    for m in mask.chars() {
        let Some(&v) = value.peek() else {
            break;
        };
        if m == DIGIT_SLOT {
            masked.push(v);
            value.next();
        } else {
            masked.push(m);
            if v == m {
                value.next();
            }
        }
    }

    masked
}

/// Number of `#` slots the digits fill when masked.
///
/// Digits that are absorbed by a literal of the same char don't
/// count. Follows the same scan as [apply_mask].
pub fn filled_slots(value: &str, mask: &str) -> usize {
    let mut filled = 0;
    let mut value = value.chars().peekable();

    for m in mask.chars() {
        let Some(&v) = value.peek() else {
            break;
        };
        if m == DIGIT_SLOT {
            filled += 1;
            value.next();
        } else if v == m {
            value.next();
        }
    }

    filled
}

/// Char position in a masked value directly behind the n-th slot.
///
/// Returns 0 for n == 0, and the length of the mask if there
/// are fewer than n slots.
pub fn pos_after_slots(mask: &str, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut seen = 0;
    for (pos, m) in mask.chars().enumerate() {
        if m == DIGIT_SLOT {
            seen += 1;
            if seen == n {
                return pos + 1;
            }
        }
    }
    mask.chars().count()
}

/// A digit mask pattern.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    pattern: String,
}

impl Mask {
    /// New mask. Any string is a valid pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Length of the pattern in chars.
    /// This is the maximum length of any masked value.
    #[inline]
    pub fn len(&self) -> usize {
        self.pattern.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Number of digit slots.
    pub fn slots(&self) -> usize {
        self.pattern.chars().filter(|c| *c == DIGIT_SLOT).count()
    }

    /// Apply the mask to a string of digits.
    #[inline]
    pub fn apply(&self, digits: &str) -> String {
        apply_mask(digits, &self.pattern)
    }

    /// Number of slots the digits fill.
    #[inline]
    pub fn filled_slots(&self, digits: &str) -> usize {
        filled_slots(digits, &self.pattern)
    }

    /// Char position behind the n-th slot.
    #[inline]
    pub fn pos_after_slots(&self, n: usize) -> usize {
        pos_after_slots(&self.pattern, n)
    }

    /// Char position of the first slot. Everything before is
    /// a leading literal.
    pub fn first_slot(&self) -> usize {
        self.pattern
            .chars()
            .position(|c| c == DIGIT_SLOT)
            .unwrap_or(self.len())
    }

    /// Strip all non-digits from the raw input and apply the mask.
    #[inline]
    pub fn format(&self, raw: &str) -> String {
        self.apply(&digits_only(raw))
    }

    /// The value is a masked value that fills the whole pattern.
    pub fn is_complete(&self, value: &str) -> bool {
        !self.is_empty() && value.chars().count() == self.len() && self.format(value) == value
    }
}

impl Display for Mask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}

impl From<&str> for Mask {
    fn from(value: &str) -> Self {
        Mask::new(value)
    }
}

impl From<String> for Mask {
    fn from(value: String) -> Self {
        Mask::new(value)
    }
}
