//! Stable option codes.
//!
//! A code identifies an answer option within its question independently of
//! render position, so reordering never loses track of an option's identity.

use std::fmt;

/// Stable integer identity of an answer option within a question.
///
/// Codes survive re-renders and reorders. The code `-1` is reserved for the
/// "none of the above" sentinel, which is always pinned to the end of its
/// question's order.
///
/// # Example
///
/// ```
/// use rotavox_core::OptionCode;
///
/// let code = OptionCode(3);
/// assert!(!code.is_sentinel());
/// assert!(OptionCode::NONE_OF_THE_ABOVE.is_sentinel());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OptionCode(pub i32);

impl OptionCode {
    /// The "none of the above" sentinel.
    pub const NONE_OF_THE_ABOVE: OptionCode = OptionCode(-1);

    /// Returns the raw code value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Returns `true` if this is the "none of the above" sentinel.
    pub fn is_sentinel(self) -> bool {
        self == Self::NONE_OF_THE_ABOVE
    }
}

impl fmt::Display for OptionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for OptionCode {
    fn from(value: i32) -> Self {
        OptionCode(value)
    }
}

/// Returns the consecutive codes from `start` to `end`, both inclusive.
///
/// Convenience for callers declaring rotation groups over contiguous code
/// ranges.
///
/// # Example
///
/// ```
/// use rotavox_core::{code_range, OptionCode};
///
/// assert_eq!(code_range(2, 4), vec![OptionCode(2), OptionCode(3), OptionCode(4)]);
/// assert!(code_range(5, 4).is_empty());
/// ```
pub fn code_range(start: i32, end: i32) -> Vec<OptionCode> {
    (start..=end).map(OptionCode).collect()
}
