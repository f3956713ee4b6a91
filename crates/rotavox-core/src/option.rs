//! Rendered option state.

use crate::code::OptionCode;

/// The kind of an answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// A regular answer option, freely reorderable within the interior.
    Normal,
    /// An "other/etc" option or the "none of the above" sentinel.
    ///
    /// Fixed options are never rotated into the interior sequence; every
    /// arrangement operation re-appends them after all normal options.
    Fixed,
}

impl OptionKind {
    /// Returns `true` for options pinned to the end of the question.
    pub fn is_fixed(self) -> bool {
        matches!(self, OptionKind::Fixed)
    }
}

/// One answer option's live state inside the option store.
///
/// The renderer creates these when a question is mounted; the engine mutates
/// the order they are kept in and the advisory flags, never the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    /// Stable identity of this option.
    pub code: OptionCode,
    /// Whether this option participates in rotation.
    pub kind: OptionKind,
    /// Whether the option's input is currently selected.
    pub selected: bool,
    /// Advisory input-level disable; the input stays present but inert.
    pub read_only: bool,
    /// Visual companion to `read_only` (dimmed styling in the host UI).
    pub visually_disabled: bool,
    /// Whether the option is hidden from display. Hiding never reorders.
    pub hidden: bool,
}

impl RenderedOption {
    /// Creates an option with all flags cleared.
    ///
    /// The sentinel code is forced to [`OptionKind::Fixed`] regardless of
    /// the requested kind, so a store can never hold a reorderable sentinel.
    pub fn new(code: OptionCode, kind: OptionKind) -> Self {
        let kind = if code.is_sentinel() {
            OptionKind::Fixed
        } else {
            kind
        };
        Self {
            code,
            kind,
            selected: false,
            read_only: false,
            visually_disabled: false,
            hidden: false,
        }
    }

    /// Creates a normal option.
    pub fn normal(code: impl Into<OptionCode>) -> Self {
        Self::new(code.into(), OptionKind::Normal)
    }

    /// Creates a fixed ("other/etc") option.
    pub fn fixed(code: impl Into<OptionCode>) -> Self {
        Self::new(code.into(), OptionKind::Fixed)
    }

    /// Returns `true` if this option is pinned to the end of the question.
    pub fn is_fixed(&self) -> bool {
        self.kind.is_fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_forced_fixed() {
        let opt = RenderedOption::new(OptionCode::NONE_OF_THE_ABOVE, OptionKind::Normal);
        assert!(opt.is_fixed());
    }

    #[test]
    fn test_new_flags_cleared() {
        let opt = RenderedOption::normal(4);
        assert!(!opt.selected);
        assert!(!opt.read_only);
        assert!(!opt.visually_disabled);
        assert!(!opt.hidden);
        assert_eq!(opt.kind, OptionKind::Normal);
    }
}
