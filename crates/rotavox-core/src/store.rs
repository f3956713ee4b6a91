//! The option store seam.
//!
//! Every arrangement operation reads and mutates a question's rendered
//! options through this trait, keyed by stable codes rather than positions.
//! Hosts adapt their UI toolkit behind it; tests use the in-memory store
//! from [`crate::memory`].

use crate::code::OptionCode;
use crate::error::{Result, RotavoxError};
use crate::option::RenderedOption;
use crate::question::QuestionId;

/// Read and reorder access to a question's rendered options.
///
/// All methods take and return option codes, never positional indices, so
/// option identity stays stable across reorders.
///
/// # Implementation Notes
///
/// - `reorder` must reject anything that is not a permutation of the
///   question's current codes; reordering is a bijection by contract
/// - Flag setters must not change the rendered order
/// - Unknown questions and codes are referential errors, never panics
pub trait OptionStore {
    /// The question's options in their current rendered order.
    fn options(&self, question: QuestionId) -> Result<&[RenderedOption]>;

    /// Replaces the question's rendered order with `new_order`.
    ///
    /// `new_order` must contain exactly the question's current codes, each
    /// once. No code is created, dropped, or duplicated by a reorder.
    fn reorder(&mut self, question: QuestionId, new_order: &[OptionCode]) -> Result<()>;

    /// Moves `code` to sit immediately before `anchor`.
    fn insert_before(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        anchor: OptionCode,
    ) -> Result<()>;

    /// Moves `code` to sit immediately after `anchor`.
    fn insert_after(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        anchor: OptionCode,
    ) -> Result<()>;

    /// Moves `code` to the front of the rendered order.
    fn insert_at_front(&mut self, question: QuestionId, code: OptionCode) -> Result<()>;

    /// Sets whether `code`'s input is selected.
    fn set_selected(&mut self, question: QuestionId, code: OptionCode, selected: bool)
        -> Result<()>;

    /// Sets the advisory input-level disable flag.
    fn set_read_only(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        read_only: bool,
    ) -> Result<()>;

    /// Sets the visual-disable styling flag.
    fn set_visual_disabled(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        disabled: bool,
    ) -> Result<()>;

    /// Sets whether the option is hidden from display.
    fn set_hidden(&mut self, question: QuestionId, code: OptionCode, hidden: bool) -> Result<()>;

    /// The question's codes in rendered order.
    fn codes(&self, question: QuestionId) -> Result<Vec<OptionCode>> {
        Ok(self.options(question)?.iter().map(|o| o.code).collect())
    }

    /// Returns `true` if `question` is mounted and contains `code`.
    fn contains(&self, question: QuestionId, code: OptionCode) -> bool {
        self.options(question)
            .map(|opts| opts.iter().any(|o| o.code == code))
            .unwrap_or(false)
    }

    /// One option's state, by code.
    fn option(&self, question: QuestionId, code: OptionCode) -> Result<&RenderedOption> {
        self.options(question)?
            .iter()
            .find(|o| o.code == code)
            .ok_or(RotavoxError::UnknownCode { question, code })
    }

    /// Returns `true` if `code`'s input is currently selected.
    fn is_selected(&self, question: QuestionId, code: OptionCode) -> Result<bool> {
        Ok(self.option(question, code)?.selected)
    }

    /// The selected codes in rendered order.
    fn selected_codes(&self, question: QuestionId) -> Result<Vec<OptionCode>> {
        Ok(self
            .options(question)?
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.code)
            .collect())
    }
}
