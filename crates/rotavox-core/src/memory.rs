//! In-memory store and directory.
//!
//! Reference implementations of [`OptionStore`] and [`QuestionDirectory`]
//! backed by plain collections. Hosts without a retained UI tree can use
//! them directly; the engine's tests are built on them.

use std::collections::HashMap;

use crate::code::OptionCode;
use crate::error::{Result, RotavoxError};
use crate::option::RenderedOption;
use crate::question::{QuestionDirectory, QuestionId, QuestionMeta};
use crate::store::OptionStore;

/// An [`OptionStore`] backed by a map of option vectors.
#[derive(Debug, Default)]
pub struct MemoryOptionStore {
    questions: HashMap<QuestionId, Vec<RenderedOption>>,
}

impl MemoryOptionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a question with its rendered options, replacing any previous
    /// mount of the same id.
    pub fn mount_question(
        &mut self,
        question: impl Into<QuestionId>,
        options: Vec<RenderedOption>,
    ) {
        self.questions.insert(question.into(), options);
    }

    /// Unmounts a question, discarding its option state.
    pub fn unmount_question(&mut self, question: QuestionId) {
        self.questions.remove(&question);
    }

    /// Returns `true` if `question` is mounted.
    pub fn is_mounted(&self, question: QuestionId) -> bool {
        self.questions.contains_key(&question)
    }

    fn options_mut(&mut self, question: QuestionId) -> Result<&mut Vec<RenderedOption>> {
        self.questions
            .get_mut(&question)
            .ok_or(RotavoxError::UnknownQuestion(question))
    }

    fn option_mut(&mut self, question: QuestionId, code: OptionCode) -> Result<&mut RenderedOption> {
        self.options_mut(question)?
            .iter_mut()
            .find(|o| o.code == code)
            .ok_or(RotavoxError::UnknownCode { question, code })
    }

    /// Moves `code` relative to `anchor`: directly before it when `after`
    /// is `false`, directly after it otherwise.
    fn move_adjacent(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        anchor: OptionCode,
        after: bool,
    ) -> Result<()> {
        if code == anchor {
            return Ok(());
        }
        let options = self.options_mut(question)?;
        let from = options
            .iter()
            .position(|o| o.code == code)
            .ok_or(RotavoxError::UnknownCode { question, code })?;
        let anchor_at = options
            .iter()
            .position(|o| o.code == anchor)
            .ok_or(RotavoxError::UnknownCode {
                question,
                code: anchor,
            })?;
        let option = options.remove(from);
        // Removing an option before the anchor shifts the anchor left one.
        let anchor_at = if from < anchor_at {
            anchor_at - 1
        } else {
            anchor_at
        };
        let target = if after { anchor_at + 1 } else { anchor_at };
        options.insert(target, option);
        Ok(())
    }
}

impl OptionStore for MemoryOptionStore {
    fn options(&self, question: QuestionId) -> Result<&[RenderedOption]> {
        self.questions
            .get(&question)
            .map(Vec::as_slice)
            .ok_or(RotavoxError::UnknownQuestion(question))
    }

    fn reorder(&mut self, question: QuestionId, new_order: &[OptionCode]) -> Result<()> {
        let options = self.options_mut(question)?;
        if new_order.len() != options.len() {
            return Err(RotavoxError::Config(format!(
                "reorder of {question} must keep all {} codes, got {}",
                options.len(),
                new_order.len()
            )));
        }
        // Validate the permutation in full before touching the stored order.
        let mut reordered: Vec<RenderedOption> = Vec::with_capacity(options.len());
        for code in new_order {
            if reordered.iter().any(|o| o.code == *code) {
                return Err(RotavoxError::Config(format!(
                    "reorder of {question} names code {code} twice"
                )));
            }
            let option = options
                .iter()
                .find(|o| o.code == *code)
                .cloned()
                .ok_or_else(|| {
                    RotavoxError::Config(format!(
                        "reorder of {question} names unknown code {code}"
                    ))
                })?;
            reordered.push(option);
        }
        *options = reordered;
        Ok(())
    }

    fn insert_before(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        anchor: OptionCode,
    ) -> Result<()> {
        self.move_adjacent(question, code, anchor, false)
    }

    fn insert_after(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        anchor: OptionCode,
    ) -> Result<()> {
        self.move_adjacent(question, code, anchor, true)
    }

    fn insert_at_front(&mut self, question: QuestionId, code: OptionCode) -> Result<()> {
        let options = self.options_mut(question)?;
        let from = options
            .iter()
            .position(|o| o.code == code)
            .ok_or(RotavoxError::UnknownCode { question, code })?;
        let option = options.remove(from);
        options.insert(0, option);
        Ok(())
    }

    fn set_selected(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        selected: bool,
    ) -> Result<()> {
        self.option_mut(question, code)?.selected = selected;
        Ok(())
    }

    fn set_read_only(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        read_only: bool,
    ) -> Result<()> {
        self.option_mut(question, code)?.read_only = read_only;
        Ok(())
    }

    fn set_visual_disabled(
        &mut self,
        question: QuestionId,
        code: OptionCode,
        disabled: bool,
    ) -> Result<()> {
        self.option_mut(question, code)?.visually_disabled = disabled;
        Ok(())
    }

    fn set_hidden(&mut self, question: QuestionId, code: OptionCode, hidden: bool) -> Result<()> {
        self.option_mut(question, code)?.hidden = hidden;
        Ok(())
    }
}

/// A [`QuestionDirectory`] backed by a vector of metadata in form order.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    metas: Vec<QuestionMeta>,
}

impl MemoryDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a question's metadata, keeping form order.
    pub fn push(&mut self, meta: QuestionMeta) {
        self.metas.push(meta);
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with_question(mut self, meta: QuestionMeta) -> Self {
        self.push(meta);
        self
    }

    /// Metadata for `question`, if registered.
    pub fn meta(&self, question: QuestionId) -> Option<&QuestionMeta> {
        self.metas.iter().find(|m| m.id == question)
    }
}

impl QuestionDirectory for MemoryDirectory {
    fn question_ids(&self) -> Vec<QuestionId> {
        self.metas.iter().map(|m| m.id).collect()
    }

    fn piping_parent(&self, question: QuestionId) -> Option<QuestionId> {
        self.meta(question).and_then(|m| m.piping_parent)
    }
}
