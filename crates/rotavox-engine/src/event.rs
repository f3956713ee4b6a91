//! Selection-change event dispatch.
//!
//! The engine raises no events of its own; it only listens. Hosts call
//! [`SelectionEventSupport::fire_selection_changed`] once per user
//! interaction, and every watcher scoped to that question runs one
//! synchronous evaluation pass before the call returns. The host delivers
//! one event at a time, so passes never overlap.

use std::fmt::Debug;

use rotavox_core::{OptionStore, QuestionId, Result};
use tracing::debug;

use crate::exclusivity::ExclusivityWatcher;

/// A listener scoped to one question's selection inputs.
pub trait SelectionWatcher: Debug {
    /// The question whose selection changes this watcher reacts to.
    fn question(&self) -> QuestionId;

    /// Called after any selection within the question changed.
    fn on_selection_changed(&mut self, store: &mut dyn OptionStore) -> Result<()>;
}

impl SelectionWatcher for ExclusivityWatcher {
    fn question(&self) -> QuestionId {
        ExclusivityWatcher::question(self)
    }

    fn on_selection_changed(&mut self, store: &mut dyn OptionStore) -> Result<()> {
        self.evaluate(store)
    }
}

/// Registration and dispatch of selection watchers.
///
/// # Example
///
/// ```
/// use rotavox_core::{MemoryOptionStore, QuestionId, RenderedOption};
/// use rotavox_engine::{ExclusivityGroups, ExclusivityWatcher, SelectionEventSupport};
///
/// let mut store = MemoryOptionStore::new();
/// store.mount_question(QuestionId(1), vec![
///     RenderedOption::normal(10),
///     RenderedOption::normal(11),
/// ]);
///
/// let groups = ExclusivityGroups::new().exclusive("either", [10, 11]);
/// let watcher = ExclusivityWatcher::attach(&mut store, QuestionId(1), groups).unwrap();
///
/// let mut events = SelectionEventSupport::new();
/// events.attach(Box::new(watcher));
/// assert_eq!(events.watcher_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SelectionEventSupport {
    watchers: Vec<Box<dyn SelectionWatcher>>,
}

impl SelectionEventSupport {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a watcher for its question.
    pub fn attach(&mut self, watcher: Box<dyn SelectionWatcher>) {
        self.watchers.push(watcher);
    }

    /// Drops every watcher scoped to `question`.
    ///
    /// Called when the question is left; watcher state does not survive
    /// navigation.
    pub fn detach_question(&mut self, question: QuestionId) {
        let before = self.watchers.len();
        self.watchers.retain(|w| w.question() != question);
        if self.watchers.len() != before {
            debug!(%question, "watchers detached");
        }
    }

    /// Number of registered watchers across all questions.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    /// Returns `true` if any watcher is scoped to `question`.
    pub fn has_watchers(&self, question: QuestionId) -> bool {
        self.watchers.iter().any(|w| w.question() == question)
    }

    /// Delivers one selection-change event for `question`.
    ///
    /// Every watcher scoped to the question runs to completion, in
    /// registration order, before this returns.
    pub fn fire_selection_changed(
        &mut self,
        question: QuestionId,
        store: &mut dyn OptionStore,
    ) -> Result<()> {
        for watcher in self
            .watchers
            .iter_mut()
            .filter(|w| w.question() == question)
        {
            watcher.on_selection_changed(store)?;
        }
        Ok(())
    }
}
