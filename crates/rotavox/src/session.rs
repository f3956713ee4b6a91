//! The caller-facing session.
//!
//! Question setup code talks to a [`Session`]: it carries the ambient
//! "current question" the navigation controller maintains, owns the random
//! source and the selection-event dispatch, and forms the error boundary
//! where arrangement failures are logged and masked. Apart from
//! [`sync_one_to_one`](Session::sync_one_to_one), callers cannot
//! distinguish a no-op failure from a successful no-op; failures surface
//! only as developer-console diagnostics.

use rotavox_config::ArrangementConfig;
use rotavox_core::{
    OptionCode, OptionStore, QuestionDirectory, QuestionId, Result, RotavoxError,
};
use rotavox_engine::{
    apply_plan, piping, position, rotation, visibility, EngineRandom, ExclusivityGroups,
    ExclusivityWatcher, RotationConfig, SelectionEventSupport,
};
use tracing::error;

/// One render lifecycle's arrangement state.
///
/// Owns the option store and question directory the renderer produced, the
/// random source, and the watchers attached so far. All state is discarded
/// with the session when the form unmounts.
#[derive(Debug)]
pub struct Session<S, D> {
    store: S,
    directory: D,
    rng: EngineRandom,
    events: SelectionEventSupport,
    cur: Option<QuestionId>,
}

impl<S: OptionStore, D: QuestionDirectory> Session<S, D> {
    /// Creates a session drawing randomness from OS entropy.
    pub fn new(store: S, directory: D) -> Self {
        Self::with_random(store, directory, EngineRandom::new())
    }

    /// Creates a session with an injected random source.
    ///
    /// Use a seeded source for reproducible arrangements in tests.
    pub fn with_random(store: S, directory: D, rng: EngineRandom) -> Self {
        Self {
            store,
            directory,
            rng,
            events: SelectionEventSupport::new(),
            cur: None,
        }
    }

    /// Makes `question` the current question.
    ///
    /// Watchers of the previously current question are discarded; their
    /// state does not survive navigation.
    pub fn enter(&mut self, question: impl Into<QuestionId>) {
        if let Some(previous) = self.cur.take() {
            self.events.detach_question(previous);
        }
        self.cur = Some(question.into());
    }

    /// Leaves the current question, discarding its watchers.
    pub fn leave(&mut self) {
        if let Some(previous) = self.cur.take() {
            self.events.detach_question(previous);
        }
    }

    /// The current question, if any.
    pub fn current(&self) -> Option<QuestionId> {
        self.cur
    }

    /// Read access to the option store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Write access to the option store, for the host's own bookkeeping.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The question directory the session reads piping relations from.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    fn current_question(&self) -> Result<QuestionId> {
        self.cur
            .ok_or_else(|| RotavoxError::Config("no current question".into()))
    }

    /// Logs a failed arrangement and reports nothing to the caller.
    fn masked(op: &'static str, result: Result<()>) {
        if let Err(e) = result {
            error!(op, error = %e, "arrangement failed; rendered order left as-is");
        }
    }

    /// Rotates the current question's options group-wise.
    pub fn rotate(&mut self, groups: &[Vec<OptionCode>], config: &RotationConfig) {
        let result = self
            .current_question()
            .and_then(|q| rotation::rotate(&mut self.store, &mut self.rng, q, groups, config));
        Self::masked("rotate", result);
    }

    /// Rotates `question`'s options group-wise.
    pub fn rotate_on(
        &mut self,
        question: impl Into<QuestionId>,
        groups: &[Vec<OptionCode>],
        config: &RotationConfig,
    ) {
        let result = rotation::rotate(&mut self.store, &mut self.rng, question.into(), groups, config);
        Self::masked("rotate", result);
    }

    /// Moves `codes` to sit immediately after `base` in the current question.
    pub fn place_after(&mut self, base: impl Into<OptionCode>, codes: &[OptionCode]) {
        let result = self
            .current_question()
            .and_then(|q| position::place_after(&mut self.store, q, base.into(), codes));
        Self::masked("place_after", result);
    }

    /// Moves `codes` to sit immediately after `base` in `question`.
    pub fn place_after_on(
        &mut self,
        question: impl Into<QuestionId>,
        base: impl Into<OptionCode>,
        codes: &[OptionCode],
    ) {
        let result = position::place_after(&mut self.store, question.into(), base.into(), codes);
        Self::masked("place_after", result);
    }

    /// Moves `codes` to sit immediately before `base` in the current question.
    pub fn place_before(&mut self, base: impl Into<OptionCode>, codes: &[OptionCode]) {
        let result = self
            .current_question()
            .and_then(|q| position::place_before(&mut self.store, q, base.into(), codes));
        Self::masked("place_before", result);
    }

    /// Moves `codes` to sit immediately before `base` in `question`.
    pub fn place_before_on(
        &mut self,
        question: impl Into<QuestionId>,
        base: impl Into<OptionCode>,
        codes: &[OptionCode],
    ) {
        let result = position::place_before(&mut self.store, question.into(), base.into(), codes);
        Self::masked("place_before", result);
    }

    /// Moves `codes` to the front of the current question.
    pub fn place_at_top(&mut self, codes: &[OptionCode]) {
        let result = self
            .current_question()
            .and_then(|q| position::place_at_top(&mut self.store, q, codes));
        Self::masked("place_at_top", result);
    }

    /// Moves `codes` to the front of `question`.
    pub fn place_at_top_on(&mut self, question: impl Into<QuestionId>, codes: &[OptionCode]) {
        let result = position::place_at_top(&mut self.store, question.into(), codes);
        Self::masked("place_at_top", result);
    }

    /// Hides `codes` in the current question when `cond` holds, shows them
    /// otherwise.
    pub fn hide(&mut self, codes: &[OptionCode], cond: bool) {
        let result = self
            .current_question()
            .and_then(|q| visibility::set_hidden(&mut self.store, q, codes, cond));
        Self::masked("hide", result);
    }

    /// Shows `codes` in the current question when `cond` holds, hides them
    /// otherwise.
    pub fn show(&mut self, codes: &[OptionCode], cond: bool) {
        self.hide(codes, !cond);
    }

    /// Disables `codes` in the current question when `cond` holds,
    /// re-enables them otherwise.
    pub fn disable(&mut self, codes: &[OptionCode], cond: bool) {
        let result = self
            .current_question()
            .and_then(|q| visibility::set_disabled(&mut self.store, q, codes, cond));
        Self::masked("disable", result);
    }

    /// Disables or re-enables `codes` in `question`.
    pub fn disable_on(&mut self, question: impl Into<QuestionId>, codes: &[OptionCode], cond: bool) {
        let result = visibility::set_disabled(&mut self.store, question.into(), codes, cond);
        Self::masked("disable", result);
    }

    /// Hides or shows `codes` in `question`.
    pub fn hide_on(&mut self, question: impl Into<QuestionId>, codes: &[OptionCode], cond: bool) {
        let result = visibility::set_hidden(&mut self.store, question.into(), codes, cond);
        Self::masked("hide", result);
    }

    /// Reorders every piped descendant of `base` to follow its surviving
    /// order. Descendants in `excludes` keep their own order.
    pub fn sync_descendants(&mut self, base: impl Into<QuestionId>, excludes: &[QuestionId]) {
        let result =
            piping::sync_descendants(&mut self.store, &self.directory, base.into(), excludes);
        Self::masked("sync_descendants", result);
    }

    /// Copies `base`'s order onto the current question, strictly 1:1.
    ///
    /// # Errors
    ///
    /// Unlike the other arrangement operations, a consistency failure here
    /// is raised to the caller: a partial reorder would silently corrupt
    /// option identity matching.
    pub fn sync_one_to_one(&mut self, base: impl Into<QuestionId>) -> Result<()> {
        let target = self.current_question()?;
        self.sync_one_to_one_on(base, target)
    }

    /// Copies `base`'s order onto `target`, strictly 1:1.
    pub fn sync_one_to_one_on(
        &mut self,
        base: impl Into<QuestionId>,
        target: impl Into<QuestionId>,
    ) -> Result<()> {
        piping::sync_one_to_one(&mut self.store, base.into(), target.into())
    }

    /// Declares exclusivity groups for the current question and starts
    /// watching its selection changes.
    pub fn set_exclusivity(&mut self, groups: ExclusivityGroups) {
        match self.current_question() {
            Ok(q) => self.set_exclusivity_on(q, groups),
            Err(e) => Self::masked("set_exclusivity", Err(e)),
        }
    }

    /// Declares exclusivity groups for `question` and starts watching its
    /// selection changes.
    pub fn set_exclusivity_on(&mut self, question: impl Into<QuestionId>, groups: ExclusivityGroups) {
        let question = question.into();
        let result = ExclusivityWatcher::attach(&mut self.store, question, groups).map(|watcher| {
            self.events.attach(Box::new(watcher));
        });
        Self::masked("set_exclusivity", result);
    }

    /// Selects `code` in the current question and runs the watchers.
    pub fn select(&mut self, code: impl Into<OptionCode>) {
        self.set_selection(code.into(), true);
    }

    /// Deselects `code` in the current question and runs the watchers.
    pub fn deselect(&mut self, code: impl Into<OptionCode>) {
        self.set_selection(code.into(), false);
    }

    fn set_selection(&mut self, code: OptionCode, selected: bool) {
        let result = self.current_question().and_then(|q| {
            self.store.set_selected(q, code, selected)?;
            self.events.fire_selection_changed(q, &mut self.store)
        });
        Self::masked("select", result);
    }

    /// Notifies the watchers that a selection in the current question
    /// changed outside the session's own `select`/`deselect`.
    pub fn selection_changed(&mut self) {
        let result = self
            .current_question()
            .and_then(|q| self.events.fire_selection_changed(q, &mut self.store));
        Self::masked("selection_changed", result);
    }

    /// Applies a declarative arrangement plan to the whole form.
    ///
    /// # Errors
    ///
    /// Plan application runs at form setup, before any masking boundary;
    /// an invalid or failing plan is reported to the host.
    pub fn apply_plan(&mut self, config: &ArrangementConfig) -> Result<()> {
        apply_plan(
            &mut self.store,
            &self.directory,
            &mut self.events,
            &mut self.rng,
            config,
        )
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
