//! Survey builders and canned fixtures.

use rotavox_core::{
    MemoryDirectory, MemoryOptionStore, OptionCode, PipingMode, QuestionId, QuestionMeta,
    RenderedOption,
};

/// A mounted survey: option store plus question directory.
#[derive(Debug, Default)]
pub struct SurveyFixture {
    /// The option state of every mounted question.
    pub store: MemoryOptionStore,
    /// Piping metadata in form order.
    pub directory: MemoryDirectory,
}

impl SurveyFixture {
    /// Creates an empty survey.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts a standalone question.
    pub fn with_question(mut self, id: u32, normal: &[i32], fixed: &[i32]) -> Self {
        self.store
            .mount_question(QuestionId(id), question(normal, fixed));
        self.directory.push(QuestionMeta::standalone(id));
        self
    }

    /// Mounts a question piped from `parent`.
    pub fn with_piped_question(
        mut self,
        id: u32,
        parent: u32,
        mode: PipingMode,
        normal: &[i32],
        fixed: &[i32],
    ) -> Self {
        self.store
            .mount_question(QuestionId(id), question(normal, fixed));
        self.directory.push(QuestionMeta::piped(id, parent, mode));
        self
    }

    /// The rendered order of `question` as raw code values.
    pub fn rendered(&self, question: u32) -> Vec<i32> {
        use rotavox_core::OptionStore;
        self.store
            .codes(QuestionId(question))
            .unwrap()
            .iter()
            .map(|c| c.value())
            .collect()
    }
}

/// Builds a question's options: `normal` codes first, `fixed` codes after.
pub fn question(normal: &[i32], fixed: &[i32]) -> Vec<RenderedOption> {
    let mut options: Vec<RenderedOption> =
        normal.iter().map(|c| RenderedOption::normal(*c)).collect();
    options.extend(fixed.iter().map(|c| RenderedOption::fixed(*c)));
    options
}

/// A small brand tracker: awareness question Q10 piped into consideration
/// (Q11) and preference (Q12), with an unrelated demographic question Q20.
///
/// - Q10: brands 1..=6, "other" 97, "none of the above" -1
/// - Q11: pipes from Q10 (include), brands 1..=6, sentinel -1
/// - Q12: pipes from Q11 (include), brands 1..=6
/// - Q20: standalone, codes 1..=4
pub fn brand_tracker() -> SurveyFixture {
    SurveyFixture::new()
        .with_question(10, &[1, 2, 3, 4, 5, 6], &[97, -1])
        .with_piped_question(11, 10, PipingMode::Include, &[1, 2, 3, 4, 5, 6], &[-1])
        .with_piped_question(12, 11, PipingMode::Include, &[1, 2, 3, 4, 5, 6], &[])
        .with_question(20, &[1, 2, 3, 4], &[])
}
