//! Question identity and piping metadata.

use std::fmt;

/// Identity of a question within the survey form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(value: u32) -> Self {
        QuestionId(value)
    }
}

/// How a question derives its option set from its piping parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PipingMode {
    /// The question's options are independent of any other question.
    #[default]
    None,
    /// Options are the parent's answered options.
    Include,
    /// Options are the parent's unanswered options.
    Exclude,
}

impl PipingMode {
    /// Returns `true` if this question derives options from a parent.
    pub fn is_piped(self) -> bool {
        !matches!(self, PipingMode::None)
    }
}

/// Static metadata about one question.
///
/// Created by the renderer when the form is produced; the engine only reads
/// it to recover the piping graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionMeta {
    /// The question's identity.
    pub id: QuestionId,
    /// The question whose surviving options this one derives from, if any.
    pub piping_parent: Option<QuestionId>,
    /// Whether the derivation includes or excludes the parent's answers.
    pub piping_mode: PipingMode,
}

impl QuestionMeta {
    /// Creates metadata for a question with no piping relation.
    pub fn standalone(id: impl Into<QuestionId>) -> Self {
        Self {
            id: id.into(),
            piping_parent: None,
            piping_mode: PipingMode::None,
        }
    }

    /// Creates metadata for a question piped from `parent`.
    pub fn piped(id: impl Into<QuestionId>, parent: impl Into<QuestionId>, mode: PipingMode) -> Self {
        Self {
            id: id.into(),
            piping_parent: Some(parent.into()),
            piping_mode: mode,
        }
    }
}

/// Read access to question metadata.
///
/// The renderer owns the set of mounted questions; the engine consumes this
/// trait to discover piping edges (child → parent) without knowing anything
/// about the host's representation.
pub trait QuestionDirectory {
    /// All mounted question ids, in form order.
    fn question_ids(&self) -> Vec<QuestionId>;

    /// The piping parent of `question`, if it has one.
    fn piping_parent(&self, question: QuestionId) -> Option<QuestionId>;

    /// The questions that pipe directly from `parent`, in form order.
    fn piped_children(&self, parent: QuestionId) -> Vec<QuestionId> {
        self.question_ids()
            .into_iter()
            .filter(|q| self.piping_parent(*q) == Some(parent))
            .collect()
    }
}
