//! Declarative arrangement plans for rotavox.
//!
//! Load per-question arrangement plans from TOML or YAML files so survey
//! authors can describe rotation, pinning, synchronization, and
//! exclusivity without code changes.
//!
//! # Examples
//!
//! Load a plan from a TOML string:
//!
//! ```
//! use rotavox_config::ArrangementConfig;
//!
//! let config = ArrangementConfig::from_toml_str(r#"
//!     [[questions]]
//!     id = 10
//!
//!     [questions.rotation]
//!     groups = [[1, 2, 3], [4, 5, 6]]
//!     top = [7]
//!     top_shuffle = false
//!
//!     [[questions.exclusivity]]
//!     name = "none"
//!     exclusive = [7, -1]
//! "#).unwrap();
//!
//! assert_eq!(config.questions.len(), 1);
//! config.validate().unwrap();
//! ```
//!
//! Use an empty plan when the file is missing:
//!
//! ```
//! use rotavox_config::ArrangementConfig;
//!
//! let config = ArrangementConfig::load("arrangement.toml").unwrap_or_default();
//! // Proceeds with no arrangement directives if the file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use rotavox_core::{OptionCode, QuestionId};

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// A whole form's arrangement plan, one entry per configured question.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArrangementConfig {
    /// Per-question plans, applied in listed order.
    #[serde(default)]
    pub questions: Vec<QuestionPlan>,
}

impl ArrangementConfig {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a plan from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads a plan from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a plan from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a plan from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses a plan from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Adds a question plan.
    pub fn with_question(mut self, plan: QuestionPlan) -> Self {
        self.questions.push(plan);
        self
    }

    /// The plan for `question`, if configured.
    pub fn question(&self, question: QuestionId) -> Option<&QuestionPlan> {
        self.questions.iter().find(|p| p.id == question)
    }

    /// Checks cross-field rules the serde layer cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] on duplicate question ids,
    /// duplicate group names within a question, or a group that declares
    /// neither/both of `exclusive` and `paired`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = Vec::with_capacity(self.questions.len());
        for plan in &self.questions {
            if seen.contains(&plan.id) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate plan for question {}",
                    plan.id
                )));
            }
            seen.push(plan.id);
            plan.validate()?;
        }
        Ok(())
    }
}

/// Arrangement directives for one question.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionPlan {
    /// The question this plan applies to.
    pub id: QuestionId,

    /// Grouped rotation, run first.
    #[serde(default)]
    pub rotation: Option<RotationPlan>,

    /// Relative placements, run after rotation in listed order.
    #[serde(default)]
    pub placements: Vec<PlacementPlan>,

    /// Order synchronization with piped questions.
    #[serde(default)]
    pub sync: Option<SyncPlan>,

    /// Codes hidden at mount.
    #[serde(default)]
    pub hidden: Vec<OptionCode>,

    /// Codes disabled at mount.
    #[serde(default)]
    pub disabled: Vec<OptionCode>,

    /// Exclusivity groups watched for the question's mounted lifetime.
    #[serde(default)]
    pub exclusivity: Vec<ExclusivityPlan>,
}

impl QuestionPlan {
    /// Creates an empty plan for `question`.
    pub fn new(question: impl Into<QuestionId>) -> Self {
        Self {
            id: question.into(),
            rotation: None,
            placements: Vec::new(),
            sync: None,
            hidden: Vec::new(),
            disabled: Vec::new(),
            exclusivity: Vec::new(),
        }
    }

    /// Sets the rotation directive.
    pub fn with_rotation(mut self, rotation: RotationPlan) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Adds a placement directive.
    pub fn with_placement(mut self, placement: PlacementPlan) -> Self {
        self.placements.push(placement);
        self
    }

    /// Sets the synchronization directive.
    pub fn with_sync(mut self, sync: SyncPlan) -> Self {
        self.sync = Some(sync);
        self
    }

    /// Adds an exclusivity group.
    pub fn with_exclusivity(mut self, group: ExclusivityPlan) -> Self {
        self.exclusivity.push(group);
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut names = Vec::with_capacity(self.exclusivity.len());
        for group in &self.exclusivity {
            if names.contains(&&group.name) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate exclusivity group `{}` on question {}",
                    group.name, self.id
                )));
            }
            names.push(&group.name);
            group.validate(self.id)?;
        }
        Ok(())
    }
}

/// Grouped rotation directive, mirroring the engine's rotation config.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RotationPlan {
    /// Rotation groups; options absent from every group rotate as
    /// singletons.
    #[serde(default)]
    pub groups: Vec<Vec<OptionCode>>,

    /// Shuffle the bucket sequence itself.
    #[serde(default = "default_true")]
    pub group: bool,

    /// Shuffle each group's internal order.
    #[serde(default = "default_true")]
    pub option: bool,

    /// Codes pinned to the very front.
    #[serde(default)]
    pub top: Option<Vec<OptionCode>>,

    /// Shuffle the pinned top codes among themselves.
    #[serde(default = "default_true")]
    pub top_shuffle: bool,

    /// Codes pinned to the end of the interior order.
    #[serde(default)]
    pub bot: Option<Vec<OptionCode>>,

    /// Shuffle the pinned bottom codes among themselves.
    #[serde(default = "default_true")]
    pub bot_shuffle: bool,
}

impl Default for RotationPlan {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            group: true,
            option: true,
            top: None,
            top_shuffle: true,
            bot: None,
            bot_shuffle: true,
        }
    }
}

/// A relative placement directive.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PlacementPlan {
    /// Place `codes` immediately after `base`.
    After {
        /// The anchor code.
        base: OptionCode,
        /// Codes to move, kept in this order.
        codes: Vec<OptionCode>,
    },
    /// Place `codes` immediately before `base`.
    Before {
        /// The anchor code.
        base: OptionCode,
        /// Codes to move, kept in this order.
        codes: Vec<OptionCode>,
    },
    /// Place `codes` at the front of the question.
    Top {
        /// Codes to move, kept in this order.
        codes: Vec<OptionCode>,
    },
}

/// An order-synchronization directive.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum SyncPlan {
    /// Propagate this question's order to all of its piped descendants.
    Descendants {
        /// Descendants left to their own rotation.
        #[serde(default)]
        exclude: Vec<QuestionId>,
    },
    /// Copy `base`'s order onto this question, strictly 1:1.
    OneToOne {
        /// The question whose order is copied.
        base: QuestionId,
    },
}

/// One named exclusivity group.
///
/// Exactly one of `exclusive` and `paired` must be set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExclusivityPlan {
    /// Group name, unique within its question.
    pub name: String,

    /// Members of an exclusive group.
    #[serde(default)]
    pub exclusive: Option<Vec<OptionCode>>,

    /// The two role-sets of a paired group.
    #[serde(default)]
    pub paired: Option<[Vec<OptionCode>; 2]>,
}

impl ExclusivityPlan {
    /// Declares an exclusive group.
    pub fn exclusive(name: impl Into<String>, codes: Vec<OptionCode>) -> Self {
        Self {
            name: name.into(),
            exclusive: Some(codes),
            paired: None,
        }
    }

    /// Declares a paired group.
    pub fn paired(name: impl Into<String>, role0: Vec<OptionCode>, role1: Vec<OptionCode>) -> Self {
        Self {
            name: name.into(),
            exclusive: None,
            paired: Some([role0, role1]),
        }
    }

    fn validate(&self, question: QuestionId) -> Result<(), ConfigError> {
        match (&self.exclusive, &self.paired) {
            (Some(_), None) | (None, Some(_)) => Ok(()),
            _ => Err(ConfigError::Invalid(format!(
                "group `{}` on question {question} must set exactly one of `exclusive` and `paired`",
                self.name
            ))),
        }
    }
}

fn default_true() -> bool {
    true
}
