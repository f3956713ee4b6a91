//! Mutual-exclusion rules over live selections.
//!
//! A question declares named exclusivity groups once at mount; a watcher
//! then re-evaluates on every selection-change event. Conflicting
//! selections reset the whole conflicting group; otherwise incompatible
//! options are advisorily disabled (read-only + visual flag, never
//! removed).

use std::collections::{BTreeMap, BTreeSet};

use rotavox_core::{OptionCode, OptionStore, QuestionId, Result};
use smallvec::SmallVec;
use tracing::warn;

/// One named rule over option codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRule {
    /// At most one of these codes may be selected at a time.
    Exclusive(Vec<OptionCode>),
    /// Two role-sets; selecting from one role disables the other role.
    ///
    /// Each side is independently exclusive against the opposite side only:
    /// two selections within the same role conflict, selections across
    /// roles never do.
    Paired([Vec<OptionCode>; 2]),
}

/// The exclusivity groups a caller declares for one question.
///
/// # Example
///
/// ```
/// use rotavox_engine::ExclusivityGroups;
///
/// let groups = ExclusivityGroups::new()
///     .exclusive("none", [7, -1])
///     .paired("brand_or_price", [1, 2], [3, 4]);
/// assert_eq!(groups.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusivityGroups {
    entries: Vec<(String, GroupRule)>,
}

impl ExclusivityGroups {
    /// Creates an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an exclusive group: at most one member selectable at once.
    pub fn exclusive(
        mut self,
        name: impl Into<String>,
        codes: impl IntoIterator<Item = impl Into<OptionCode>>,
    ) -> Self {
        self.entries.push((
            name.into(),
            GroupRule::Exclusive(codes.into_iter().map(Into::into).collect()),
        ));
        self
    }

    /// Declares a paired group with two role-sets.
    pub fn paired(
        mut self,
        name: impl Into<String>,
        role0: impl IntoIterator<Item = impl Into<OptionCode>>,
        role1: impl IntoIterator<Item = impl Into<OptionCode>>,
    ) -> Self {
        self.entries.push((
            name.into(),
            GroupRule::Paired([
                role0.into_iter().map(Into::into).collect(),
                role1.into_iter().map(Into::into).collect(),
            ]),
        ));
        self
    }

    /// Adds an already-built rule under `name`.
    pub fn with_rule(mut self, name: impl Into<String>, rule: GroupRule) -> Self {
        self.entries.push((name.into(), rule));
        self
    }

    /// Number of declared groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The declared `(name, rule)` entries, in declaration order.
    pub fn entries(&self) -> &[(String, GroupRule)] {
        &self.entries
    }
}

/// A code's membership in one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Membership {
    /// Index into the declared rules.
    group: usize,
    /// Role within a paired group; always 0 for exclusive groups.
    role: usize,
}

/// Where the watcher is in its evaluation cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatcherState {
    /// Waiting for the next selection change.
    #[default]
    Idle,
    /// A pass is running on the current turn.
    Evaluating,
    /// The last pass found conflicting selections and reset them; the next
    /// change event re-evaluates from a clean slate.
    Conflict,
}

/// Reactive checker attached to one mounted question.
///
/// State lives only for the mounted lifetime of its question and is
/// discarded on navigation.
#[derive(Debug)]
pub struct ExclusivityWatcher {
    question: QuestionId,
    rules: Vec<(String, GroupRule)>,
    index: BTreeMap<OptionCode, SmallVec<[Membership; 2]>>,
    state: WatcherState,
}

impl ExclusivityWatcher {
    /// Builds the membership index for `question` from `groups`.
    ///
    /// The index is derived once and never mutated afterwards.
    pub fn new(question: QuestionId, groups: ExclusivityGroups) -> Self {
        let mut index: BTreeMap<OptionCode, SmallVec<[Membership; 2]>> = BTreeMap::new();
        for (group, (_, rule)) in groups.entries.iter().enumerate() {
            match rule {
                GroupRule::Exclusive(codes) => {
                    for code in codes {
                        index.entry(*code).or_default().push(Membership { group, role: 0 });
                    }
                }
                GroupRule::Paired(roles) => {
                    for (role, codes) in roles.iter().enumerate() {
                        for code in codes {
                            index.entry(*code).or_default().push(Membership { group, role });
                        }
                    }
                }
            }
        }
        Self {
            question,
            rules: groups.entries,
            index,
            state: WatcherState::Idle,
        }
    }

    /// Builds a watcher and runs the initial evaluation pass, the way a
    /// question's setup code attaches it.
    pub fn attach(
        store: &mut dyn OptionStore,
        question: QuestionId,
        groups: ExclusivityGroups,
    ) -> Result<Self> {
        let mut watcher = Self::new(question, groups);
        watcher.evaluate(store)?;
        Ok(watcher)
    }

    /// The question this watcher is scoped to.
    pub fn question(&self) -> QuestionId {
        self.question
    }

    /// Where the watcher ended its last pass.
    pub fn state(&self) -> WatcherState {
        self.state
    }

    /// One synchronous evaluation pass.
    ///
    /// Detects conflicts among the currently selected codes; either resets
    /// every conflicting group and stops, or recomputes the advisory
    /// disable flags for every indexed code.
    pub fn evaluate(&mut self, store: &mut dyn OptionStore) -> Result<()> {
        self.state = WatcherState::Evaluating;

        let checked: Vec<OptionCode> = self
            .index
            .keys()
            .copied()
            .filter(|code| store.is_selected(self.question, *code).unwrap_or(false))
            .collect();

        let conflicts = self.conflicting_groups(&checked);
        if !conflicts.is_empty() {
            self.reset_groups(store, &conflicts)?;
            self.state = WatcherState::Conflict;
            return Ok(());
        }

        for (&code, memberships) in &self.index {
            if !store.contains(self.question, code) {
                continue;
            }
            let disable = self.should_disable(code, memberships, &checked);
            store.set_read_only(self.question, code, disable)?;
            store.set_visual_disabled(self.question, code, disable)?;
        }
        self.state = WatcherState::Idle;
        Ok(())
    }

    /// The groups in which two checked codes collide.
    fn conflicting_groups(&self, checked: &[OptionCode]) -> BTreeSet<usize> {
        let mut conflicts = BTreeSet::new();
        for &code in checked {
            let Some(memberships) = self.index.get(&code) else {
                continue;
            };
            for m in memberships {
                let clash = checked.iter().any(|&other| {
                    other != code
                        && self.index.get(&other).is_some_and(|others| {
                            others.iter().any(|x| match self.rules[m.group].1 {
                                GroupRule::Exclusive(_) => x.group == m.group,
                                GroupRule::Paired(_) => x.group == m.group && x.role == m.role,
                            })
                        })
                });
                if clash {
                    conflicts.insert(m.group);
                }
            }
        }
        conflicts
    }

    /// Force-unchecks every code of every conflicting group and clears its
    /// advisory flags, leaving the next pass a clean slate.
    fn reset_groups(
        &self,
        store: &mut dyn OptionStore,
        conflicts: &BTreeSet<usize>,
    ) -> Result<()> {
        let names: Vec<&str> = conflicts
            .iter()
            .map(|g| self.rules[*g].0.as_str())
            .collect();
        warn!(question = %self.question, groups = ?names, "conflicting selections reset");

        for (&code, memberships) in &self.index {
            if !memberships.iter().any(|m| conflicts.contains(&m.group)) {
                continue;
            }
            if !store.contains(self.question, code) {
                continue;
            }
            store.set_selected(self.question, code, false)?;
            store.set_read_only(self.question, code, false)?;
            store.set_visual_disabled(self.question, code, false)?;
        }
        Ok(())
    }

    /// Whether `code` is incompatible with some other currently checked code.
    fn should_disable(
        &self,
        code: OptionCode,
        memberships: &[Membership],
        checked: &[OptionCode],
    ) -> bool {
        memberships.iter().any(|m| {
            checked.iter().any(|&other| {
                self.index.get(&other).is_some_and(|others| {
                    others.iter().any(|x| match self.rules[m.group].1 {
                        GroupRule::Exclusive(_) => {
                            other != code && x.group == m.group
                        }
                        GroupRule::Paired(_) => x.group == m.group && x.role != m.role,
                    })
                })
            })
        })
    }
}

#[cfg(test)]
#[path = "exclusivity_tests.rs"]
mod tests;
