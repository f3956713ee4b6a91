//! Grouped rotation of a question's options.
//!
//! A rotation partitions the non-fixed options into caller-defined groups
//! plus one singleton bucket per ungrouped option, shuffles within and
//! between buckets, applies top/bottom pins, and re-appends fixed options
//! last.

use rotavox_core::{OptionCode, OptionStore, QuestionId, Result};
use tracing::warn;

use crate::random::EngineRandom;

/// Configuration for one [`rotate`] invocation.
///
/// Every shuffle flag defaults to `true`; a fully pinned presentation needs
/// all of them switched off explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationConfig {
    /// Shuffle the bucket sequence itself (group-level rotation).
    pub group: bool,
    /// Shuffle each group's internal order.
    pub option: bool,
    /// Codes pinned to the very front, ahead of all buckets.
    pub top: Option<Vec<OptionCode>>,
    /// Shuffle the pinned top codes among themselves.
    pub top_shuffle: bool,
    /// Codes pinned to the end of the interior order, before fixed options.
    pub bot: Option<Vec<OptionCode>>,
    /// Shuffle the pinned bottom codes among themselves.
    pub bot_shuffle: bool,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            group: true,
            option: true,
            top: None,
            top_shuffle: true,
            bot: None,
            bot_shuffle: true,
        }
    }
}

impl RotationConfig {
    /// Creates the default configuration (everything shuffled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with every shuffle switched off.
    pub fn pinned() -> Self {
        Self {
            group: false,
            option: false,
            top_shuffle: false,
            bot_shuffle: false,
            ..Self::default()
        }
    }

    /// Sets whether the bucket sequence is shuffled.
    pub fn with_group_shuffle(mut self, group: bool) -> Self {
        self.group = group;
        self
    }

    /// Sets whether group contents are shuffled.
    pub fn with_option_shuffle(mut self, option: bool) -> Self {
        self.option = option;
        self
    }

    /// Pins `codes` to the front of the question.
    pub fn with_top(mut self, codes: impl IntoIterator<Item = impl Into<OptionCode>>) -> Self {
        self.top = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether the pinned top codes are shuffled among themselves.
    pub fn with_top_shuffle(mut self, shuffle: bool) -> Self {
        self.top_shuffle = shuffle;
        self
    }

    /// Pins `codes` to the end of the interior order.
    pub fn with_bot(mut self, codes: impl IntoIterator<Item = impl Into<OptionCode>>) -> Self {
        self.bot = Some(codes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets whether the pinned bottom codes are shuffled among themselves.
    pub fn with_bot_shuffle(mut self, shuffle: bool) -> Self {
        self.bot_shuffle = shuffle;
        self
    }
}

/// Rotates `question`'s options group-wise and applies the new order.
///
/// Non-fixed options are partitioned into one bucket per entry of `groups`
/// (in ascending code order, shuffled internally when `config.option`) plus
/// one singleton bucket per ungrouped code. The bucket sequence is shuffled
/// when `config.group`. Pinned `top` codes end up ahead of everything,
/// pinned `bot` codes at the end of the interior order; fixed options are
/// re-appended last, in their original relative order, regardless of any
/// other configuration.
///
/// An empty `groups` slice leaves the question untouched. Pinned codes not
/// present among the question's non-fixed options are skipped with a
/// warning.
pub fn rotate(
    store: &mut dyn OptionStore,
    rng: &mut EngineRandom,
    question: QuestionId,
    groups: &[Vec<OptionCode>],
    config: &RotationConfig,
) -> Result<()> {
    if groups.is_empty() {
        return Ok(());
    }

    let options = store.options(question)?;
    let fixed: Vec<OptionCode> = options
        .iter()
        .filter(|o| o.is_fixed())
        .map(|o| o.code)
        .collect();
    let mut pool: Vec<OptionCode> = options
        .iter()
        .filter(|o| !o.is_fixed())
        .map(|o| o.code)
        .collect();
    pool.sort_unstable();

    let mut buckets: Vec<Vec<OptionCode>> = Vec::with_capacity(groups.len() + pool.len());
    for group in groups {
        let mut bucket: Vec<OptionCode> =
            pool.iter().copied().filter(|c| group.contains(c)).collect();
        if config.option {
            rng.shuffle(&mut bucket);
        }
        pool.retain(|c| !group.contains(c));
        buckets.push(bucket);
    }
    // Ungrouped leftovers rotate as singletons, in ascending code order.
    for code in pool {
        buckets.push(vec![code]);
    }

    if config.group {
        rng.shuffle(&mut buckets);
    }

    let mut interior: Vec<OptionCode> = buckets.into_iter().flatten().collect();
    let head = extract_pinned(&mut interior, config.top.as_deref(), config.top_shuffle, rng, question, "top");
    let tail = extract_pinned(&mut interior, config.bot.as_deref(), config.bot_shuffle, rng, question, "bot");

    let mut order = head;
    order.extend(interior);
    order.extend(tail);
    order.extend(fixed);
    store.reorder(question, &order)
}

/// Pulls the pinned `codes` out of `interior`, in final pin order.
fn extract_pinned(
    interior: &mut Vec<OptionCode>,
    codes: Option<&[OptionCode]>,
    shuffle: bool,
    rng: &mut EngineRandom,
    question: QuestionId,
    edge: &str,
) -> Vec<OptionCode> {
    let Some(codes) = codes else {
        return Vec::new();
    };
    let mut pinned = codes.to_vec();
    if shuffle {
        rng.shuffle(&mut pinned);
    }
    let mut extracted = Vec::with_capacity(pinned.len());
    for code in pinned {
        if let Some(at) = interior.iter().position(|c| *c == code) {
            interior.remove(at);
            extracted.push(code);
        } else {
            warn!(%question, %code, edge, "pinned option not found");
        }
    }
    extracted
}

#[cfg(test)]
#[path = "rotation_tests.rs"]
mod tests;
