//! Piping graph discovery and order synchronization.
//!
//! A question "pipes" from a parent when its option set derives from the
//! parent's surviving options. This module recovers the derivation graph
//! from question metadata and propagates a base question's rendered order
//! to its descendants, or copies one question's order onto another 1:1.

use std::collections::HashSet;

use rotavox_core::{
    OptionCode, OptionStore, QuestionDirectory, QuestionId, Result, RotavoxError,
};
use tracing::{debug, error};

/// All questions reachable from `base` over piping edges, however deep.
///
/// Edges run child → parent in the metadata; traversal follows them
/// forward, parent to children, depth-first. A visited-set guard tolerates
/// cycles and diamonds in the declared relations, so the result never
/// contains `base` itself and every question appears at most once.
pub fn descendants(directory: &dyn QuestionDirectory, base: QuestionId) -> Vec<QuestionId> {
    let mut visited = HashSet::new();
    let mut found = Vec::new();
    collect(directory, base, &mut visited, &mut found);
    found
}

fn collect(
    directory: &dyn QuestionDirectory,
    current: QuestionId,
    visited: &mut HashSet<QuestionId>,
    found: &mut Vec<QuestionId>,
) {
    if !visited.insert(current) {
        return;
    }
    let children: Vec<QuestionId> = directory
        .piped_children(current)
        .into_iter()
        .filter(|c| !visited.contains(c))
        .collect();
    found.extend(children.iter().copied());
    for child in children {
        collect(directory, child, visited, found);
    }
}

/// The base question's surviving order: its non-fixed, non-sentinel codes
/// in their current rendered order.
pub fn surviving_order(store: &dyn OptionStore, question: QuestionId) -> Result<Vec<OptionCode>> {
    Ok(store
        .options(question)?
        .iter()
        .filter(|o| !o.is_fixed() && !o.code.is_sentinel())
        .map(|o| o.code)
        .collect())
}

/// Reorders every descendant of `base` to follow `base`'s surviving order.
///
/// Descendants listed in `excludes` are skipped entirely, keeping whatever
/// order they already have (e.g. an independent rotation). Codes a
/// descendant holds that are absent from the base's surviving order stay at
/// the end of its interior, in their prior relative order; fixed options
/// are re-appended last.
///
/// Fail-fast across the batch: a failing descendant aborts the remaining
/// ones, and descendants already processed keep their new order.
pub fn sync_descendants(
    store: &mut dyn OptionStore,
    directory: &dyn QuestionDirectory,
    base: QuestionId,
    excludes: &[QuestionId],
) -> Result<()> {
    let base_order = surviving_order(store, base)?;
    for target in descendants(directory, base) {
        if excludes.contains(&target) {
            debug!(%target, "left to its own rotation");
            continue;
        }
        if let Err(e) = follow_order(store, target, &base_order) {
            error!(%target, error = %e, "descendant sync failed; remaining descendants skipped");
            return Err(e);
        }
    }
    Ok(())
}

/// Reorders `target`'s interior to the shared relative order of `base_order`.
fn follow_order(
    store: &mut dyn OptionStore,
    target: QuestionId,
    base_order: &[OptionCode],
) -> Result<()> {
    let options = store.options(target)?;
    let interior: Vec<OptionCode> = options
        .iter()
        .filter(|o| !o.is_fixed() && !o.code.is_sentinel())
        .map(|o| o.code)
        .collect();
    let fixed: Vec<OptionCode> = options
        .iter()
        .filter(|o| o.is_fixed() || o.code.is_sentinel())
        .map(|o| o.code)
        .collect();

    let mut order: Vec<OptionCode> = base_order
        .iter()
        .copied()
        .filter(|c| interior.contains(c))
        .collect();
    order.extend(interior.iter().copied().filter(|c| !base_order.contains(c)));
    order.extend(fixed);
    store.reorder(target, &order)
}

/// Copies `base`'s rendered order onto `target`, strictly.
///
/// Every non-sentinel code present in `target` must also appear in `base`'s
/// current order; otherwise the call fails atomically with the offending
/// codes listed and `target` is left untouched. On success, shared codes
/// take the base's relative order and `target`'s own fixed/sentinel options
/// keep their tail positions.
pub fn sync_one_to_one(
    store: &mut dyn OptionStore,
    base: QuestionId,
    target: QuestionId,
) -> Result<()> {
    let base_codes = store.codes(base)?;
    let options = store.options(target)?;

    let mismatched: Vec<OptionCode> = options
        .iter()
        .map(|o| o.code)
        .filter(|c| !c.is_sentinel() && !base_codes.contains(c))
        .collect();
    if !mismatched.is_empty() {
        return Err(RotavoxError::MismatchedCodes {
            base,
            target,
            codes: mismatched,
        });
    }

    let interior: Vec<OptionCode> = options
        .iter()
        .filter(|o| !o.is_fixed())
        .map(|o| o.code)
        .collect();
    let fixed: Vec<OptionCode> = options
        .iter()
        .filter(|o| o.is_fixed())
        .map(|o| o.code)
        .collect();

    let mut order: Vec<OptionCode> = base_codes
        .iter()
        .copied()
        .filter(|c| interior.contains(c))
        .collect();
    order.extend(fixed);
    store.reorder(target, &order)
}

#[cfg(test)]
#[path = "piping_tests.rs"]
mod tests;
