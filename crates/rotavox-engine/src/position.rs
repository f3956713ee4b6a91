//! Relative positioning primitives.
//!
//! Single-code moves used standalone by question setup code or as the tail
//! end of a rotation: park codes next to a base code, or at the front of
//! the question.

use rotavox_core::{OptionCode, OptionStore, QuestionId, Result};
use tracing::warn;

/// Moves each of `codes` to sit immediately after `base`.
///
/// Processes `codes` in reverse: each single-item insert displaces the
/// previous one, so reverse iteration yields the caller's left-to-right
/// order next to the base. Missing moved codes are skipped with a warning;
/// a missing base code fails the whole call.
pub fn place_after(
    store: &mut dyn OptionStore,
    question: QuestionId,
    base: OptionCode,
    codes: &[OptionCode],
) -> Result<()> {
    store.option(question, base)?;
    for code in codes.iter().rev() {
        if !store.contains(question, *code) {
            warn!(%question, %code, "option to place not found");
            continue;
        }
        store.insert_after(question, *code, base)?;
    }
    Ok(())
}

/// Moves each of `codes` to sit immediately before `base`.
///
/// Processes `codes` in the given order; the final order before the base
/// matches the argument order. Missing moved codes are skipped with a
/// warning; a missing base code fails the whole call.
pub fn place_before(
    store: &mut dyn OptionStore,
    question: QuestionId,
    base: OptionCode,
    codes: &[OptionCode],
) -> Result<()> {
    store.option(question, base)?;
    for code in codes {
        if !store.contains(question, *code) {
            warn!(%question, %code, "option to place not found");
            continue;
        }
        store.insert_before(question, *code, base)?;
    }
    Ok(())
}

/// Moves every code in `codes` to the front of the question, in the order
/// supplied.
///
/// Implemented as reverse-order single inserts at the head; the net effect
/// is a stable prepend. Missing codes are skipped with a warning.
pub fn place_at_top(
    store: &mut dyn OptionStore,
    question: QuestionId,
    codes: &[OptionCode],
) -> Result<()> {
    store.options(question)?;
    for code in codes.iter().rev() {
        if !store.contains(question, *code) {
            warn!(%question, %code, "option to place not found");
            continue;
        }
        store.insert_at_front(question, *code)?;
    }
    Ok(())
}
