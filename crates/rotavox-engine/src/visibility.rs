//! Show/hide and direct disable toggles.
//!
//! Flag-only operations: neither ever changes the rendered order. Direct
//! disables sit outside any exclusivity group and pair the input-level
//! read-only flag with its visual companion, the way the host styles a
//! dimmed option.

use rotavox_core::{OptionCode, OptionStore, QuestionId, Result};
use tracing::warn;

/// Hides (or shows) each of `codes` in `question`.
///
/// Missing codes are skipped with a warning.
pub fn set_hidden(
    store: &mut dyn OptionStore,
    question: QuestionId,
    codes: &[OptionCode],
    hidden: bool,
) -> Result<()> {
    store.options(question)?;
    for code in codes {
        if !store.contains(question, *code) {
            warn!(%question, %code, "option to hide not found");
            continue;
        }
        store.set_hidden(question, *code, hidden)?;
    }
    Ok(())
}

/// Disables (or re-enables) each of `codes` in `question`.
///
/// Sets both the input-level read-only flag and the visual-disabled flag.
/// Missing codes are skipped with a warning.
pub fn set_disabled(
    store: &mut dyn OptionStore,
    question: QuestionId,
    codes: &[OptionCode],
    disabled: bool,
) -> Result<()> {
    store.options(question)?;
    for code in codes {
        if !store.contains(question, *code) {
            warn!(%question, %code, "option to disable not found");
            continue;
        }
        store.set_read_only(question, *code, disabled)?;
        store.set_visual_disabled(question, *code, disabled)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rotavox_core::{MemoryOptionStore, RenderedOption};

    const Q: QuestionId = QuestionId(3);

    fn mounted() -> MemoryOptionStore {
        let mut store = MemoryOptionStore::new();
        store.mount_question(
            Q,
            vec![
                RenderedOption::normal(1),
                RenderedOption::normal(2),
                RenderedOption::normal(3),
            ],
        );
        store
    }

    #[test]
    fn hide_and_show() {
        let mut store = mounted();
        set_hidden(&mut store, Q, &[OptionCode(1), OptionCode(2)], true).unwrap();
        assert!(store.option(Q, OptionCode(1)).unwrap().hidden);
        assert!(store.option(Q, OptionCode(2)).unwrap().hidden);
        assert!(!store.option(Q, OptionCode(3)).unwrap().hidden);

        set_hidden(&mut store, Q, &[OptionCode(1)], false).unwrap();
        assert!(!store.option(Q, OptionCode(1)).unwrap().hidden);
    }

    #[test]
    fn disable_sets_both_flags() {
        let mut store = mounted();
        set_disabled(&mut store, Q, &[OptionCode(2)], true).unwrap();
        let option = store.option(Q, OptionCode(2)).unwrap();
        assert!(option.read_only);
        assert!(option.visually_disabled);

        set_disabled(&mut store, Q, &[OptionCode(2)], false).unwrap();
        let option = store.option(Q, OptionCode(2)).unwrap();
        assert!(!option.read_only);
        assert!(!option.visually_disabled);
    }

    #[test]
    fn flags_never_reorder() {
        let mut store = mounted();
        set_hidden(&mut store, Q, &[OptionCode(3)], true).unwrap();
        set_disabled(&mut store, Q, &[OptionCode(1)], true).unwrap();
        let codes: Vec<i32> = store.codes(Q).unwrap().iter().map(|c| c.value()).collect();
        assert_eq!(codes, vec![1, 2, 3]);
    }

    #[test]
    fn missing_code_is_skipped() {
        let mut store = mounted();
        set_hidden(&mut store, Q, &[OptionCode(9), OptionCode(1)], true).unwrap();
        assert!(store.option(Q, OptionCode(1)).unwrap().hidden);
    }
}
