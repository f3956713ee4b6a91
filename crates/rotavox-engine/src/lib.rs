//! Rotavox Arrangement Engine
//!
//! This crate provides the arrangement operations that run once per question
//! mount, plus the reactive exclusivity checker:
//! - Grouped rotation with top/bottom pins (`rotation`)
//! - Relative positioning primitives (`position`)
//! - Show/hide and direct disable toggles (`visibility`)
//! - Piping graph discovery and order synchronization (`piping`)
//! - Mutual-exclusion watcher over live selections (`exclusivity`)
//! - Selection-change event dispatch (`event`)
//! - Wiring for declarative arrangement plans (`builder`)

pub mod builder;
pub mod event;
pub mod exclusivity;
pub mod piping;
pub mod position;
pub mod random;
pub mod rotation;
pub mod visibility;

pub use builder::{apply_plan, apply_question_plan};
pub use event::{SelectionEventSupport, SelectionWatcher};
pub use exclusivity::{ExclusivityGroups, ExclusivityWatcher, GroupRule, WatcherState};
pub use piping::{descendants, surviving_order, sync_descendants, sync_one_to_one};
pub use position::{place_after, place_at_top, place_before};
pub use random::EngineRandom;
pub use rotation::{rotate, RotationConfig};
pub use visibility::{set_disabled, set_hidden};
