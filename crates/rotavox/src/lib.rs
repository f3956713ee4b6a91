//! Rotavox - Survey Option Arrangement and Constraint Engine
//!
//! Arranges the answer options of a multi-question survey form (grouped
//! rotation, pinning, cross-question order synchronization over piping
//! relations) and enforces mutual-exclusion rules over live selections.
//!
//! # Example
//!
//! ```rust
//! use rotavox::prelude::*;
//!
//! let mut store = MemoryOptionStore::new();
//! store.mount_question(QuestionId(1), vec![
//!     RenderedOption::normal(1),
//!     RenderedOption::normal(2),
//!     RenderedOption::normal(3),
//!     RenderedOption::fixed(-1),
//! ]);
//! let directory = MemoryDirectory::new().with_question(QuestionMeta::standalone(1));
//!
//! let mut session = Session::with_random(store, directory, EngineRandom::with_seed(42));
//! session.enter(1);
//! session.rotate(&[code_range(1, 3)], &RotationConfig::default());
//! // The sentinel stays pinned to the end whatever the shuffle drew.
//! assert_eq!(session.store().codes(QuestionId(1)).unwrap().last(),
//!            Some(&OptionCode(-1)));
//! ```

// Core types
pub use rotavox_core::{
    code_range, MemoryDirectory, MemoryOptionStore, OptionCode, OptionKind, OptionStore,
    PipingMode, QuestionDirectory, QuestionId, QuestionMeta, RenderedOption, Result, RotavoxError,
};

// Engine operations and configuration
pub use rotavox_engine::{
    descendants, surviving_order, EngineRandom, ExclusivityGroups, ExclusivityWatcher, GroupRule,
    RotationConfig, SelectionEventSupport, SelectionWatcher, WatcherState,
};

// Declarative arrangement plans
pub use rotavox_config::{
    ArrangementConfig, ConfigError, ExclusivityPlan, PlacementPlan, QuestionPlan, RotationPlan,
    SyncPlan,
};

mod session;
pub use session::Session;

pub mod prelude {
    pub use super::{
        code_range, ArrangementConfig, EngineRandom, ExclusivityGroups, MemoryDirectory,
        MemoryOptionStore, OptionCode, OptionStore, PipingMode, QuestionId, QuestionMeta,
        RenderedOption, RotationConfig, Session,
    };
}
