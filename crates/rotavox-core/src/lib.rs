//! Rotavox Core - Core types and traits for option arrangement
//!
//! This crate provides the fundamental abstractions for rotavox:
//! - Stable option codes and question identifiers
//! - The `OptionStore` trait through which all reordering happens
//! - Question metadata (piping relations) via `QuestionDirectory`
//! - An in-memory store used by hosts and tests

pub mod code;
pub mod error;
pub mod memory;
pub mod option;
pub mod question;
pub mod store;

pub use code::{code_range, OptionCode};
pub use error::{Result, RotavoxError};
pub use memory::{MemoryDirectory, MemoryOptionStore};
pub use option::{OptionKind, RenderedOption};
pub use question::{PipingMode, QuestionDirectory, QuestionId, QuestionMeta};
pub use store::OptionStore;
