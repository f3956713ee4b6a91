//! Shared test fixtures for rotavox crates.
//!
//! This crate provides canned surveys built on the in-memory store. It
//! depends only on `rotavox-core`, so every other crate can use it as a
//! dev-dependency without cycles.
//!
//! - [`survey`] - survey builders and the brand-tracker fixture
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rotavox-test = { workspace = true }
//! ```

pub mod survey;

pub use survey::{brand_tracker, question, SurveyFixture};
