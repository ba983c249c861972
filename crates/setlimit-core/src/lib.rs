//! Settings constraint engine.
//!
//! Decides whether a proposed change of a named setting is permitted under the
//! administrator-defined constraints of a profile, and optionally moves out-of-range
//! values onto the nearest bound instead of rejecting them.
//!
//! # Architecture
//!
//! - **Range** (`range.rs`): bounds and flags of one setting, and the check applied to a
//!   proposed value under a `Reaction`
//! - **Resolver** (`resolver.rs`): effective range of a setting for a session's readonly
//!   level and DDL permission
//! - **Constraints** (`constraints.rs`): the constraint table, its setters and merge
//!   policies, and the change validator
//! - **Config** (`config.rs`): merge policy and the names of the special settings
//!
//! The engine holds no locks. Build and merge tables first, then validate through
//! shared references.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod constraints;
pub mod prelude;
pub mod range;
pub mod resolver;

pub use config::{ConstraintsConfig, MergePolicy};
pub use constraints::{SettingBounds, SettingsConstraints};
pub use range::{Forbidden, Outcome, Range, Reaction};
pub use resolver::RuntimeMode;

// vim: ts=4
