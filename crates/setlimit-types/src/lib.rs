//! Shared types, adapter traits, and error types for setlimit.
//!
//! This crate contains the foundational types shared between the constraint engine
//! and the adapter implementations of its collaborators (type system, allow-list,
//! settings snapshot).

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod setting_adapter;
pub mod types;
pub mod value;

pub use error::{Error, ErrorCode, SlResult, Violation, ViolationKind};
pub use setting_adapter::{SettingAllowList, SettingTypeSystem, SettingsSnapshot};
pub use types::{ReadonlyLevel, SettingChange};
pub use value::{Comparison, SettingValue};

// vim: ts=4
