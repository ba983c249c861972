//! In-memory settings registry adapter for setlimit.
//!
//! Implements the collaborators the constraint engine consumes:
//!
//! - `FrozenSettingsRegistry`: canonical type system (`SettingTypeSystem`) and
//!   allow-list with typo hints (`SettingAllowList`)
//! - `CurrentSettings`: snapshot of a session's settings (`SettingsSnapshot`)

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod cast;
pub mod hints;
pub mod registry;
pub mod snapshot;

pub use registry::{
	FrozenSettingsRegistry, SettingDefinition, SettingDefinitionBuilder, SettingKind,
	SettingsRegistry,
};
pub use snapshot::CurrentSettings;

// vim: ts=4
