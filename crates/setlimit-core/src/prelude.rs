pub use setlimit_types::prelude::*;

pub use crate::config::{ConstraintsConfig, MergePolicy};
pub use crate::constraints::SettingsConstraints;

// vim: ts=4
