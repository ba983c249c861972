//! Common types used throughout setlimit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::SettingValue;

/// A proposed change of one setting
///
/// Clamping may rewrite `value` in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingChange {
	pub name: String,
	pub value: SettingValue,
}

impl SettingChange {
	pub fn new(name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
		Self { name: name.into(), value: value.into() }
	}
}

impl fmt::Display for SettingChange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} = {}", self.name, self.value)
	}
}

/// Readonly level of a session
///
/// - `Disabled` (0): no read-only restrictions
/// - `Strict` (1): only settings flagged as changeable in readonly mode may change
/// - `AllowSettings` (2): every setting may change except the readonly level itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadonlyLevel {
	#[default]
	Disabled,
	Strict,
	AllowSettings,
}

impl ReadonlyLevel {
	/// Levels above 2 behave like 2
	pub fn from_level(level: u64) -> Self {
		match level {
			0 => ReadonlyLevel::Disabled,
			1 => ReadonlyLevel::Strict,
			_ => ReadonlyLevel::AllowSettings,
		}
	}

	pub fn as_level(self) -> u8 {
		match self {
			ReadonlyLevel::Disabled => 0,
			ReadonlyLevel::Strict => 1,
			ReadonlyLevel::AllowSettings => 2,
		}
	}
}


// vim: ts=4
