//! Adapter traits for the collaborators of the constraint engine
//!
//! The engine never decides which settings exist or what type they have. It consumes
//! these traits instead:
//!
//! - **`SettingTypeSystem`**: casts values into a setting's canonical type
//! - **`SettingAllowList`**: decides which setting names may be changed at all
//! - **`SettingsSnapshot`**: the current settings of the session being validated

use crate::error::SlResult;
use crate::types::ReadonlyLevel;
use crate::value::SettingValue;

/// Canonical type system of settings
pub trait SettingTypeSystem: Send + Sync {
	/// Cast `value` into the declared type of `name`
	///
	/// Fails with `Error::CannotCast` on a type mismatch.
	fn cast(&self, name: &str, value: &SettingValue) -> SlResult<SettingValue>;
}

/// Allow-list of changeable setting names
pub trait SettingAllowList: Send + Sync {
	/// Fails with `Error::UnknownSetting` if the name is not known at all, or with
	/// another error if it is known but refused.
	fn assert_allowed(&self, name: &str) -> SlResult<()>;

	fn is_allowed(&self, name: &str) -> bool {
		self.assert_allowed(name).is_ok()
	}

	/// Near-match suggestions for an unknown name, best match first
	fn hints(&self, _name: &str) -> Vec<String> {
		Vec::new()
	}
}

/// Current settings of a session
pub trait SettingsSnapshot {
	fn try_get(&self, name: &str) -> Option<SettingValue>;

	fn readonly(&self) -> ReadonlyLevel;

	fn allow_ddl(&self) -> bool;
}

// vim: ts=4
