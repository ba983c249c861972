//! In-memory snapshot of a session's current settings

use std::collections::HashMap;

use setlimit_types::prelude::*;
use setlimit_types::SettingsSnapshot;

use crate::cast::cast_to;
use crate::registry::SettingKind;

/// Setting holding the session's readonly level
pub const READONLY_SETTING: &str = "readonly";
/// Setting that enables DDL for the session
pub const ALLOW_DDL_SETTING: &str = "allow_ddl";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentSettings {
	values: HashMap<String, SettingValue>,
}

impl CurrentSettings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> Self {
		self.set(name, value);
		self
	}

	pub fn set(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
		self.values.insert(name.into(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&SettingValue> {
		self.values.get(name)
	}

	/// Store already validated changes
	pub fn apply(&mut self, changes: &[SettingChange]) {
		for change in changes {
			self.values.insert(change.name.clone(), change.value.clone());
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl FromIterator<(String, SettingValue)> for CurrentSettings {
	fn from_iter<I: IntoIterator<Item = (String, SettingValue)>>(iter: I) -> Self {
		Self { values: iter.into_iter().collect() }
	}
}

impl SettingsSnapshot for CurrentSettings {
	fn try_get(&self, name: &str) -> Option<SettingValue> {
		self.values.get(name).cloned()
	}

	/// Values are read with the conversion rules of the registry; a level that cannot
	/// be read restricts the session like level 1
	fn readonly(&self) -> ReadonlyLevel {
		match self.values.get(READONLY_SETTING).map(|value| cast_to(SettingKind::UInt, value)) {
			None => ReadonlyLevel::Disabled,
			Some(Ok(SettingValue::UInt(level))) => ReadonlyLevel::from_level(level),
			Some(_) => ReadonlyLevel::Strict,
		}
	}

	/// DDL is allowed unless the snapshot says otherwise; an unreadable value prohibits it
	fn allow_ddl(&self) -> bool {
		let Some(value) = self.values.get(ALLOW_DDL_SETTING) else {
			return true;
		};
		match (cast_to(SettingKind::Bool, value), cast_to(SettingKind::UInt, value)) {
			(Ok(SettingValue::Bool(allow)), _) => allow,
			(_, Ok(SettingValue::UInt(allow))) => allow != 0,
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_readonly_level_from_values() {
		assert_eq!(CurrentSettings::new().readonly(), ReadonlyLevel::Disabled);
		assert_eq!(CurrentSettings::new().with("readonly", 1_u64).readonly(), ReadonlyLevel::Strict);
		assert_eq!(CurrentSettings::new().with("readonly", 2_i64).readonly(), ReadonlyLevel::AllowSettings);
		assert_eq!(CurrentSettings::new().with("readonly", "1").readonly(), ReadonlyLevel::Strict);
		assert_eq!(CurrentSettings::new().with("readonly", 2.0).readonly(), ReadonlyLevel::AllowSettings);
		assert_eq!(CurrentSettings::new().with("readonly", true).readonly(), ReadonlyLevel::Strict);
		assert_eq!(CurrentSettings::new().with("readonly", "0").readonly(), ReadonlyLevel::Disabled);
	}

	#[test]
	fn test_unreadable_readonly_level_restricts() {
		assert_eq!(CurrentSettings::new().with("readonly", -1_i64).readonly(), ReadonlyLevel::Strict);
		assert_eq!(CurrentSettings::new().with("readonly", "high").readonly(), ReadonlyLevel::Strict);
	}

	#[test]
	fn test_allow_ddl_defaults_to_true() {
		assert!(CurrentSettings::new().allow_ddl());
		assert!(!CurrentSettings::new().with("allow_ddl", false).allow_ddl());
		assert!(!CurrentSettings::new().with("allow_ddl", 0_u64).allow_ddl());
		assert!(!CurrentSettings::new().with("allow_ddl", "false").allow_ddl());
		assert!(!CurrentSettings::new().with("allow_ddl", "0").allow_ddl());
		assert!(CurrentSettings::new().with("allow_ddl", "TRUE").allow_ddl());
		assert!(CurrentSettings::new().with("allow_ddl", 2_i64).allow_ddl());
		assert!(!CurrentSettings::new().with("allow_ddl", "maybe").allow_ddl());
	}

	#[test]
	fn test_apply() {
		let mut settings = CurrentSettings::new().with("max_threads", 8_u64);
		settings.apply(&[SettingChange::new("max_threads", 4_u64), SettingChange::new("priority", 1_i64)]);
		assert_eq!(settings.get("max_threads"), Some(&SettingValue::UInt(4)));
		assert_eq!(settings.try_get("priority"), Some(SettingValue::Int(1)));
		assert_eq!(settings.len(), 2);
	}
}

// vim: ts=4
