//! Engine configuration
//!
//! Loaded from any serde source. All fields are optional:
//!
//! ```yaml
//! mergePolicy: replace
//! profileSetting: profile
//! readonlySetting: readonly
//! allowDdlSetting: allow_ddl
//! ```

use serde::{Deserialize, Serialize};

/// How `merge` combines two constraint tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MergePolicy {
	/// Entries of the merged table overwrite existing entries as a whole
	Replace,
	/// Bounds that are set overwrite field by field; `is_const` can only be turned on
	#[default]
	Refine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConstraintsConfig {
	/// Policy used by `SettingsConstraints::merge`
	pub merge_policy: MergePolicy,
	/// Setting that switches profiles; never checked
	pub profile_setting: String,
	/// Setting that holds the readonly level
	pub readonly_setting: String,
	/// Setting that enables DDL
	pub allow_ddl_setting: String,
}

impl Default for ConstraintsConfig {
	fn default() -> Self {
		Self {
			merge_policy: MergePolicy::default(),
			profile_setting: "profile".into(),
			readonly_setting: "readonly".into(),
			allow_ddl_setting: "allow_ddl".into(),
		}
	}
}

impl ConstraintsConfig {
	pub fn with_merge_policy(mut self, policy: MergePolicy) -> Self {
		self.merge_policy = policy;
		self
	}
}


// vim: ts=4
