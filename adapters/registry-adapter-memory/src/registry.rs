//! Setting definitions registry
//!
//! Definitions are registered during startup into a mutable `SettingsRegistry`, which is
//! then frozen into an immutable `FrozenSettingsRegistry`. The frozen registry is the
//! canonical type system and allow-list consumed by the constraint engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use setlimit_types::prelude::*;
use setlimit_types::{SettingAllowList, SettingTypeSystem};

use crate::cast::cast_to;
use crate::hints::{MAX_HINTS, near_matches};
use crate::snapshot::CurrentSettings;

/// Declared type of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKind {
	Bool,
	Int,
	UInt,
	Float,
	String,
	Json,
}

impl SettingKind {
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingKind::Bool => "bool",
			SettingKind::Int => "int",
			SettingKind::UInt => "uint",
			SettingKind::Float => "float",
			SettingKind::String => "string",
			SettingKind::Json => "json",
		}
	}
}

/// Setting definition - defines metadata for each setting
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDefinition {
	/// Setting name; a trailing ".*" makes it a wildcard for a whole family
	pub key: String,

	/// Human-readable description
	pub description: String,

	/// Declared type
	pub kind: SettingKind,

	/// Default value, already cast into `kind`
	pub default: Option<SettingValue>,

	/// Whether the allow-list lets sessions change this setting
	pub changeable: bool,
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(key: impl Into<String>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(key)
	}

	pub fn is_wildcard(&self) -> bool {
		self.key.ends_with(".*")
	}
}

/// Builder for SettingDefinition with fluent API
#[derive(Debug)]
pub struct SettingDefinitionBuilder {
	key: String,
	description: Option<String>,
	kind: SettingKind,
	default: Option<SettingValue>,
	changeable: bool,
}

impl SettingDefinitionBuilder {
	pub fn new(key: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			description: None,
			kind: SettingKind::String,
			default: None,
			changeable: true,
		}
	}

	/// Set the description (required)
	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the declared type (defaults to String)
	pub fn kind(mut self, kind: SettingKind) -> Self {
		self.kind = kind;
		self
	}

	/// Set the default value; it must be convertible into the declared type
	pub fn default(mut self, value: impl Into<SettingValue>) -> Self {
		self.default = Some(value.into());
		self
	}

	/// Refuse changes of this setting through the allow-list
	pub fn changeable(mut self, changeable: bool) -> Self {
		self.changeable = changeable;
		self
	}

	/// Build the SettingDefinition
	pub fn build(self) -> SlResult<SettingDefinition> {
		let description = self
			.description
			.ok_or_else(|| Error::ConfigError("Setting description is required".into()))?;

		if self.key.is_empty() {
			return Err(Error::ConfigError("Setting key must not be empty".into()));
		}

		let default = match self.default {
			Some(value) => Some(cast_to(self.kind, &value).map_err(|reason| {
				Error::ConfigError(format!("Invalid default for setting '{}': {}", self.key, reason))
			})?),
			None => None,
		};

		Ok(SettingDefinition {
			key: self.key,
			description,
			kind: self.kind,
			default,
			changeable: self.changeable,
		})
	}
}

/// Mutable registry used during initialization
#[derive(Debug, Default)]
pub struct SettingsRegistry {
	definitions: HashMap<String, SettingDefinition>,
	custom_prefixes: Vec<String>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a new setting definition
	pub fn register(&mut self, def: SettingDefinition) -> SlResult<()> {
		if self.definitions.contains_key(&def.key) {
			return Err(Error::ConfigError(format!("Setting '{}' is already registered", def.key)));
		}

		debug!("Registering setting: {}", def.key);
		self.definitions.insert(def.key.clone(), def);
		Ok(())
	}

	/// Allow arbitrary settings whose names start with `prefix`
	///
	/// Such custom settings are untyped: values are stored as given.
	pub fn allow_custom_prefix(&mut self, prefix: impl Into<String>) -> SlResult<()> {
		let prefix = prefix.into();
		if prefix.is_empty() {
			return Err(Error::ConfigError("Custom setting prefix must not be empty".into()));
		}
		if !self.custom_prefixes.contains(&prefix) {
			self.custom_prefixes.push(prefix);
		}
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenSettingsRegistry {
		info!("Freezing settings registry with {} definitions", self.definitions.len());
		FrozenSettingsRegistry { definitions: self.definitions, custom_prefixes: self.custom_prefixes }
	}

	/// Get number of registered settings
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Check if registry is empty
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// Immutable registry shared with the constraint engine
#[derive(Debug)]
pub struct FrozenSettingsRegistry {
	definitions: HashMap<String, SettingDefinition>,
	custom_prefixes: Vec<String>,
}

impl FrozenSettingsRegistry {
	/// Get a setting definition by key
	/// First tries exact match, then tries wildcard pattern "<first_element>.*"
	pub fn get(&self, key: &str) -> Option<&SettingDefinition> {
		if let Some(def) = self.definitions.get(key) {
			return Some(def);
		}

		if let Some(dot_pos) = key.find('.') {
			let wildcard_key = format!("{}.*", &key[..dot_pos]);
			if let Some(def) = self.definitions.get(&wildcard_key) {
				return Some(def);
			}
		}

		None
	}

	pub fn is_custom(&self, key: &str) -> bool {
		self.custom_prefixes.iter().any(|prefix| key.starts_with(prefix.as_str()))
	}

	/// List all registered settings
	pub fn list(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.definitions.values()
	}

	/// List settings with a specific prefix
	pub fn list_by_prefix<'a>(
		&'a self,
		prefix: &'a str,
	) -> impl Iterator<Item = &'a SettingDefinition> + 'a {
		self.definitions.values().filter(move |def| def.key.starts_with(prefix))
	}

	/// Snapshot holding the default value of every non-wildcard setting
	pub fn defaults(&self) -> CurrentSettings {
		self.list()
			.filter(|def| !def.is_wildcard())
			.filter_map(|def| def.default.clone().map(|value| (def.key.clone(), value)))
			.collect()
	}

	/// Get number of registered settings
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Check if registry is empty
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

impl SettingTypeSystem for FrozenSettingsRegistry {
	fn cast(&self, name: &str, value: &SettingValue) -> SlResult<SettingValue> {
		match self.get(name) {
			Some(def) => cast_to(def.kind, value).map_err(|reason| Error::cannot_cast(name, reason)),
			None if self.is_custom(name) => Ok(value.clone()),
			None => Err(Error::unknown_setting(name)),
		}
	}
}

impl SettingAllowList for FrozenSettingsRegistry {
	fn assert_allowed(&self, name: &str) -> SlResult<()> {
		match self.get(name) {
			Some(def) if def.changeable => Ok(()),
			Some(_) => Err(Error::NotAllowed(name.to_owned())),
			None if self.is_custom(name) => Ok(()),
			None => Err(Error::unknown_setting(name)),
		}
	}

	fn hints(&self, name: &str) -> Vec<String> {
		let candidates = self
			.definitions
			.values()
			.filter(|def| def.changeable && !def.is_wildcard())
			.map(|def| def.key.as_str());
		near_matches(name, candidates, MAX_HINTS)
	}
}


// vim: ts=4
