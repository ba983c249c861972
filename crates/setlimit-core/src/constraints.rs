//! Settings constraints
//!
//! A `SettingsConstraints` owns the constraint table of one profile (or of a stack of
//! merged profiles) together with the collaborators it needs to interpret it. Build it
//! with the setters and `merge`, then share it read-only for validation.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use setlimit_types::{Comparison, SettingAllowList, SettingTypeSystem, SettingsSnapshot};

use crate::config::{ConstraintsConfig, MergePolicy};
use crate::prelude::*;
use crate::range::{Outcome, Range, Reaction};
use crate::resolver::{RuntimeMode, resolve_range};

/// Effective bounds of a setting, as reported by `SettingsConstraints::get`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingBounds {
	pub min_value: Option<SettingValue>,
	pub max_value: Option<SettingValue>,
	pub is_const: bool,
}

#[derive(Clone)]
pub struct SettingsConstraints {
	constraints: HashMap<String, Range>,
	config: ConstraintsConfig,
	types: Arc<dyn SettingTypeSystem>,
	allow_list: Arc<dyn SettingAllowList>,
}

impl fmt::Debug for SettingsConstraints {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SettingsConstraints")
			.field("constraints", &self.constraints)
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

/// Two constraint sets are equal if their tables are; collaborators are not compared
impl PartialEq for SettingsConstraints {
	fn eq(&self, other: &Self) -> bool {
		self.constraints == other.constraints
	}
}

impl SettingsConstraints {
	pub fn new(types: Arc<dyn SettingTypeSystem>, allow_list: Arc<dyn SettingAllowList>) -> Self {
		Self { constraints: HashMap::new(), config: ConstraintsConfig::default(), types, allow_list }
	}

	pub fn with_config(mut self, config: ConstraintsConfig) -> Self {
		self.config = config;
		self
	}

	pub fn config(&self) -> &ConstraintsConfig {
		&self.config
	}

	pub fn clear(&mut self) {
		self.constraints.clear();
	}

	pub fn len(&self) -> usize {
		self.constraints.len()
	}

	pub fn is_empty(&self) -> bool {
		self.constraints.is_empty()
	}

	/// Stored entry of `name`, ignoring the runtime mode
	pub fn entry(&self, name: &str) -> Option<&Range> {
		self.constraints.get(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Range)> {
		self.constraints.iter().map(|(name, range)| (name.as_str(), range))
	}

	/// Set the lower bound of `name`, cast into the setting's type
	pub fn set_min_value(&mut self, name: &str, value: &SettingValue) -> SlResult<()> {
		let value = self.types.cast(name, value)?;
		self.constraints.entry(name.to_owned()).or_default().min_value = Some(value);
		self.warn_if_inconsistent(name);
		Ok(())
	}

	/// Set the upper bound of `name`, cast into the setting's type
	pub fn set_max_value(&mut self, name: &str, value: &SettingValue) -> SlResult<()> {
		let value = self.types.cast(name, value)?;
		self.constraints.entry(name.to_owned()).or_default().max_value = Some(value);
		self.warn_if_inconsistent(name);
		Ok(())
	}

	pub fn set_is_const(&mut self, name: &str, is_const: bool) {
		self.constraints.entry(name.to_owned()).or_default().is_const = is_const;
	}

	pub fn set_changeable_in_readonly(&mut self, name: &str, changeable_in_readonly: bool) {
		self.constraints.entry(name.to_owned()).or_default().changeable_in_readonly =
			changeable_in_readonly;
	}

	fn warn_if_inconsistent(&self, name: &str) {
		if let Some(Range { min_value: Some(min), max_value: Some(max), .. }) =
			self.constraints.get(name)
			&& max.accurate_less(min) != Comparison::GreaterOrEqual
		{
			warn!(
				"Constraint for '{}' has maximum {} below minimum {}; every change will be rejected",
				name, max, min
			);
		}
	}

	/// Effective range of `name` for the session described by `snapshot`
	pub fn get_range<S: SettingsSnapshot + ?Sized>(&self, snapshot: &S, name: &str) -> Range {
		resolve_range(&self.config, &self.constraints, RuntimeMode::of(snapshot), name).into_owned()
	}

	/// Effective bounds and const flag of `name`
	pub fn get<S: SettingsSnapshot + ?Sized>(&self, snapshot: &S, name: &str) -> SettingBounds {
		let range = resolve_range(&self.config, &self.constraints, RuntimeMode::of(snapshot), name);
		SettingBounds {
			min_value: range.min_value.clone(),
			max_value: range.max_value.clone(),
			is_const: range.is_const,
		}
	}

	/// Merge `other` using the configured merge policy
	pub fn merge(&mut self, other: &SettingsConstraints) {
		self.merge_with(other, self.config.merge_policy);
	}

	/// Merge `other` into this table
	///
	/// With `MergePolicy::Refine` the bounds of `other` overwrite existing bounds
	/// (the later, more specific profile wins, even if it is looser) and `is_const`
	/// can only be switched on.
	pub fn merge_with(&mut self, other: &SettingsConstraints, policy: MergePolicy) {
		match policy {
			MergePolicy::Replace => {
				for (name, range) in &other.constraints {
					self.constraints.insert(name.clone(), range.clone());
				}
			}
			MergePolicy::Refine => {
				for (name, other_range) in &other.constraints {
					let range = self.constraints.entry(name.clone()).or_default();
					if let Some(min) = &other_range.min_value {
						range.min_value = Some(min.clone());
					}
					if let Some(max) = &other_range.max_value {
						range.max_value = Some(max.clone());
					}
					if other_range.is_const {
						range.is_const = true;
					}
				}
			}
		}
		debug!("Merged {} setting constraints ({:?})", other.constraints.len(), policy);
	}

	/// Check a single change, failing on any violation
	pub fn check<S: SettingsSnapshot + ?Sized>(
		&self,
		snapshot: &S,
		change: &SettingChange,
	) -> SlResult<()> {
		self.evaluate(snapshot, change, Reaction::Throw)?.into_kept()?;
		Ok(())
	}

	/// Check every change without filtering, failing on the first violation
	pub fn check_all<S: SettingsSnapshot + ?Sized>(
		&self,
		snapshot: &S,
		changes: &[SettingChange],
	) -> SlResult<()> {
		changes.iter().try_for_each(|change| self.check(snapshot, change))
	}

	/// Check changes and drop the no-ops
	///
	/// Fails on the first violation, in which case `changes` is left untouched.
	pub fn check_changes<S: SettingsSnapshot + ?Sized>(
		&self,
		snapshot: &S,
		changes: &mut Vec<SettingChange>,
	) -> SlResult<()> {
		let keep = changes
			.iter()
			.map(|change| self.evaluate(snapshot, change, Reaction::Throw)?.into_kept())
			.collect::<SlResult<Vec<bool>>>()?;

		let mut keep = keep.into_iter();
		changes.retain(|_| keep.next().unwrap_or(false));
		Ok(())
	}

	/// Drop changes that cannot be applied and move out-of-range values onto the
	/// nearest bound. Never fails.
	pub fn clamp<S: SettingsSnapshot + ?Sized>(&self, snapshot: &S, changes: &mut Vec<SettingChange>) {
		changes.retain_mut(|change| {
			self.evaluate(snapshot, change, Reaction::Clamp)
				.and_then(|outcome| outcome.settle(change, Reaction::Clamp))
				.unwrap_or(false)
		});
	}

	/// Decide what happens to one change
	///
	/// Under `Reaction::Clamp` collaborator failures become `Outcome::Dropped`; under
	/// `Reaction::Throw` they are returned as errors.
	fn evaluate<S: SettingsSnapshot + ?Sized>(
		&self,
		snapshot: &S,
		change: &SettingChange,
		reaction: Reaction,
	) -> SlResult<Outcome> {
		let name = change.name.as_str();

		if name == self.config.profile_setting {
			return Ok(Outcome::Kept);
		}

		match reaction {
			Reaction::Throw => {
				self.allow_list.assert_allowed(name).map_err(|err| self.add_hints(err))?;
			}
			Reaction::Clamp => {
				if !self.allow_list.is_allowed(name) {
					debug!("Dropping {}: setting is not allowed", change);
					return Ok(Outcome::Dropped);
				}
			}
		}

		// Setting isn't checked if the value has not changed
		let current = snapshot.try_get(name);
		if current.as_ref() == Some(&change.value) {
			return Ok(Outcome::Dropped);
		}

		let new_value = match (self.types.cast(name, &change.value), reaction) {
			(Ok(value), _) => value,
			(Err(err), Reaction::Throw) => return Err(err),
			(Err(err), Reaction::Clamp) => {
				debug!("Dropping {}: {}", change, err);
				return Ok(Outcome::Dropped);
			}
		};
		if current.as_ref() == Some(&new_value) {
			return Ok(Outcome::Dropped);
		}

		let range = resolve_range(&self.config, &self.constraints, RuntimeMode::of(snapshot), name);
		Ok(range.check(name, &new_value, reaction))
	}

	fn add_hints(&self, err: Error) -> Error {
		match err {
			Error::UnknownSetting { name, hints } if hints.is_empty() => {
				let hints = self.allow_list.hints(&name);
				Error::UnknownSetting { name, hints }
			}
			err => err,
		}
	}
}

// vim: ts=4
