//! Effective range resolution
//!
//! Two independent axes decide what a change may do:
//! - The session's readonly level gates *whether* a setting is touchable at all
//! - The constraint table gates *which values* are acceptable once it is touchable

use std::borrow::Cow;
use std::collections::HashMap;

use setlimit_types::{SettingsSnapshot, ViolationKind};

use crate::config::ConstraintsConfig;
use crate::prelude::*;
use crate::range::Range;

/// Runtime mode of the session a change is validated for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeMode {
	pub readonly: ReadonlyLevel,
	pub allow_ddl: bool,
}

impl Default for RuntimeMode {
	fn default() -> Self {
		Self { readonly: ReadonlyLevel::Disabled, allow_ddl: true }
	}
}

impl RuntimeMode {
	pub fn of<S: SettingsSnapshot + ?Sized>(snapshot: &S) -> Self {
		Self { readonly: snapshot.readonly(), allow_ddl: snapshot.allow_ddl() }
	}
}

/// Compute the effective range of `name` under `mode`
pub(crate) fn resolve_range<'a>(
	config: &ConstraintsConfig,
	table: &'a HashMap<String, Range>,
	mode: RuntimeMode,
	name: &str,
) -> Cow<'a, Range> {
	if !mode.allow_ddl && name == config.allow_ddl_setting {
		return Cow::Owned(Range::forbidden(
			ViolationKind::DdlProhibited,
			format!(
				"Cannot modify '{}' setting when DDL queries are prohibited for the user",
				name
			),
		));
	}

	if mode.readonly > ReadonlyLevel::Strict && name == config.readonly_setting {
		return Cow::Owned(Range::forbidden(
			ViolationKind::ReadonlyViolation,
			format!("Cannot modify '{}' setting in readonly mode", name),
		));
	}

	let entry = table.get(name);
	match (mode.readonly, entry) {
		(ReadonlyLevel::Strict, Some(range)) if range.changeable_in_readonly => Cow::Borrowed(range),
		(ReadonlyLevel::Strict, _) => Cow::Owned(Range::forbidden(
			ViolationKind::ReadonlyViolation,
			format!("Cannot modify '{}' setting in readonly mode", name),
		)),
		(_, Some(range)) => Cow::Borrowed(range),
		(_, None) => Cow::Owned(Range::allowed()),
	}
}


// vim: ts=4
