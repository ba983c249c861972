//! Error types
//!
//! Every error carries a stable reason code (`ErrorCode`) next to its human-readable
//! message, so callers can branch on the code without parsing text.

use itertools::Itertools;
use std::fmt;

pub type SlResult<T> = std::result::Result<T, Error>;

/// Stable reason codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
	Readonly,
	QueryIsProhibited,
	SettingConstraintViolation,
	UnknownSetting,
	NotAllowed,
	CannotCast,
	BadArguments,
}

impl ErrorCode {
	pub fn as_str(&self) -> &'static str {
		match self {
			ErrorCode::Readonly => "E-READONLY",
			ErrorCode::QueryIsProhibited => "E-QUERY-PROHIBITED",
			ErrorCode::SettingConstraintViolation => "E-CONSTRAINT-VIOLATION",
			ErrorCode::UnknownSetting => "E-UNKNOWN-SETTING",
			ErrorCode::NotAllowed => "E-SETTING-NOT-ALLOWED",
			ErrorCode::CannotCast => "E-CANNOT-CAST",
			ErrorCode::BadArguments => "E-BAD-ARGUMENTS",
		}
	}
}

impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Kind of a constraint violation detected by a range check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
	/// Setting is not changeable at the session's readonly level
	ReadonlyViolation,
	/// DDL is prohibited, so the DDL switch itself is frozen
	DdlProhibited,
	/// Setting is marked constant
	ConstantViolation,
	/// Range has `max_value` ordered below `min_value`
	InconsistentRange,
	BelowMinimum,
	AboveMaximum,
}

impl ViolationKind {
	pub fn code(&self) -> ErrorCode {
		match self {
			ViolationKind::ReadonlyViolation => ErrorCode::Readonly,
			ViolationKind::DdlProhibited => ErrorCode::QueryIsProhibited,
			ViolationKind::ConstantViolation
			| ViolationKind::InconsistentRange
			| ViolationKind::BelowMinimum
			| ViolationKind::AboveMaximum => ErrorCode::SettingConstraintViolation,
		}
	}
}

/// A detected constraint violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
	pub kind: ViolationKind,
	pub setting: String,
	pub message: String,
}

impl Violation {
	pub fn new(kind: ViolationKind, setting: impl Into<String>, message: impl Into<String>) -> Self {
		Self { kind, setting: setting.into(), message: message.into() }
	}

	pub fn code(&self) -> ErrorCode {
		self.kind.code()
	}
}

impl fmt::Display for Violation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
	/// A proposed change breaks a constraint
	ConstraintViolation(Violation),
	/// Setting name is not known; `hints` lists near matches
	UnknownSetting { name: String, hints: Vec<String> },
	/// Setting is known but the allow-list refuses it
	NotAllowed(String),
	/// Value cannot be converted into the setting's type
	CannotCast { name: String, reason: String },
	/// Invalid registry or engine configuration
	ConfigError(String),
}

impl Error {
	pub fn unknown_setting(name: impl Into<String>) -> Self {
		Error::UnknownSetting { name: name.into(), hints: Vec::new() }
	}

	pub fn cannot_cast(name: impl Into<String>, reason: impl Into<String>) -> Self {
		Error::CannotCast { name: name.into(), reason: reason.into() }
	}

	pub fn code(&self) -> ErrorCode {
		match self {
			Error::ConstraintViolation(v) => v.code(),
			Error::UnknownSetting { .. } => ErrorCode::UnknownSetting,
			Error::NotAllowed(_) => ErrorCode::NotAllowed,
			Error::CannotCast { .. } => ErrorCode::CannotCast,
			Error::ConfigError(_) => ErrorCode::BadArguments,
		}
	}

	/// Violation kind, if this error is a constraint violation
	pub fn violation_kind(&self) -> Option<ViolationKind> {
		match self {
			Error::ConstraintViolation(v) => Some(v.kind),
			_ => None,
		}
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::ConstraintViolation(v) => write!(f, "{}", v),
			Error::UnknownSetting { name, hints } => {
				write!(f, "Unknown setting '{}'", name)?;
				if !hints.is_empty() {
					write!(
						f,
						". Maybe you meant [{}]",
						hints.iter().map(|h| format!("'{}'", h)).join(", ")
					)?;
				}
				Ok(())
			}
			Error::NotAllowed(name) => write!(f, "Setting '{}' is not allowed", name),
			Error::CannotCast { name, reason } => {
				write!(f, "Cannot convert value for setting '{}': {}", name, reason)
			}
			Error::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
		}
	}
}

impl std::error::Error for Error {}

impl From<Violation> for Error {
	fn from(v: Violation) -> Self {
		Error::ConstraintViolation(v)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unknown_setting_message_with_hints() {
		let err = Error::UnknownSetting {
			name: "max_thread".into(),
			hints: vec!["max_threads".into(), "max_thread_pool_size".into()],
		};
		assert_eq!(
			err.to_string(),
			"Unknown setting 'max_thread'. Maybe you meant ['max_threads', 'max_thread_pool_size']"
		);
		assert_eq!(err.code(), ErrorCode::UnknownSetting);
	}

	#[test]
	fn test_unknown_setting_message_without_hints() {
		assert_eq!(Error::unknown_setting("zzz").to_string(), "Unknown setting 'zzz'");
	}

	#[test]
	fn test_violation_codes() {
		let err: Error = Violation::new(
			ViolationKind::BelowMinimum,
			"max_threads",
			"Setting max_threads shouldn't be less than 5",
		)
		.into();
		assert_eq!(err.code(), ErrorCode::SettingConstraintViolation);
		assert_eq!(err.violation_kind(), Some(ViolationKind::BelowMinimum));
		assert_eq!(err.to_string(), "Setting max_threads shouldn't be less than 5");

		assert_eq!(ViolationKind::ReadonlyViolation.code().as_str(), "E-READONLY");
		assert_eq!(ViolationKind::DdlProhibited.code(), ErrorCode::QueryIsProhibited);
	}
}

// vim: ts=4
