//! Admissible range of a single setting and the check applied to a proposed value

use setlimit_types::{Comparison, Violation, ViolationKind};

use crate::prelude::*;

/// What to do when a change breaks a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
	/// Report the violation as an error
	Throw,
	/// Drop the change, or move its value onto the nearest bound
	Clamp,
}

/// Result of checking one change
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
	/// Keep the change as proposed
	Kept,
	/// Remove the change silently (no-op or not applicable)
	Dropped,
	/// Keep the change with this value instead of the proposed one
	Rewritten(SettingValue),
	Violation(Violation),
}

impl Outcome {
	/// Apply the outcome to `change` under `reaction`
	///
	/// Returns whether the change is kept. A violation is an error for `Reaction::Throw`
	/// and a silent drop for `Reaction::Clamp`.
	pub fn settle(self, change: &mut SettingChange, reaction: Reaction) -> SlResult<bool> {
		match (self, reaction) {
			(Outcome::Rewritten(value), _) => {
				debug!("Clamping {} to {}", change, value);
				change.value = value;
				Ok(true)
			}
			(Outcome::Violation(violation), Reaction::Clamp) => {
				debug!("Dropping {}: {}", change, violation);
				Ok(false)
			}
			(outcome, _) => outcome.into_kept(),
		}
	}

	/// `Reaction::Throw` semantics without touching the change
	pub fn into_kept(self) -> SlResult<bool> {
		match self {
			Outcome::Kept | Outcome::Rewritten(_) => Ok(true),
			Outcome::Dropped => Ok(false),
			Outcome::Violation(violation) => {
				debug!("Rejecting change of {}: {}", violation.setting, violation);
				Err(Error::ConstraintViolation(violation))
			}
		}
	}
}

/// Why a range refuses every change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forbidden {
	pub kind: ViolationKind,
	pub message: String,
}

/// Bounds and mutability flags of one setting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Range {
	pub min_value: Option<SettingValue>,
	pub max_value: Option<SettingValue>,
	pub is_const: bool,
	pub changeable_in_readonly: bool,
	/// Overrides every other field
	pub forbidden: Option<Forbidden>,
}

/// `value < bound`, where incomparable values count as a violation
fn less_or_incomparable(value: &SettingValue, bound: &SettingValue) -> bool {
	!matches!(value.accurate_less(bound), Comparison::GreaterOrEqual)
}

impl Range {
	/// Unrestricted range
	pub fn allowed() -> Self {
		Self::default()
	}

	pub fn forbidden(kind: ViolationKind, message: impl Into<String>) -> Self {
		Self { forbidden: Some(Forbidden { kind, message: message.into() }), ..Self::default() }
	}

	pub fn is_forbidden(&self) -> bool {
		self.forbidden.is_some()
	}

	/// Check the already cast `new_value` of setting `name`
	///
	/// The first matching rule wins: forbidden, constant, inconsistent bounds, below
	/// minimum, above maximum.
	pub fn check(&self, name: &str, new_value: &SettingValue, reaction: Reaction) -> Outcome {
		if let Some(forbidden) = &self.forbidden {
			return Outcome::Violation(Violation::new(forbidden.kind, name, forbidden.message.clone()));
		}

		if self.is_const {
			return Outcome::Violation(Violation::new(
				ViolationKind::ConstantViolation,
				name,
				format!("Setting {} should not be changed", name),
			));
		}

		if let (Some(min), Some(max)) = (&self.min_value, &self.max_value)
			&& less_or_incomparable(max, min)
		{
			return Outcome::Violation(Violation::new(
				ViolationKind::InconsistentRange,
				name,
				format!("Setting {} should not be changed", name),
			));
		}

		if let Some(min) = &self.min_value
			&& less_or_incomparable(new_value, min)
		{
			return match reaction {
				Reaction::Throw => Outcome::Violation(Violation::new(
					ViolationKind::BelowMinimum,
					name,
					format!("Setting {} shouldn't be less than {}", name, min),
				)),
				Reaction::Clamp => Outcome::Rewritten(min.clone()),
			};
		}

		if let Some(max) = &self.max_value
			&& less_or_incomparable(max, new_value)
		{
			return match reaction {
				Reaction::Throw => Outcome::Violation(Violation::new(
					ViolationKind::AboveMaximum,
					name,
					format!("Setting {} shouldn't be greater than {}", name, max),
				)),
				Reaction::Clamp => Outcome::Rewritten(max.clone()),
			};
		}

		Outcome::Kept
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn bounded(min: i64, max: i64) -> Range {
		Range {
			min_value: Some(SettingValue::Int(min)),
			max_value: Some(SettingValue::Int(max)),
			..Range::default()
		}
	}

	#[test]
	fn test_unrestricted_range_keeps_anything() {
		let range = Range::allowed();
		assert_eq!(range.check("x", &SettingValue::Int(i64::MIN), Reaction::Throw), Outcome::Kept);
		assert_eq!(range.check("x", &SettingValue::from("abc"), Reaction::Clamp), Outcome::Kept);
	}

	#[test]
	fn test_forbidden_overrides_bounds() {
		let mut range = Range::forbidden(ViolationKind::ReadonlyViolation, "nope");
		range.min_value = Some(SettingValue::Int(0));
		let outcome = range.check("x", &SettingValue::Int(5), Reaction::Clamp);
		match outcome {
			Outcome::Violation(v) => {
				assert_eq!(v.kind, ViolationKind::ReadonlyViolation);
				assert_eq!(v.message, "nope");
			}
			other => panic!("unexpected outcome {:?}", other),
		}
	}

	#[test]
	fn test_const_wins_over_bounds() {
		let mut range = bounded(5, 10);
		range.is_const = true;
		let Outcome::Violation(v) = range.check("x", &SettingValue::Int(7), Reaction::Throw) else {
			panic!("expected a violation");
		};
		assert_eq!(v.kind, ViolationKind::ConstantViolation);
		assert_eq!(v.message, "Setting x should not be changed");
	}

	#[test]
	fn test_inconsistent_range() {
		let range = bounded(10, 5);
		for reaction in [Reaction::Throw, Reaction::Clamp] {
			let Outcome::Violation(v) = range.check("x", &SettingValue::Int(7), reaction) else {
				panic!("expected a violation");
			};
			assert_eq!(v.kind, ViolationKind::InconsistentRange);
		}
	}

	#[test]
	fn test_bounds_throw() {
		let range = bounded(5, 10);
		let Outcome::Violation(v) = range.check("x", &SettingValue::Int(2), Reaction::Throw) else {
			panic!("expected a violation");
		};
		assert_eq!(v.kind, ViolationKind::BelowMinimum);
		assert_eq!(v.message, "Setting x shouldn't be less than 5");

		let Outcome::Violation(v) = range.check("x", &SettingValue::Int(20), Reaction::Throw) else {
			panic!("expected a violation");
		};
		assert_eq!(v.kind, ViolationKind::AboveMaximum);
		assert_eq!(v.message, "Setting x shouldn't be greater than 10");

		assert_eq!(range.check("x", &SettingValue::Int(10), Reaction::Throw), Outcome::Kept);
		assert_eq!(range.check("x", &SettingValue::Int(5), Reaction::Throw), Outcome::Kept);
	}

	#[test]
	fn test_bounds_clamp() {
		let range = bounded(5, 10);
		assert_eq!(
			range.check("x", &SettingValue::Int(2), Reaction::Clamp),
			Outcome::Rewritten(SettingValue::Int(5))
		);
		assert_eq!(
			range.check("x", &SettingValue::Int(20), Reaction::Clamp),
			Outcome::Rewritten(SettingValue::Int(10))
		);
		assert_eq!(range.check("x", &SettingValue::Int(7), Reaction::Clamp), Outcome::Kept);
	}

	#[test]
	fn test_incomparable_counts_as_violation() {
		let range = Range { min_value: Some(SettingValue::Int(1)), ..Range::default() };
		let Outcome::Violation(v) = range.check("x", &SettingValue::from("one"), Reaction::Throw) else {
			panic!("expected a violation");
		};
		assert_eq!(v.kind, ViolationKind::BelowMinimum);
		assert_eq!(
			range.check("x", &SettingValue::from("one"), Reaction::Clamp),
			Outcome::Rewritten(SettingValue::Int(1))
		);
	}

	#[test]
	fn test_only_max_set() {
		let range = Range { max_value: Some(SettingValue::Float(0.5)), ..Range::default() };
		assert_eq!(range.check("x", &SettingValue::Float(0.25), Reaction::Throw), Outcome::Kept);
		assert_eq!(
			range.check("x", &SettingValue::Float(0.75), Reaction::Clamp),
			Outcome::Rewritten(SettingValue::Float(0.5))
		);
	}

	#[test]
	fn test_settle() {
		let mut change = SettingChange::new("x", 2_i64);
		assert!(Outcome::Rewritten(SettingValue::Int(5)).settle(&mut change, Reaction::Clamp).unwrap());
		assert_eq!(change.value, SettingValue::Int(5));

		let violation = Violation::new(ViolationKind::ConstantViolation, "x", "no");
		assert!(!Outcome::Violation(violation.clone()).settle(&mut change, Reaction::Clamp).unwrap());
		let err = Outcome::Violation(violation).settle(&mut change, Reaction::Throw).unwrap_err();
		assert_eq!(err.violation_kind(), Some(ViolationKind::ConstantViolation));
		assert!(!Outcome::Dropped.settle(&mut change, Reaction::Throw).unwrap());
	}
}

// vim: ts=4
