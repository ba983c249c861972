//! Setting values and their best-effort ordering
//!
//! Values are dynamically typed. Two values of unrelated types (a string and a number,
//! for example) have no ordering; the comparator reports that case explicitly instead of
//! guessing.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - type inferred from the setting's declared kind
pub enum SettingValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	UInt(u64),
	Float(f64),
	String(String),
	Json(serde_json::Value),
}

/// Result of a three-valued "less than" comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
	Less,
	GreaterOrEqual,
	/// The two values have no common ordering
	Incomparable,
}

impl From<Option<Ordering>> for Comparison {
	fn from(ord: Option<Ordering>) -> Self {
		match ord {
			Some(Ordering::Less) => Comparison::Less,
			Some(_) => Comparison::GreaterOrEqual,
			None => Comparison::Incomparable,
		}
	}
}

/// Numeric view used for cross-type comparisons
#[derive(Clone, Copy)]
enum Number {
	Integer(i128),
	Float(f64),
}

impl Number {
	fn partial_cmp(self, other: Number) -> Option<Ordering> {
		match (self, other) {
			(Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
			(Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
			(Number::Integer(a), Number::Float(b)) => cmp_integer_float(a, b),
			(Number::Float(a), Number::Integer(b)) => cmp_integer_float(b, a).map(Ordering::reverse),
		}
	}
}

/// Compares an integer with a float without rounding the integer through `f64`
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn cmp_integer_float(int: i128, float: f64) -> Option<Ordering> {
	if float.is_nan() {
		return None;
	}
	// i128 bounds are exact powers of two in f64
	if float >= i128::MAX as f64 {
		return Some(Ordering::Less);
	}
	if float < i128::MIN as f64 {
		return Some(Ordering::Greater);
	}

	let whole = float.trunc();
	match int.cmp(&(whole as i128)) {
		Ordering::Equal => {
			let frac = float - whole;
			if frac > 0.0 {
				Some(Ordering::Less)
			} else if frac < 0.0 {
				Some(Ordering::Greater)
			} else {
				Some(Ordering::Equal)
			}
		}
		ord => Some(ord),
	}
}

impl SettingValue {
	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::Bool(_) => "bool",
			SettingValue::Int(_) => "int",
			SettingValue::UInt(_) => "uint",
			SettingValue::Float(_) => "float",
			SettingValue::String(_) => "string",
			SettingValue::Json(_) => "json",
		}
	}

	fn as_number(&self) -> Option<Number> {
		match self {
			SettingValue::Bool(b) => Some(Number::Integer(i128::from(*b))),
			SettingValue::Int(i) => Some(Number::Integer(i128::from(*i))),
			SettingValue::UInt(u) => Some(Number::Integer(i128::from(*u))),
			SettingValue::Float(f) => Some(Number::Float(*f)),
			SettingValue::String(_) | SettingValue::Json(_) => None,
		}
	}

	/// Best-effort `self < other`
	///
	/// Numbers (including booleans) compare by numeric value across representations,
	/// strings compare lexicographically. Everything else, as well as NaN, is
	/// `Comparison::Incomparable`.
	pub fn accurate_less(&self, other: &SettingValue) -> Comparison {
		if let (SettingValue::String(a), SettingValue::String(b)) = (self, other) {
			return Comparison::from(Some(a.cmp(b)));
		}
		match (self.as_number(), other.as_number()) {
			(Some(a), Some(b)) => Comparison::from(a.partial_cmp(b)),
			_ => Comparison::Incomparable,
		}
	}
}

impl fmt::Display for SettingValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SettingValue::Bool(b) => write!(f, "{}", b),
			SettingValue::Int(i) => write!(f, "{}", i),
			SettingValue::UInt(u) => write!(f, "{}", u),
			SettingValue::Float(x) => write!(f, "{}", x),
			SettingValue::String(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
			SettingValue::Json(j) => write!(f, "{}", j),
		}
	}
}

impl From<bool> for SettingValue {
	fn from(v: bool) -> Self {
		SettingValue::Bool(v)
	}
}

impl From<i64> for SettingValue {
	fn from(v: i64) -> Self {
		SettingValue::Int(v)
	}
}

impl From<u64> for SettingValue {
	fn from(v: u64) -> Self {
		SettingValue::UInt(v)
	}
}

impl From<f64> for SettingValue {
	fn from(v: f64) -> Self {
		SettingValue::Float(v)
	}
}

impl From<&str> for SettingValue {
	fn from(v: &str) -> Self {
		SettingValue::String(v.to_owned())
	}
}

impl From<String> for SettingValue {
	fn from(v: String) -> Self {
		SettingValue::String(v)
	}
}


// vim: ts=4
