//! Conversions of setting values into a declared kind

use setlimit_types::SettingValue;

use crate::registry::SettingKind;

/// Cast `value` into `kind`, describing the mismatch on failure
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::float_cmp)]
pub fn cast_to(kind: SettingKind, value: &SettingValue) -> Result<SettingValue, String> {
	let mismatch = || format!("cannot convert {} {} to {}", value.type_name(), value, kind.type_name());

	match (kind, value) {
		(SettingKind::Bool, SettingValue::Bool(b)) => Ok(SettingValue::Bool(*b)),
		(SettingKind::Bool, SettingValue::Int(i @ (0 | 1))) => Ok(SettingValue::Bool(*i == 1)),
		(SettingKind::Bool, SettingValue::UInt(u @ (0 | 1))) => Ok(SettingValue::Bool(*u == 1)),
		(SettingKind::Bool, SettingValue::String(s)) => match s.to_ascii_lowercase().as_str() {
			"true" | "1" => Ok(SettingValue::Bool(true)),
			"false" | "0" => Ok(SettingValue::Bool(false)),
			_ => Err(mismatch()),
		},

		(SettingKind::Int, SettingValue::Bool(b)) => Ok(SettingValue::Int(i64::from(*b))),
		(SettingKind::Int, SettingValue::Int(i)) => Ok(SettingValue::Int(*i)),
		(SettingKind::Int, SettingValue::UInt(u)) => {
			i64::try_from(*u).map(SettingValue::Int).map_err(|_| mismatch())
		}
		(SettingKind::Int, SettingValue::Float(f))
			if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64 =>
		{
			Ok(SettingValue::Int(*f as i64))
		}
		(SettingKind::Int, SettingValue::String(s)) => {
			s.trim().parse::<i64>().map(SettingValue::Int).map_err(|_| mismatch())
		}

		(SettingKind::UInt, SettingValue::Bool(b)) => Ok(SettingValue::UInt(u64::from(*b))),
		(SettingKind::UInt, SettingValue::Int(i)) => {
			u64::try_from(*i).map(SettingValue::UInt).map_err(|_| mismatch())
		}
		(SettingKind::UInt, SettingValue::UInt(u)) => Ok(SettingValue::UInt(*u)),
		(SettingKind::UInt, SettingValue::Float(f))
			if f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64 =>
		{
			Ok(SettingValue::UInt(*f as u64))
		}
		(SettingKind::UInt, SettingValue::String(s)) => {
			s.trim().parse::<u64>().map(SettingValue::UInt).map_err(|_| mismatch())
		}

		(SettingKind::Float, SettingValue::Bool(b)) => Ok(SettingValue::Float(f64::from(u8::from(*b)))),
		(SettingKind::Float, SettingValue::Int(i)) => Ok(SettingValue::Float(*i as f64)),
		(SettingKind::Float, SettingValue::UInt(u)) => Ok(SettingValue::Float(*u as f64)),
		(SettingKind::Float, SettingValue::Float(f)) => Ok(SettingValue::Float(*f)),
		(SettingKind::Float, SettingValue::String(s)) => {
			s.trim().parse::<f64>().map(SettingValue::Float).map_err(|_| mismatch())
		}

		(SettingKind::String, SettingValue::String(s)) => Ok(SettingValue::String(s.clone())),
		(SettingKind::String, SettingValue::Bool(_) | SettingValue::Int(_) | SettingValue::UInt(_) | SettingValue::Float(_)) => {
			Ok(SettingValue::String(value.to_string()))
		}
		(SettingKind::String, SettingValue::Json(serde_json::Value::String(s))) => {
			Ok(SettingValue::String(s.clone()))
		}

		(SettingKind::Json, SettingValue::Json(j)) => Ok(SettingValue::Json(j.clone())),
		(SettingKind::Json, SettingValue::String(s)) => serde_json::from_str(s)
			.map(SettingValue::Json)
			.map_err(|e| format!("invalid JSON: {}", e)),
		(SettingKind::Json, SettingValue::Bool(_) | SettingValue::Int(_) | SettingValue::UInt(_) | SettingValue::Float(_)) => {
			serde_json::to_value(value).map(SettingValue::Json).map_err(|_| mismatch())
		}

		_ => Err(mismatch()),
	}
}


// vim: ts=4
