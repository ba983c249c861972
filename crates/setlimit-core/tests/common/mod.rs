//! Shared test fixtures
//!
//! Builds a registry with a small, realistic set of settings and empty constraint sets
//! backed by it.

#![allow(dead_code)]

use std::sync::Arc;

use setlimit_core::{ConstraintsConfig, SettingsConstraints};
use setlimit_registry_adapter_memory::{
	CurrentSettings, FrozenSettingsRegistry, SettingDefinition, SettingKind, SettingsRegistry,
};
use setlimit_types::{SettingChange, SettingValue};

/// Initialize tracing output for tests that need it
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

pub fn create_test_registry() -> Arc<FrozenSettingsRegistry> {
	let mut registry = SettingsRegistry::new();
	let defs = [
		("max_threads", "Maximum number of worker threads", SettingKind::UInt, Some(SettingValue::UInt(8))),
		(
			"max_memory_usage",
			"Memory limit per query in bytes",
			SettingKind::UInt,
			Some(SettingValue::UInt(10_000_000_000)),
		),
		("priority", "Query priority", SettingKind::Int, Some(SettingValue::Int(0))),
		("sample_ratio", "Sampling ratio", SettingKind::Float, Some(SettingValue::Float(1.0))),
		("load_balancing", "Replica selection", SettingKind::String, Some(SettingValue::from("random"))),
		("readonly", "Readonly level", SettingKind::UInt, Some(SettingValue::UInt(0))),
		("allow_ddl", "Allow DDL queries", SettingKind::Bool, Some(SettingValue::Bool(true))),
		("profile", "Settings profile", SettingKind::String, None),
		("log_comment", "Comment attached to the query log", SettingKind::String, None),
	];

	for (key, description, kind, default) in defs {
		let mut builder = SettingDefinition::builder(key).description(description).kind(kind);
		if let Some(default) = default {
			builder = builder.default(default);
		}
		registry.register(builder.build().expect("valid definition")).expect("unique definition");
	}
	registry
		.register(
			SettingDefinition::builder("internal_token")
				.description("Set by the server only")
				.changeable(false)
				.build()
				.expect("valid definition"),
		)
		.expect("unique definition");
	registry.allow_custom_prefix("custom_").expect("valid prefix");

	Arc::new(registry.freeze())
}

pub fn create_constraints(registry: &Arc<FrozenSettingsRegistry>) -> SettingsConstraints {
	SettingsConstraints::new(registry.clone(), registry.clone())
}

pub fn create_constraints_with(
	registry: &Arc<FrozenSettingsRegistry>,
	config: ConstraintsConfig,
) -> SettingsConstraints {
	create_constraints(registry).with_config(config)
}

/// Constraint set with `max_threads` bounded to [5, 10]
pub fn bounded_threads(registry: &Arc<FrozenSettingsRegistry>) -> SettingsConstraints {
	let mut constraints = create_constraints(registry);
	constraints.set_min_value("max_threads", &SettingValue::UInt(5)).expect("castable bound");
	constraints.set_max_value("max_threads", &SettingValue::UInt(10)).expect("castable bound");
	constraints
}

pub fn session(registry: &FrozenSettingsRegistry) -> CurrentSettings {
	registry.defaults()
}

pub fn change(name: &str, value: impl Into<SettingValue>) -> SettingChange {
	SettingChange::new(name, value)
}

// vim: ts=4
