// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for Lingo server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`LINGO_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use lingo_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}:{}", config.http.host, config.http.port);
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use lingo_common_i18n::Resolver;
use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,
	/// Resolver built from `i18n` when the configuration was validated.
	pub resolver: Resolver,
}

impl ServerConfig {
	/// Finalize and validate a merged layer without reading any source.
	pub fn from_layer(layer: ServerConfigLayer) -> Result<Self, ConfigError> {
		finalize(layer)
	}

	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`LINGO_SERVER_*`)
/// 2. Config file (`/etc/lingo/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	let resolver = validate_config(&i18n)?;

	info!(
		host = %http.host,
		port = http.port,
		languages = ?i18n.languages,
		default_locale = %i18n.default_locale,
		default_timezone = %i18n.default_timezone,
		strict_timezone_override = i18n.strict_timezone_override,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		i18n,
		logging,
		resolver,
	})
}

/// Validate cross-field configuration rules, yielding the resolver they describe.
fn validate_config(i18n: &I18nConfig) -> Result<Resolver, ConfigError> {
	i18n
		.resolver()
		.map_err(|e| ConfigError::Validation(e.to_string()))
}
