// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use lingo_common_i18n::Resolver;
use lingo_server_config::ServerConfig;
use lingo_server_profiles::ProfileStore;

use crate::{i18n::i18n_layer, routes};

/// Application state shared across handlers.
///
/// Everything here is read-only once the server starts.
#[derive(Clone)]
pub struct AppState {
	pub resolver: Arc<Resolver>,
	pub profiles: Arc<dyn ProfileStore>,
	pub strict_timezone_override: bool,
}

/// Creates the application state from validated configuration.
///
/// The resolver is the one built while the configuration was loaded.
pub fn create_app_state(config: &ServerConfig, profiles: Arc<dyn ProfileStore>) -> AppState {
	let resolver = config.resolver.clone();

	tracing::info!(
		languages = ?resolver.supported_locales().iter().collect::<Vec<_>>(),
		default_locale = resolver.default_locale(),
		default_timezone = resolver.default_timezone().name(),
		strict_timezone_override = config.i18n.strict_timezone_override,
		"Preference resolver ready"
	);

	AppState {
		resolver: Arc::new(resolver),
		profiles,
		strict_timezone_override: config.i18n.strict_timezone_override,
	}
}

/// Create the router with all routes.
///
/// Localized routes sit behind [`i18n_layer`]; `/health` does not.
pub fn create_router(state: AppState) -> Router {
	let localized: Router<AppState> = Router::new()
		.route("/", get(routes::index::index))
		.route("/api/preferences", get(routes::preferences::get_preferences))
		.route_layer(from_fn_with_state(state.clone(), i18n_layer));

	Router::new()
		.merge(localized)
		.route("/health", get(routes::health::health_check))
		.with_state(state)
}
