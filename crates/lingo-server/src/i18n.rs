// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-request locale, timezone and user resolution.
//!
//! [`i18n_layer`] runs before every localized handler. It reads the request's
//! signals, resolves the acting user and the display preferences, and attaches
//! the outcome as a [`RequestContext`] extension. Handlers take it with
//! `Extension<RequestContext>`; nothing is stored outside the request.
//!
//! Recognized query parameters:
//!
//! - `locale` - explicit locale override
//! - `timezone` - explicit IANA timezone override
//! - `login_as` - integer key of the profile to act as

use axum::{
	extract::{Query, Request, State},
	http::{
		header::{ACCEPT_LANGUAGE, CONTENT_LANGUAGE},
		HeaderValue,
	},
	middleware::Next,
	response::Response,
};
use lingo_common_i18n::{RequestSignals, Resolution, UserPreferences};
use lingo_server_profiles::{resolve_user, Profile};
use tracing::instrument;

use crate::{api::AppState, error::ServerError};

pub const LOCALE_PARAM: &str = "locale";
pub const TIMEZONE_PARAM: &str = "timezone";
pub const LOGIN_AS_PARAM: &str = "login_as";

/// Everything resolved for the current request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
	pub user: Option<Profile>,
	pub resolution: Resolution,
}

impl RequestContext {
	pub fn locale(&self) -> &str {
		&self.resolution.locale
	}

	pub fn timezone_name(&self) -> &'static str {
		self.resolution.timezone_name()
	}
}

/// Build the resolver inputs from a request's query string and headers.
///
/// A repeated query parameter keeps its first value. Header bytes that are
/// not UTF-8 are replaced rather than discarding the whole header.
pub fn extract_signals(request: &Request) -> (RequestSignals, Option<String>) {
	let params: Vec<(String, String)> = Query::try_from_uri(request.uri())
		.map(|Query(params)| params)
		.unwrap_or_default();
	let first = |name: &str| {
		params
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	};

	let accept_language = request
		.headers()
		.get(ACCEPT_LANGUAGE)
		.map(|v| String::from_utf8_lossy(v.as_bytes()));

	let signals = RequestSignals::from_parts(
		first(LOCALE_PARAM),
		first(TIMEZONE_PARAM),
		accept_language.as_deref(),
	);

	(signals, first(LOGIN_AS_PARAM).map(str::to_string))
}

/// Resolve the request context for `request` against the shared state.
pub fn resolve_context(state: &AppState, request: &Request) -> Result<RequestContext, ServerError> {
	let (signals, login_as) = extract_signals(request);
	let user = resolve_user(state.profiles.as_ref(), login_as.as_deref());
	let preferences = user.as_ref().map(|u| u as &dyn UserPreferences);

	let resolution = if state.strict_timezone_override {
		state.resolver.try_resolve(&signals, preferences)?
	} else {
		state.resolver.resolve(&signals, preferences)
	};

	Ok(RequestContext { user, resolution })
}

/// Middleware that attaches a [`RequestContext`] and sets `Content-Language`.
#[instrument(skip_all, fields(path = %request.uri().path()))]
pub async fn i18n_layer(
	State(state): State<AppState>,
	mut request: Request,
	next: Next,
) -> Result<Response, ServerError> {
	let context = resolve_context(&state, &request)?;

	tracing::debug!(
		locale = context.locale(),
		timezone = context.timezone_name(),
		user_id = context.user.as_ref().map(|u| u.id),
		"resolved request preferences"
	);

	let content_language = HeaderValue::from_str(context.locale()).ok();
	request.extensions_mut().insert(context);

	let mut response = next.run(request).await;
	if let Some(value) = content_language {
		response.headers_mut().insert(CONTENT_LANGUAGE, value);
	}
	Ok(response)
}
