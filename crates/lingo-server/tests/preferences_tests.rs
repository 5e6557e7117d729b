// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! End-to-end tests for per-request preference resolution.
//!
//! Every test drives the full router, so the middleware, profile lookup,
//! resolver and handlers are exercised together against the sample profile
//! table (supported locales `en`/`fr`, default `en`, default timezone `UTC`).

use std::sync::Arc;

use axum::{
	body::Body,
	http::{header, Request, StatusCode},
	Router,
};
use lingo_server::{create_app_state, create_router, ServerConfig};
use lingo_server_config::{I18nConfigLayer, ServerConfigLayer};
use lingo_server_profiles::InMemoryProfileStore;
use proptest::prelude::*;
use serde_json::Value;
use tower::ServiceExt;

fn app_with(config: ServerConfig) -> Router {
	let state = create_app_state(&config, Arc::new(InMemoryProfileStore::sample()));
	create_router(state)
}

fn app() -> Router {
	app_with(ServerConfig::default())
}

fn app_with_i18n(i18n: I18nConfigLayer) -> Router {
	let config = ServerConfig::from_layer(ServerConfigLayer {
		i18n: Some(i18n),
		..Default::default()
	})
	.unwrap();
	app_with(config)
}

fn strict_app() -> Router {
	app_with_i18n(I18nConfigLayer {
		strict_timezone_override: Some(true),
		..Default::default()
	})
}

async fn get(app: Router, uri: &str, accept_language: Option<&str>) -> (StatusCode, header::HeaderMap, Vec<u8>) {
	let mut builder = Request::builder().uri(uri);
	if let Some(value) = accept_language {
		builder = builder.header(header::ACCEPT_LANGUAGE, value);
	}
	let response = app
		.oneshot(builder.body(Body::empty()).unwrap())
		.await
		.unwrap();

	let status = response.status();
	let headers = response.headers().clone();
	let body = axum::body::to_bytes(response.into_body(), usize::MAX)
		.await
		.unwrap();
	(status, headers, body.to_vec())
}

async fn preferences(uri: &str, accept_language: Option<&str>) -> Value {
	let (status, _, body) = get(app(), uri, accept_language).await;
	assert_eq!(status, StatusCode::OK);
	serde_json::from_slice(&body).unwrap()
}

/// Scenario 1: a user with supported locale and valid timezone.
#[tokio::test]
async fn test_login_as_user_with_full_profile() {
	let prefs = preferences("/api/preferences?login_as=1", None).await;
	assert_eq!(prefs["locale"], "fr");
	assert_eq!(prefs["timezone"], "Europe/Paris");
	assert_eq!(prefs["user"]["name"], "Balou");
}

/// Scenario 2: unsupported locale and invalid timezone both fall through.
#[tokio::test]
async fn test_login_as_user_with_unusable_profile() {
	let prefs = preferences("/api/preferences?login_as=3", None).await;
	assert_eq!(prefs["locale"], "en");
	assert_eq!(prefs["timezone"], "UTC");
	assert_eq!(prefs["user"]["id"], 3);

	let prefs = preferences("/api/preferences?login_as=3", Some("fr-FR,fr;q=0.9")).await;
	assert_eq!(prefs["locale"], "fr");
}

/// Scenario 3: user without a locale keeps their timezone.
#[tokio::test]
async fn test_login_as_user_without_locale() {
	let prefs = preferences("/api/preferences?login_as=4", None).await;
	assert_eq!(prefs["locale"], "en");
	assert_eq!(prefs["timezone"], "Europe/London");

	let prefs = preferences("/api/preferences?login_as=4", Some("fr")).await;
	assert_eq!(prefs["locale"], "fr");
}

/// Scenario 4: explicit override beats the user's stored locale.
#[tokio::test]
async fn test_locale_override_beats_user() {
	let prefs = preferences("/api/preferences?locale=fr&login_as=2", None).await;
	assert_eq!(prefs["locale"], "fr");
	assert_eq!(prefs["timezone"], "US/Central");
}

/// Scenario 5: unknown user is anonymous.
#[tokio::test]
async fn test_unknown_user_is_anonymous() {
	let prefs = preferences("/api/preferences?login_as=999", Some("fr;q=0.8,en;q=0.3")).await;
	assert!(prefs["user"].is_null());
	assert_eq!(prefs["locale"], "fr");
	assert_eq!(prefs["timezone"], "UTC");
}

#[tokio::test]
async fn test_repeated_params_keep_first_value() {
	let prefs = preferences("/api/preferences?locale=fr&locale=kg&login_as=1&login_as=x", None).await;
	assert_eq!(prefs["user"]["name"], "Balou");
	assert_eq!(prefs["locale"], "fr");
	assert_eq!(prefs["timezone"], "Europe/Paris");
}

#[tokio::test]
async fn test_malformed_login_as_is_anonymous() {
	let prefs = preferences("/api/preferences?login_as=spock", None).await;
	assert!(prefs["user"].is_null());
	assert_eq!(prefs["locale"], "en");
}

#[tokio::test]
async fn test_no_signals_uses_defaults() {
	let prefs = preferences("/api/preferences", None).await;
	assert_eq!(prefs["locale"], "en");
	assert_eq!(prefs["timezone"], "UTC");
	assert!(prefs["user"].is_null());
}

#[tokio::test]
async fn test_unsupported_locale_override_is_ignored() {
	let prefs = preferences("/api/preferences?locale=kg&login_as=1", None).await;
	assert_eq!(prefs["locale"], "fr");
}

#[tokio::test]
async fn test_timezone_override_beats_user() {
	let prefs = preferences("/api/preferences?timezone=US/Central&login_as=1", None).await;
	assert_eq!(prefs["timezone"], "US/Central");
}

#[tokio::test]
async fn test_invalid_timezone_override_falls_through_to_user() {
	let prefs = preferences("/api/preferences?timezone=Vulcan&login_as=4", None).await;
	assert_eq!(prefs["timezone"], "Europe/London");
}

#[tokio::test]
async fn test_timezone_override_is_normalized() {
	let prefs = preferences("/api/preferences?timezone=europe%2Fparis", None).await;
	assert_eq!(prefs["timezone"], "Europe/Paris");
}

#[tokio::test]
async fn test_strict_mode_rejects_invalid_timezone_override() {
	let (status, _, body) = get(strict_app(), "/api/preferences?timezone=Vulcan", None).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);

	let error: Value = serde_json::from_slice(&body).unwrap();
	assert_eq!(error["error"], "bad_request");
	assert!(error["message"].as_str().unwrap().contains("Vulcan"));
}

#[tokio::test]
async fn test_strict_mode_accepts_valid_override() {
	let (status, _, _) = get(strict_app(), "/api/preferences?timezone=Europe/Paris", None).await;
	assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_index_page_is_localized() {
	let (status, headers, body) = get(app(), "/?login_as=1", None).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(headers.get(header::CONTENT_LANGUAGE).unwrap(), "fr");

	let html = String::from_utf8(body).unwrap();
	assert!(html.contains("<html lang=\"fr\">"));
	assert!(html.contains("Vous êtes connecté en tant que Balou."));
	assert!(html.contains("Nous sommes le "));
}

#[tokio::test]
async fn test_index_page_anonymous() {
	let (status, headers, body) = get(app(), "/", Some("en-US,en;q=0.9")).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(headers.get(header::CONTENT_LANGUAGE).unwrap(), "en");

	let html = String::from_utf8(body).unwrap();
	assert!(html.contains("You are not logged in."));
	assert!(html.contains("The current time is "));
}

#[tokio::test]
async fn test_health_is_not_localized() {
	let (status, headers, body) = get(app(), "/health?locale=fr", None).await;
	assert_eq!(status, StatusCode::OK);
	assert!(headers.get(header::CONTENT_LANGUAGE).is_none());

	let health: Value = serde_json::from_slice(&body).unwrap();
	assert_eq!(health["status"], "healthy");
	assert!(health.get("version").is_some());
}

#[tokio::test]
async fn test_custom_locale_set() {
	let app = app_with_i18n(I18nConfigLayer {
		languages: Some(vec!["en".to_string(), "fr".to_string(), "de".to_string()]),
		default_locale: Some("de".to_string()),
		default_timezone: Some("Europe/Berlin".to_string()),
		strict_timezone_override: None,
	});
	let (_, _, body) = get(app, "/api/preferences", Some("ja")).await;
	let prefs: Value = serde_json::from_slice(&body).unwrap();
	assert_eq!(prefs["locale"], "de");
	assert_eq!(prefs["timezone"], "Europe/Berlin");
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(32))]

	#[test]
	fn any_login_as_token_resolves(token in "[ -~]{0,12}") {
		let uri = format!("/api/preferences?login_as={}", encode(&token));
		let (status, _, body) = tokio_test::block_on(get(app(), &uri, None));
		prop_assert_eq!(status, StatusCode::OK);

		let prefs: Value = serde_json::from_slice(&body).unwrap();
		let locale = prefs["locale"].as_str().unwrap();
		prop_assert!(locale == "en" || locale == "fr");
	}
}

fn encode(raw: &str) -> String {
	raw.bytes()
		.map(|b| match b {
			b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => (b as char).to_string(),
			_ => format!("%{b:02X}"),
		})
		.collect()
}
