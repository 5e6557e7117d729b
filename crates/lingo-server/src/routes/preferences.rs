// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Resolved preferences as JSON.

use axum::{Extension, Json};
use serde::Serialize;

use crate::i18n::RequestContext;

#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
	pub locale: String,
	pub timezone: String,
	pub user: Option<UserSummary>,
}

#[derive(Debug, Serialize)]
pub struct UserSummary {
	pub id: i64,
	pub name: String,
}

impl From<&RequestContext> for PreferencesResponse {
	fn from(context: &RequestContext) -> Self {
		Self {
			locale: context.locale().to_string(),
			timezone: context.timezone_name().to_string(),
			user: context.user.as_ref().map(|u| UserSummary {
				id: u.id,
				name: u.name.clone(),
			}),
		}
	}
}

/// GET /api/preferences - The locale, timezone and user resolved for this request.
pub async fn get_preferences(
	Extension(context): Extension<RequestContext>,
) -> Json<PreferencesResponse> {
	Json(PreferencesResponse::from(&context))
}
