// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error type and its HTTP mapping.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
	#[error("bad request: {0}")]
	BadRequest(String),
}

/// JSON body returned for every error.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl ServerError {
	fn status_and_code(&self) -> (StatusCode, &'static str) {
		match self {
			ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
		}
	}
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, code) = self.status_and_code();
		tracing::debug!(error = %self, "request rejected");

		let message = match self {
			ServerError::BadRequest(msg) => msg,
		};

		(
			status,
			Json(ErrorResponse {
				error: code.to_string(),
				message,
			}),
		)
			.into_response()
	}
}

/// Preference errors raised while serving a request are the client's fault.
impl From<lingo_common_i18n::I18nError> for ServerError {
	fn from(e: lingo_common_i18n::I18nError) -> Self {
		ServerError::BadRequest(e.to_string())
	}
}
