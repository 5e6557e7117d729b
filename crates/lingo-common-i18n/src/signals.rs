// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request inputs to the resolver.

use crate::accept::{parse_accept_language, LanguageRange};

/// Stored preferences of the user a request is acting as.
///
/// Implemented by whatever profile type the surrounding application uses, so
/// the resolver never depends on a particular store.
pub trait UserPreferences {
	fn locale(&self) -> Option<&str>;
	fn timezone(&self) -> Option<&str>;
}

/// Signals extracted from a single request.
///
/// Built once at the start of the request and dropped at the end of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSignals {
	pub locale_override: Option<String>,
	pub timezone_override: Option<String>,
	pub accept_language: Vec<LanguageRange>,
}

impl RequestSignals {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_locale_override(mut self, locale: impl Into<String>) -> Self {
		self.locale_override = Some(locale.into());
		self
	}

	pub fn with_timezone_override(mut self, timezone: impl Into<String>) -> Self {
		self.timezone_override = Some(timezone.into());
		self
	}

	/// Parse and attach a raw `Accept-Language` header value.
	pub fn with_accept_language(mut self, header: &str) -> Self {
		self.accept_language = parse_accept_language(header);
		self
	}

	/// Build signals from the raw values a web handler has at hand.
	pub fn from_parts(
		locale: Option<&str>,
		timezone: Option<&str>,
		accept_language: Option<&str>,
	) -> Self {
		Self {
			locale_override: locale.map(str::to_string),
			timezone_override: timezone.map(str::to_string),
			accept_language: accept_language.map(parse_accept_language).unwrap_or_default(),
		}
	}
}

/// Treat missing and blank values the same way.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
	value.map(str::trim).filter(|v| !v.is_empty())
}
