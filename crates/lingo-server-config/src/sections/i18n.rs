// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale and timezone configuration section.

use lingo_common_i18n::{I18nError, Resolver, DEFAULT_LOCALE, DEFAULT_LOCALES, DEFAULT_TIMEZONE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	pub languages: Option<Vec<String>>,
	pub default_locale: Option<String>,
	pub default_timezone: Option<String>,
	pub strict_timezone_override: Option<bool>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.languages.is_some() {
			self.languages = other.languages;
		}
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.default_timezone.is_some() {
			self.default_timezone = other.default_timezone;
		}
		if other.strict_timezone_override.is_some() {
			self.strict_timezone_override = other.strict_timezone_override;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			languages: self
				.languages
				.unwrap_or_else(|| DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect()),
			default_locale: self
				.default_locale
				.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
			default_timezone: self
				.default_timezone
				.unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
			strict_timezone_override: self.strict_timezone_override.unwrap_or(false),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
	pub languages: Vec<String>,
	pub default_locale: String,
	pub default_timezone: String,
	/// Reject unknown `timezone` overrides instead of falling through to the
	/// next source.
	pub strict_timezone_override: bool,
}

impl I18nConfig {
	/// Build the request resolver described by this section.
	pub fn resolver(&self) -> Result<Resolver, I18nError> {
		Resolver::new(&self.languages, &self.default_locale, &self.default_timezone)
	}
}

impl Default for I18nConfig {
	fn default() -> Self {
		I18nConfigLayer::default().finalize()
	}
}
