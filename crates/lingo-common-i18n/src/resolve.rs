// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale and timezone resolution logic.

use chrono_tz::Tz;
use serde::Serialize;
use tracing::debug;

use crate::accept::negotiate;
use crate::error::I18nError;
use crate::locale::SupportedLocales;
use crate::signals::{non_blank, RequestSignals, UserPreferences};
use crate::timezone::parse_timezone;

/// Resolve the effective locale for a request.
///
/// Resolution order (highest to lowest priority):
/// 1. Explicit override (if supported)
/// 2. User's stored locale preference (if supported)
/// 3. Best `Accept-Language` match
/// 4. `default_locale`
///
/// Unsupported values at any tier are skipped. The returned value is the
/// configured spelling of a supported locale, or `default_locale`.
///
/// # Example
///
/// ```
/// use lingo_common_i18n::{resolve_locale, RequestSignals, SupportedLocales};
///
/// let supported = SupportedLocales::new(["en", "fr"]).unwrap();
///
/// // Override takes priority
/// let signals = RequestSignals::new().with_locale_override("fr");
/// assert_eq!(resolve_locale(&signals, None, &supported, "en"), "fr");
///
/// // Unsupported override is ignored
/// let signals = RequestSignals::new().with_locale_override("kg");
/// assert_eq!(resolve_locale(&signals, None, &supported, "en"), "en");
/// ```
pub fn resolve_locale<'a>(
	signals: &RequestSignals,
	user: Option<&dyn UserPreferences>,
	supported: &'a SupportedLocales,
	default_locale: &'a str,
) -> &'a str {
	if let Some(requested) = non_blank(signals.locale_override.as_deref()) {
		if let Some(locale) = supported.get(requested) {
			debug!(locale, "locale resolved from override");
			return locale;
		}
		debug!(requested, "ignoring unsupported locale override");
	}

	if let Some(stored) = user.and_then(|u| non_blank(u.locale())) {
		if let Some(locale) = supported.get(stored) {
			debug!(locale, "locale resolved from user profile");
			return locale;
		}
		debug!(stored, "ignoring unsupported user locale");
	}

	if let Some(locale) = negotiate(&signals.accept_language, supported) {
		debug!(locale, "locale resolved from accept-language");
		return locale;
	}

	debug!(locale = default_locale, "locale resolved from default");
	default_locale
}

/// Resolve the effective timezone for a request.
///
/// Resolution order (highest to lowest priority):
/// 1. Explicit override (if a recognized zone)
/// 2. User's stored timezone (if a recognized zone)
/// 3. `default_timezone`
///
/// Unrecognized names are skipped, so the result is always a valid zone.
pub fn resolve_timezone(
	signals: &RequestSignals,
	user: Option<&dyn UserPreferences>,
	default_timezone: Tz,
) -> Tz {
	if let Some(requested) = non_blank(signals.timezone_override.as_deref()) {
		match parse_timezone(requested) {
			Ok(tz) => {
				debug!(timezone = tz.name(), "timezone resolved from override");
				return tz;
			}
			Err(_) => debug!(requested, "ignoring unknown timezone override"),
		}
	}

	if let Some(stored) = user.and_then(|u| non_blank(u.timezone())) {
		match parse_timezone(stored) {
			Ok(tz) => {
				debug!(timezone = tz.name(), "timezone resolved from user profile");
				return tz;
			}
			Err(_) => debug!(stored, "ignoring unknown user timezone"),
		}
	}

	debug!(timezone = default_timezone.name(), "timezone resolved from default");
	default_timezone
}

/// Outcome of resolving one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
	pub locale: String,
	pub timezone: Tz,
}

impl Resolution {
	pub fn timezone_name(&self) -> &'static str {
		self.timezone.name()
	}
}

/// Static resolver configuration, fixed at startup.
///
/// Holds no mutable state, so a single instance can be shared across any
/// number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Resolver {
	supported: SupportedLocales,
	default_locale: String,
	default_timezone: Tz,
}

impl Resolver {
	/// Build a resolver, validating that the defaults are usable.
	pub fn new<I, S>(locales: I, default_locale: &str, default_timezone: &str) -> Result<Self, I18nError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let supported = SupportedLocales::new(locales)?;
		let default_locale = supported
			.get(default_locale)
			.ok_or_else(|| I18nError::UnsupportedDefaultLocale(default_locale.to_string()))?
			.to_string();
		let default_timezone = parse_timezone(default_timezone)?;

		Ok(Self {
			supported,
			default_locale,
			default_timezone,
		})
	}

	pub fn supported_locales(&self) -> &SupportedLocales {
		&self.supported
	}

	pub fn default_locale(&self) -> &str {
		&self.default_locale
	}

	pub fn default_timezone(&self) -> Tz {
		self.default_timezone
	}

	pub fn resolve_locale(&self, signals: &RequestSignals, user: Option<&dyn UserPreferences>) -> &str {
		resolve_locale(signals, user, &self.supported, &self.default_locale)
	}

	pub fn resolve_timezone(&self, signals: &RequestSignals, user: Option<&dyn UserPreferences>) -> Tz {
		resolve_timezone(signals, user, self.default_timezone)
	}

	/// Resolve both locale and timezone. Never fails.
	pub fn resolve(&self, signals: &RequestSignals, user: Option<&dyn UserPreferences>) -> Resolution {
		Resolution {
			locale: self.resolve_locale(signals, user).to_string(),
			timezone: self.resolve_timezone(signals, user),
		}
	}

	/// Like [`Resolver::resolve`], but rejects an explicit timezone override
	/// that is not a recognized zone instead of falling through.
	pub fn try_resolve(
		&self,
		signals: &RequestSignals,
		user: Option<&dyn UserPreferences>,
	) -> Result<Resolution, I18nError> {
		if let Some(requested) = non_blank(signals.timezone_override.as_deref()) {
			parse_timezone(requested)?;
		}
		Ok(self.resolve(signals, user))
	}
}

impl Default for Resolver {
	fn default() -> Self {
		Self {
			supported: SupportedLocales::default(),
			default_locale: crate::locale::DEFAULT_LOCALE.to_string(),
			default_timezone: Tz::UTC,
		}
	}
}
