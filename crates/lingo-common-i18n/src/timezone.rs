// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Timezone validation against the IANA database.

use chrono_tz::Tz;

use crate::error::I18nError;

/// Timezone used when nothing else is configured.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Parse an IANA timezone name.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. The returned
/// zone's [`Tz::name`] is the database's canonical spelling.
///
/// ```
/// use lingo_common_i18n::parse_timezone;
///
/// assert_eq!(parse_timezone("europe/paris").unwrap().name(), "Europe/Paris");
/// assert!(parse_timezone("Vulcan").is_err());
/// ```
pub fn parse_timezone(timezone: &str) -> Result<Tz, I18nError> {
	let trimmed = timezone.trim();
	trimmed
		.parse::<Tz>()
		.ok()
		.or_else(|| Tz::from_str_insensitive(trimmed).ok())
		.ok_or_else(|| I18nError::InvalidTimezone(timezone.to_string()))
}
