// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Medium-length timestamp formatting in a resolved locale and timezone.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::locale::{normalize_tag, primary_subtag};

const FRENCH_MONTHS: [&str; 12] = [
	"janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc.",
];

/// Format `instant` as seen in `timezone`, using the conventions of `locale`.
///
/// Locales without their own pattern use the English one.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lingo_common_i18n::{format_datetime, Tz};
///
/// let instant = Utc.with_ymd_and_hms(2020, 1, 21, 5, 55, 39).unwrap();
/// assert_eq!(format_datetime(instant, Tz::UTC, "en"), "Jan 21, 2020, 5:55:39 AM");
/// assert_eq!(format_datetime(instant, Tz::Europe__Paris, "fr"), "21 janv. 2020 à 06:55:39");
/// ```
pub fn format_datetime(instant: DateTime<Utc>, timezone: Tz, locale: &str) -> String {
	let local = instant.with_timezone(&timezone);
	let normalized = normalize_tag(locale);

	match primary_subtag(&normalized) {
		"fr" => format!(
			"{} {} {} à {}",
			local.day(),
			FRENCH_MONTHS[local.month0() as usize],
			local.year(),
			local.format("%H:%M:%S"),
		),
		_ => local.format("%b %-d, %Y, %-I:%M:%S %p").to_string(),
	}
}
