// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The set of locales the server is willing to serve.

use crate::error::I18nError;

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// Locales served when nothing else is configured.
pub const DEFAULT_LOCALES: &[&str] = &["en", "fr"];

/// Normalize a locale tag for comparison.
///
/// Trims surrounding whitespace, lower-cases, and turns POSIX-style `_`
/// separators into `-`, so `"fr_CA"`, `"FR-ca"` and `" fr-ca "` compare equal.
pub fn normalize_tag(tag: &str) -> String {
	tag.trim().to_ascii_lowercase().replace('_', "-")
}

/// Primary language subtag of a (normalized or raw) locale tag.
///
/// ```
/// use lingo_common_i18n::primary_subtag;
///
/// assert_eq!(primary_subtag("fr-CA"), "fr");
/// assert_eq!(primary_subtag("en_US"), "en");
/// assert_eq!(primary_subtag("de"), "de");
/// ```
pub fn primary_subtag(tag: &str) -> &str {
	tag.split(['-', '_']).next().unwrap_or(tag)
}

/// Ordered, de-duplicated set of supported locales.
///
/// Members keep the spelling they were configured with; membership tests are
/// done on the normalized form so they are insensitive to case and separator
/// style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales {
	entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
	canonical: String,
	normalized: String,
}

impl SupportedLocales {
	/// Build a set from configured tags.
	///
	/// Blank tags are skipped and later duplicates (after normalization) are
	/// dropped. Fails when no usable tag remains.
	pub fn new<I, S>(locales: I) -> Result<Self, I18nError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut entries: Vec<Entry> = Vec::new();
		for locale in locales {
			let canonical = locale.as_ref().trim();
			if canonical.is_empty() {
				continue;
			}
			let normalized = normalize_tag(canonical);
			if entries.iter().any(|e| e.normalized == normalized) {
				continue;
			}
			entries.push(Entry {
				canonical: canonical.to_string(),
				normalized,
			});
		}

		if entries.is_empty() {
			return Err(I18nError::EmptyLocaleSet);
		}

		Ok(Self { entries })
	}

	/// Look up a tag, returning the configured spelling if it is a member.
	pub fn get(&self, tag: &str) -> Option<&str> {
		let normalized = normalize_tag(tag);
		if normalized.is_empty() {
			return None;
		}
		self
			.entries
			.iter()
			.find(|e| e.normalized == normalized)
			.map(|e| e.canonical.as_str())
	}

	pub fn contains(&self, tag: &str) -> bool {
		self.get(tag).is_some()
	}

	/// First member whose primary subtag equals `language`.
	pub(crate) fn find_by_primary(&self, language: &str) -> Option<&str> {
		let language = normalize_tag(language);
		self
			.entries
			.iter()
			.find(|e| primary_subtag(&e.normalized) == language)
			.map(|e| e.canonical.as_str())
	}

	/// First configured member.
	pub fn first(&self) -> &str {
		// Construction guarantees at least one entry.
		&self.entries[0].canonical
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|e| e.canonical.as_str())
	}
}

impl Default for SupportedLocales {
	fn default() -> Self {
		Self {
			entries: DEFAULT_LOCALES
				.iter()
				.map(|l| Entry {
					canonical: (*l).to_string(),
					normalized: normalize_tag(l),
				})
				.collect(),
		}
	}
}
