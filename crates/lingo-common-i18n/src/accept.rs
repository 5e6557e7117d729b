// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `Accept-Language` parsing and content negotiation.

use tracing::trace;

use crate::locale::{normalize_tag, primary_subtag, SupportedLocales};

/// One entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRange {
	/// Normalized tag (`fr-ca`, `en`, `*`).
	pub tag: String,
	/// Client-stated weight in `(0, 1]`.
	pub quality: f32,
}

impl LanguageRange {
	pub fn new(tag: &str, quality: f32) -> Self {
		Self {
			tag: normalize_tag(tag),
			quality: quality.clamp(0.0, 1.0),
		}
	}

	pub fn is_wildcard(&self) -> bool {
		self.tag == "*"
	}
}

/// Parse an `Accept-Language` header value into ranked ranges.
///
/// Entries are returned sorted by weight, highest first. The sort is stable so
/// equally weighted entries keep the order the client listed them in. Entries
/// with a weight of zero or a weight that fails to parse are dropped.
///
/// ```
/// use lingo_common_i18n::parse_accept_language;
///
/// let ranges = parse_accept_language("en;q=0.5, fr-CA, fr;q=0.9");
/// let tags: Vec<_> = ranges.iter().map(|r| r.tag.as_str()).collect();
/// assert_eq!(tags, ["fr-ca", "fr", "en"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<LanguageRange> {
	let mut ranges: Vec<LanguageRange> = header.split(',').filter_map(parse_range).collect();
	ranges.sort_by(|a, b| b.quality.total_cmp(&a.quality));
	ranges
}

fn parse_range(raw: &str) -> Option<LanguageRange> {
	let mut parts = raw.split(';');
	let tag = parts.next()?.trim();
	if tag.is_empty() {
		return None;
	}

	let mut quality = 1.0_f32;
	for param in parts {
		let Some((name, value)) = param.split_once('=') else {
			continue;
		};
		if name.trim().eq_ignore_ascii_case("q") {
			match value.trim().parse::<f32>() {
				Ok(q) if q.is_finite() => quality = q,
				_ => {
					trace!(entry = raw, "dropping accept-language entry with bad weight");
					return None;
				}
			}
		}
	}

	let range = LanguageRange::new(tag, quality);
	if range.quality <= 0.0 {
		return None;
	}
	Some(range)
}

/// Pick the supported locale that best satisfies the client's ranked ranges.
///
/// Ranges are walked in order (highest weight first). For each range the
/// first hit wins among:
///
/// 1. an exact member match,
/// 2. a member equal to the range's primary subtag (`fr-CA` → `fr`),
/// 3. a member whose primary subtag equals the range (`en` → `en-US`).
///
/// `*` accepts the first supported locale. Returns `None` when nothing in the
/// list is acceptable.
///
/// Unlike Werkzeug's `best_match`, which tries exact matches across the whole
/// list before any subtag fallback, a heavier range that only matches on its
/// primary subtag beats a lighter exact match: `fr-CA,en;q=0.5` yields `fr`.
pub fn negotiate<'a>(ranges: &[LanguageRange], supported: &'a SupportedLocales) -> Option<&'a str> {
	for range in ranges {
		if range.is_wildcard() {
			trace!("accept-language wildcard matched");
			return Some(supported.first());
		}

		if let Some(locale) = supported.get(&range.tag) {
			trace!(tag = %range.tag, locale, "accept-language exact match");
			return Some(locale);
		}

		let language = primary_subtag(&range.tag);
		if language != range.tag {
			if let Some(locale) = supported.get(language) {
				trace!(tag = %range.tag, locale, "accept-language primary subtag match");
				return Some(locale);
			}
		}

		if let Some(locale) = supported.find_by_primary(&range.tag) {
			trace!(tag = %range.tag, locale, "accept-language regional match");
			return Some(locale);
		}
	}

	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn en_fr() -> SupportedLocales {
		SupportedLocales::new(["en", "fr"]).unwrap()
	}

	fn best(header: &str) -> Option<String> {
		negotiate(&parse_accept_language(header), &en_fr()).map(str::to_string)
	}

	#[test]
	fn test_parse_default_weight() {
		let ranges = parse_accept_language("fr");
		assert_eq!(ranges, vec![LanguageRange::new("fr", 1.0)]);
	}

	#[test]
	fn test_parse_sorts_by_weight() {
		let ranges = parse_accept_language("en;q=0.3,de;q=0.7,fr");
		let tags: Vec<_> = ranges.iter().map(|r| r.tag.as_str()).collect();
		assert_eq!(tags, vec!["fr", "de", "en"]);
	}

	#[test]
	fn test_parse_ties_keep_client_order() {
		let ranges = parse_accept_language("de;q=0.8,fr;q=0.8,en;q=0.8");
		let tags: Vec<_> = ranges.iter().map(|r| r.tag.as_str()).collect();
		assert_eq!(tags, vec!["de", "fr", "en"]);
	}

	#[test]
	fn test_parse_drops_zero_and_bad_weights() {
		let ranges = parse_accept_language("fr;q=0,en;q=abc,de;q=0.5");
		assert_eq!(ranges, vec![LanguageRange::new("de", 0.5)]);
	}

	#[test]
	fn test_parse_clamps_weight() {
		let ranges = parse_accept_language("fr;q=7");
		assert_eq!(ranges[0].quality, 1.0);
	}

	#[test]
	fn test_parse_ignores_blank_entries_and_extra_params() {
		let ranges = parse_accept_language(" , fr ; level=1 ; q=0.4 ,,");
		assert_eq!(ranges, vec![LanguageRange::new("fr", 0.4)]);
	}

	#[test]
	fn test_parse_empty_header() {
		assert!(parse_accept_language("").is_empty());
	}

	#[test]
	fn test_negotiate_highest_weight_wins() {
		assert_eq!(best("en;q=0.5,fr;q=0.9").as_deref(), Some("fr"));
		assert_eq!(best("fr;q=0.1,en").as_deref(), Some("en"));
	}

	#[test]
	fn test_negotiate_tie_uses_client_order() {
		assert_eq!(best("fr;q=0.5,en;q=0.5").as_deref(), Some("fr"));
		assert_eq!(best("en;q=0.5,fr;q=0.5").as_deref(), Some("en"));
	}

	#[test]
	fn test_negotiate_heavier_subtag_match_beats_lighter_exact_match() {
		assert_eq!(best("fr-CA,en;q=0.5").as_deref(), Some("fr"));
		assert_eq!(best("en;q=0.5,fr-CA").as_deref(), Some("fr"));
		assert_eq!(best("fr-CA;q=0.4,en;q=0.5").as_deref(), Some("en"));
	}

	#[test]
	fn test_negotiate_region_falls_back_to_language() {
		assert_eq!(best("fr-CA").as_deref(), Some("fr"));
		assert_eq!(best("en_GB,fr;q=0.9").as_deref(), Some("en"));
	}

	#[test]
	fn test_negotiate_language_matches_regional_member() {
		let supported = SupportedLocales::new(["en-US", "fr-FR"]).unwrap();
		let ranges = parse_accept_language("fr");
		assert_eq!(negotiate(&ranges, &supported), Some("fr-FR"));
	}

	#[test]
	fn test_negotiate_skips_unsupported() {
		assert_eq!(best("de,kg;q=0.9,fr;q=0.1").as_deref(), Some("fr"));
	}

	#[test]
	fn test_negotiate_no_match() {
		assert_eq!(best("de,ja"), None);
		assert_eq!(best(""), None);
	}

	#[test]
	fn test_negotiate_wildcard() {
		assert_eq!(best("de,*;q=0.1").as_deref(), Some("en"));
	}

	proptest! {
		#[test]
		fn parse_never_panics(header in ".{0,64}") {
			let _ = parse_accept_language(&header);
		}

		#[test]
		fn parsed_weights_are_in_range(header in "[a-z]{1,3}(;q=[0-9.]{1,4})?(,[a-z]{1,3}(;q=[0-9.]{1,4})?){0,4}") {
			for range in parse_accept_language(&header) {
				prop_assert!(range.quality > 0.0 && range.quality <= 1.0);
			}
		}

		#[test]
		fn negotiated_locale_is_always_supported(header in ".{0,64}") {
			let supported = en_fr();
			if let Some(locale) = negotiate(&parse_accept_language(&header), &supported) {
				prop_assert!(supported.contains(locale));
			}
		}
	}
}
