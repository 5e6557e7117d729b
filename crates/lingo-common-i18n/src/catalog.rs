// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Built-in strings for the page shell.
//!
//! Keys use dot notation (`home.title`). Unknown locales fall back to English,
//! unknown keys to the key itself.

use crate::locale::{normalize_tag, primary_subtag};

/// Look up a built-in string, substituting `%(name)s` placeholders.
///
/// ```
/// use lingo_common_i18n::t;
///
/// assert_eq!(t("fr", "home.header", &[]), "Bonjour monde !");
/// assert_eq!(
///     t("en", "home.logged_in_as", &[("username", "Balou")]),
///     "You are logged in as Balou."
/// );
/// ```
pub fn t(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
	let normalized = normalize_tag(locale);
	let template = lookup(primary_subtag(&normalized), key)
		.or_else(|| lookup("en", key))
		.unwrap_or(key);

	let mut out = template.to_string();
	for (name, value) in args {
		out = out.replace(&format!("%({name})s"), value);
	}
	out
}

fn lookup(language: &str, key: &str) -> Option<&'static str> {
	let message = match (language, key) {
		("en", "home.title") => "Welcome to Lingo",
		("en", "home.header") => "Hello world!",
		("en", "home.logged_in_as") => "You are logged in as %(username)s.",
		("en", "home.not_logged_in") => "You are not logged in.",
		("en", "home.current_time") => "The current time is %(current_time)s.",

		("fr", "home.title") => "Bienvenue chez Lingo",
		("fr", "home.header") => "Bonjour monde !",
		("fr", "home.logged_in_as") => "Vous êtes connecté en tant que %(username)s.",
		("fr", "home.not_logged_in") => "Vous n'êtes pas connecté.",
		("fr", "home.current_time") => "Nous sommes le %(current_time)s.",

		_ => return None,
	};
	Some(message)
}
