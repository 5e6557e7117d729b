// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use lingo_common_i18n::UserPreferences;
use serde::{Deserialize, Serialize};

/// Integer key profiles are stored under.
pub type UserId = i64;

/// A user's stored display preferences.
///
/// `locale` may be unset or hold a tag the server does not support;
/// `timezone` is free-form and not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
	pub id: UserId,
	pub name: String,
	#[serde(default)]
	pub locale: Option<String>,
	#[serde(default)]
	pub timezone: Option<String>,
}

impl Profile {
	pub fn new(id: UserId, name: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
			locale: None,
			timezone: None,
		}
	}

	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
		self.timezone = Some(timezone.into());
		self
	}
}

impl UserPreferences for Profile {
	fn locale(&self) -> Option<&str> {
		self.locale.as_deref()
	}

	fn timezone(&self) -> Option<&str> {
		self.timezone.as_deref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder() {
		let profile = Profile::new(7, "Ada").with_locale("fr").with_timezone("Europe/Paris");
		assert_eq!(UserPreferences::locale(&profile), Some("fr"));
		assert_eq!(UserPreferences::timezone(&profile), Some("Europe/Paris"));
	}

	#[test]
	fn test_deserialize_missing_preferences() {
		let profile: Profile = serde_json::from_str(r#"{"id": 4, "name": "Teletubby"}"#).unwrap();
		assert_eq!(profile, Profile::new(4, "Teletubby"));
	}
}
