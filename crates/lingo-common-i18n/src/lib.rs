// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale and timezone resolution for Lingo.
//!
//! Every inbound request carries a handful of signals that say which language
//! and timezone it wants to be served in. This crate turns those signals into a
//! single, always-valid answer.
//!
//! # Locale precedence
//!
//! 1. Explicit `locale` override (if supported)
//! 2. The signed-in user's stored locale (if supported)
//! 3. Best match from the client's `Accept-Language` header
//! 4. The configured default locale
//!
//! # Timezone precedence
//!
//! 1. Explicit `timezone` override (if a recognized IANA zone)
//! 2. The signed-in user's stored timezone (if a recognized IANA zone)
//! 3. The configured default timezone
//!
//! Resolution is pure and synchronous. Unsupported or malformed values are
//! skipped, never reported, unless the caller opts into
//! [`Resolver::try_resolve`].
//!
//! # Example
//!
//! ```
//! use lingo_common_i18n::{RequestSignals, Resolver};
//!
//! let resolver = Resolver::new(["en", "fr"], "en", "UTC").unwrap();
//!
//! let signals = RequestSignals::new()
//!     .with_accept_language("fr-CA,fr;q=0.9,en;q=0.5")
//!     .with_timezone_override("Europe/Paris");
//!
//! let resolution = resolver.resolve(&signals, None);
//! assert_eq!(resolution.locale, "fr");
//! assert_eq!(resolution.timezone_name(), "Europe/Paris");
//! ```

mod accept;
mod catalog;
mod error;
mod format;
mod locale;
mod resolve;
mod signals;
mod timezone;

pub use accept::{negotiate, parse_accept_language, LanguageRange};
pub use catalog::t;
pub use error::I18nError;
pub use format::format_datetime;
pub use locale::{normalize_tag, primary_subtag, SupportedLocales};
pub use resolve::{resolve_locale, resolve_timezone, Resolution, Resolver};
pub use signals::{RequestSignals, UserPreferences};
pub use timezone::parse_timezone;

pub use chrono_tz::Tz;

pub use locale::{DEFAULT_LOCALE, DEFAULT_LOCALES};
pub use timezone::DEFAULT_TIMEZONE;
