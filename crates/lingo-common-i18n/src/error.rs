// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for resolver construction and strict resolution.

use thiserror::Error;

/// Errors produced while building a [`crate::Resolver`] or when strict
/// resolution rejects an explicit override.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
	#[error("supported locale set is empty")]
	EmptyLocaleSet,

	#[error("default locale '{0}' is not in the supported locale set")]
	UnsupportedDefaultLocale(String),

	#[error("invalid timezone: {0}")]
	InvalidTimezone(String),
}
