// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Profile storage abstraction and the in-memory sample table.

use std::collections::HashMap;

use tracing::debug;

use crate::profile::{Profile, UserId};

/// Read-only lookup of profiles by key.
///
/// Implementations must be safe to share between concurrently handled
/// requests. Lookups return an owned snapshot so backends that cannot hand out
/// references (a database, a remote service) fit the same shape.
pub trait ProfileStore: Send + Sync {
	fn get(&self, id: UserId) -> Option<Profile>;
}

/// `HashMap`-backed store. Never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
	profiles: HashMap<UserId, Profile>,
}

impl InMemoryProfileStore {
	pub fn new(profiles: impl IntoIterator<Item = Profile>) -> Self {
		Self {
			profiles: profiles.into_iter().map(|p| (p.id, p)).collect(),
		}
	}

	/// The four fixed demo users.
	pub fn sample() -> Self {
		Self::new([
			Profile::new(1, "Balou")
				.with_locale("fr")
				.with_timezone("Europe/Paris"),
			Profile::new(2, "Beyonce")
				.with_locale("en")
				.with_timezone("US/Central"),
			Profile::new(3, "Spock").with_locale("kg").with_timezone("Vulcan"),
			Profile::new(4, "Teletubby").with_timezone("Europe/London"),
		])
	}

	pub fn len(&self) -> usize {
		self.profiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.profiles.is_empty()
	}
}

impl ProfileStore for InMemoryProfileStore {
	fn get(&self, id: UserId) -> Option<Profile> {
		self.profiles.get(&id).cloned()
	}
}

/// Resolve the user a request acts as from its raw `login_as` token.
///
/// Missing tokens, tokens that are not integers and unknown keys all yield
/// `None`.
pub fn resolve_user(store: &dyn ProfileStore, raw: Option<&str>) -> Option<Profile> {
	let raw = raw?.trim();
	if raw.is_empty() {
		return None;
	}

	let id: UserId = match raw.parse() {
		Ok(id) => id,
		Err(_) => {
			debug!(login_as = raw, "login_as is not an integer, treating as anonymous");
			return None;
		}
	};

	let profile = store.get(id);
	if profile.is_none() {
		debug!(user_id = id, "no profile for login_as, treating as anonymous");
	}
	profile
}
