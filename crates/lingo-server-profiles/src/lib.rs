// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User profile lookup for Lingo server.
//!
//! Requests may act on behalf of a user by passing `login_as=<id>`. This crate
//! turns that raw token into an optional [`Profile`] through a read-only
//! [`ProfileStore`]. The store is injected, so the in-memory sample table can
//! be swapped for a persistent implementation without touching the resolver.
//!
//! # Usage
//!
//! ```
//! use lingo_server_profiles::{resolve_user, InMemoryProfileStore};
//!
//! let store = InMemoryProfileStore::sample();
//! let user = resolve_user(&store, Some("1")).unwrap();
//! assert_eq!(user.name, "Balou");
//!
//! assert!(resolve_user(&store, Some("abc")).is_none());
//! assert!(resolve_user(&store, Some("999")).is_none());
//! ```

mod profile;
mod store;

pub use profile::{Profile, UserId};
pub use store::{resolve_user, InMemoryProfileStore, ProfileStore};
