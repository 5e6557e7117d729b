// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Lingo HTTP server.
//!
//! Serves a localized landing page. Each request's display locale and
//! timezone are chosen from its `locale`/`timezone` query overrides, the user
//! selected with `login_as`, the `Accept-Language` header, and the configured
//! defaults, in that order.

pub mod api;
pub mod error;
pub mod i18n;
pub mod render;
pub mod routes;
pub mod version;

pub use api::{create_app_state, create_router, AppState};
pub use error::ServerError;
pub use i18n::RequestContext;
pub use lingo_server_config::ServerConfig;
