// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Landing page handler.

use axum::{response::Html, Extension};

use crate::{i18n::RequestContext, render::render_index};

/// GET / - Localized landing page showing the current time.
pub async fn index(Extension(context): Extension<RequestContext>) -> Html<String> {
	Html(render_index(&context, chrono::Utc::now()))
}
