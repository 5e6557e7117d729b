// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTML rendering for the landing page.

use chrono::{DateTime, Utc};
use lingo_common_i18n::{format_datetime, t};

use crate::i18n::RequestContext;

/// Render the landing page for a resolved request at instant `now`.
pub fn render_index(context: &RequestContext, now: DateTime<Utc>) -> String {
	let locale = context.locale();
	let current_time = format_datetime(now, context.resolution.timezone, locale);

	let greeting = match &context.user {
		Some(user) => t(
			locale,
			"home.logged_in_as",
			&[("username", escape_html(&user.name).as_str())],
		),
		None => t(locale, "home.not_logged_in", &[]),
	};

	format!(
		"<!DOCTYPE html>\n\
		 <html lang=\"{lang}\">\n\
		 <head>\n\
		 <meta charset=\"utf-8\">\n\
		 <title>{title}</title>\n\
		 </head>\n\
		 <body>\n\
		 <h1>{header}</h1>\n\
		 <p>{greeting}</p>\n\
		 <p>{time}</p>\n\
		 </body>\n\
		 </html>\n",
		lang = escape_html(locale),
		title = escape_html(&t(locale, "home.title", &[])),
		header = escape_html(&t(locale, "home.header", &[])),
		greeting = greeting,
		time = escape_html(&t(
			locale,
			"home.current_time",
			&[("current_time", current_time.as_str())]
		)),
	)
}

fn escape_html(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}
