// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shortcode scanning, attribute parsing, and placeholder rewriting.
//!
//! Directive grammar: `[chart:KIND ATTR*]` terminated by `/]`, where `KIND`
//! is `line`, `bar`, or `pie` and each attribute is `name="value"` or
//! `name='value'`:
//!
//! ```text
//! [chart:pie title="Portfolio" labels="Stocks,Bonds" data="70,30" /]
//! ```
//!
//! Parsing is lenient throughout: malformed directives pass through as
//! literal text and malformed attributes degrade to defaults. No operation
//! in this module returns an error.

mod attrs;
mod rewrite;
mod scan;

use std::borrow::Cow;

use crate::model::ChartDirective;

pub use attrs::{DirectiveDefaults, DEFAULT_CURRENCY, DEFAULT_HEIGHT, DEFAULT_SERIES_LABEL};
pub use rewrite::{placeholder, rewrite};

pub(crate) use rewrite::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

/// Extracts every chart directive from `text`, in document order.
pub fn extract(text: &str) -> Vec<ChartDirective> {
    extract_with(text, &DirectiveDefaults::default())
}

/// [`extract`] with caller-supplied fallback values.
pub fn extract_with(text: &str, defaults: &DirectiveDefaults) -> Vec<ChartDirective> {
    scan::scan(text)
        .iter()
        .enumerate()
        .map(|(ordinal, raw)| attrs::parse_directive(raw.kind, raw.body, ordinal, defaults))
        .collect()
}

/// Runs extraction and rewriting over a single scan pass.
///
/// The returned directives and the markers in the returned text pair up
/// 1:1 by ordinal.
pub fn extract_and_rewrite(text: &str) -> (Vec<ChartDirective>, Cow<'_, str>) {
    let matches = scan::scan(text);
    let defaults = DirectiveDefaults::default();
    let directives = matches
        .iter()
        .enumerate()
        .map(|(ordinal, raw)| attrs::parse_directive(raw.kind, raw.body, ordinal, &defaults))
        .collect();
    let rewritten = rewrite::splice_placeholders(text, &matches);
    (directives, rewritten)
}
