// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use super::scan::{scan, RawDirective};

/// Opening and closing text of a placeholder marker. The render binding
/// derives its locator from these same constants.
pub(crate) const PLACEHOLDER_OPEN: &str = "<div data-chart-placeholder=\"";
pub(crate) const PLACEHOLDER_CLOSE: &str = "\"></div>";

/// Builds the inert marker for one ordinal.
pub fn placeholder(ordinal: usize) -> String {
    let mut out = String::with_capacity(PLACEHOLDER_OPEN.len() + PLACEHOLDER_CLOSE.len() + 4);
    push_placeholder(&mut out, ordinal);
    out
}

fn push_placeholder(out: &mut String, ordinal: usize) {
    let mut buf = itoa::Buffer::new();
    out.push_str(PLACEHOLDER_OPEN);
    out.push_str(buf.format(ordinal));
    out.push_str(PLACEHOLDER_CLOSE);
}

/// Replaces every recognized directive with its ordinal marker.
///
/// Ordinals restart at zero on every call. Text without directives is
/// returned borrowed and byte-identical.
pub fn rewrite(text: &str) -> Cow<'_, str> {
    splice_placeholders(text, &scan(text))
}

/// Splices markers over the spans of one scan pass. Extraction and
/// rewriting both consume the same pass, so counts and ordinals cannot
/// disagree.
pub(crate) fn splice_placeholders<'a>(
    text: &'a str,
    matches: &[RawDirective<'_>],
) -> Cow<'a, str> {
    if matches.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for (ordinal, raw) in matches.iter().enumerate() {
        out.push_str(&text[cursor..raw.span.start]);
        push_placeholder(&mut out, ordinal);
        cursor = raw.span.end;
    }
    out.push_str(&text[cursor..]);
    Cow::Owned(out)
}
