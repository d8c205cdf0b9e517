// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::ops::Range;
use std::sync::OnceLock;

use memchr::memmem;
use regex::Regex;

use crate::model::ChartKind;

/// Literal prefix every directive starts with; checked before the regex
/// runs.
const OPEN_MARKER: &[u8] = b"[chart:";

/// One recognized directive span, prior to attribute parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawDirective<'a> {
    pub(crate) kind: ChartKind,
    pub(crate) body: &'a str,
    pub(crate) span: Range<usize>,
}

/// The one recognition rule shared by extraction and rewriting.
///
/// The body is matched non-greedily so the first `/]` terminates a
/// directive; directives never nest. `(?s)` lets attribute bodies wrap
/// across lines.
fn directive_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\[chart:(line|bar|pie)\s+(.*?)/\]").expect("directive grammar compiles")
    })
}

/// Scans `text` left to right for chart directives.
///
/// Unknown kind tags and unterminated markers are simply not matched;
/// scanning never fails, it only skips. Match order is document order and
/// becomes the ordinal sequence.
pub(crate) fn scan(text: &str) -> Vec<RawDirective<'_>> {
    if memmem::find(text.as_bytes(), OPEN_MARKER).is_none() {
        return Vec::new();
    }

    directive_regex()
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("capture 0 is the whole match");
            let tag = caps.get(1).expect("kind group always participates").as_str();
            let kind = ChartKind::from_tag(tag).expect("kind tag restricted by the grammar");
            let body = caps.get(2).map_or("", |m| m.as_str());
            RawDirective { kind, body, span: whole.range() }
        })
        .collect()
}
