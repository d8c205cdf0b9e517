// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Binding of extracted chart records to placeholder markers.
//!
//! The visualization widgets themselves live outside this crate. A
//! [`ChartMount`] implementation supplies the markup for one directive and
//! [`bind_placeholders`] splices that markup over the marker carrying the
//! matching ordinal.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::ChartDirective;
use crate::shortcode::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};

/// Mounts one directive into markup at render time.
pub trait ChartMount {
    fn mount(&mut self, directive: &ChartDirective) -> String;
}

impl<F> ChartMount for F
where
    F: FnMut(&ChartDirective) -> String,
{
    fn mount(&mut self, directive: &ChartDirective) -> String {
        self(directive)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// A marker's ordinal has no matching record, i.e. the directive list
    /// and the rewritten text come from different parse passes.
    UnboundMarker { marker: String, available: usize },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundMarker { marker, available } => write!(
                f,
                "placeholder marker {marker} has no matching directive (have {available})"
            ),
        }
    }
}

impl std::error::Error for BindError {}

/// Locator for markers the rewriter produced; the pattern is built from the
/// rewriter's own constants.
fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(
            "{}([0-9]+){}",
            regex::escape(PLACEHOLDER_OPEN),
            regex::escape(PLACEHOLDER_CLOSE)
        );
        Regex::new(&pattern).expect("placeholder grammar compiles")
    })
}

/// Replaces each placeholder marker in `rewritten` with the mounted markup
/// of the record carrying the same ordinal. Surrounding text is preserved
/// byte for byte.
pub fn bind_placeholders(
    rewritten: &str,
    directives: &[ChartDirective],
    mount: &mut dyn ChartMount,
) -> Result<String, BindError> {
    let mut out = String::with_capacity(rewritten.len());
    let mut cursor = 0usize;

    for caps in placeholder_regex().captures_iter(rewritten) {
        let whole = caps.get(0).expect("capture 0 is the whole match");
        let ordinal = caps
            .get(1)
            .expect("ordinal group always participates")
            .as_str()
            .parse::<usize>()
            .ok()
            .filter(|ordinal| *ordinal < directives.len());
        let Some(ordinal) = ordinal else {
            return Err(BindError::UnboundMarker {
                marker: whole.as_str().to_owned(),
                available: directives.len(),
            });
        };

        out.push_str(&rewritten[cursor..whole.start()]);
        out.push_str(&mount.mount(&directives[ordinal]));
        cursor = whole.end();
    }

    out.push_str(&rewritten[cursor..]);
    Ok(out)
}
