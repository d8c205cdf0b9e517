// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumMixed,
    LargeLongTail,
}

impl Case {
    pub fn id(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumMixed => "medium_mixed",
            Self::LargeLongTail => "large_long_tail",
        }
    }
}

pub fn fixture(case: Case) -> String {
    match case {
        Case::Small => article(3, 4),
        Case::MediumMixed => article(20, 40),
        Case::LargeLongTail => article(120, 400),
    }
}

const FILLER: &str = "Il fondo di emergenza copre dai tre ai sei mesi di spese correnti. \
Before touching long-term investments, settle high-interest debt first; the guaranteed \
return of an extinguished liability beats most market years.";

/// Builds a synthetic article with `directives` chart shortcodes spread
/// between `filler` prose paragraphs. Deterministic: content depends only
/// on the counters.
pub fn article(directives: usize, filler: usize) -> String {
    let mut out = String::new();
    let paragraphs_per_chart = (filler / directives.max(1)).max(1);

    for index in 0..directives {
        for _ in 0..paragraphs_per_chart {
            out.push_str(FILLER);
            out.push_str("\n\n");
        }
        out.push_str(&directive(index));
        out.push_str("\n\n");
    }
    for _ in 0..filler % directives.max(1) {
        out.push_str(FILLER);
        out.push_str("\n\n");
    }

    out
}

fn directive(index: usize) -> String {
    match index % 3 {
        0 => format!(
            "[chart:pie title=\"Allocation {index}\" labels=\"Stocks,Bonds,Cash\" data=\"{},{},10\" /]",
            50 + index % 20,
            40 - index % 20
        ),
        1 => format!(
            "[chart:line title=\"Trend {index}\" labels=\"Q1,Q2,Q3,Q4\" datasets='[{{\"label\":\"Net {index}\",\"data\":[{},{},{},{}]}}]' height=\"260\" /]",
            index,
            index + 2,
            index + 1,
            index + 4
        ),
        _ => format!(
            "[chart:bar title=\"Spese {index}\" labels=\"Gen,Feb,Mar\" data=\"{},{},{}\" currency=\"€\" /]",
            100 + index,
            90 + index,
            110 + index
        ),
    }
}
