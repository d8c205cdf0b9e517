// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Florin — chart shortcode engine for bilingual finance content.
//!
//! Raw article text goes in; an ordered list of [`model::ChartDirective`]
//! records and a placeholder-rewritten copy of the text come out. The
//! rendering layer binds `directives[i]` to the marker tagged `i`.

pub mod model;
pub mod render;
pub mod shortcode;
pub mod throttle;
