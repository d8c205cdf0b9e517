// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model for extracted chart directives.

pub mod chart;

pub use chart::{aligned_pairs, ChartData, ChartDirective, ChartKind, ChartSeries};
