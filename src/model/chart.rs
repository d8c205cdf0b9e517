// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

/// Closed set of chart kinds a directive may declare.
///
/// The scanner's grammar only admits these tags, so a kind outside the set
/// is unrepresentable past the scanning stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "line" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            "pie" => Some(Self::Pie),
            _ => None,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named sequence of values, positionally aligned with the directive's
/// categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    label: String,
    values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self { label: label.into(), values }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Numeric payload of a directive.
///
/// Line and bar charts carry named series; pie charts carry a single
/// unnamed sequence aligned with the wedge labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartData {
    Series(Vec<ChartSeries>),
    Values(Vec<f64>),
}

impl ChartData {
    pub fn as_series(&self) -> Option<&[ChartSeries]> {
        match self {
            Self::Series(series) => Some(series),
            Self::Values(_) => None,
        }
    }

    pub fn as_values(&self) -> Option<&[f64]> {
        match self {
            Self::Series(_) => None,
            Self::Values(values) => Some(values),
        }
    }
}

/// A chart description extracted from one shortcode directive.
///
/// Fully derived from its source text and never mutated afterwards; it only
/// lives for the duration of one extract/render cycle. `ordinal` is the
/// zero-based document-order position that ties the record to its
/// placeholder marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDirective {
    kind: ChartKind,
    ordinal: usize,
    title: Option<String>,
    categories: Vec<String>,
    data: ChartData,
    height: u32,
    currency: SmolStr,
}

impl ChartDirective {
    pub fn new(
        kind: ChartKind,
        ordinal: usize,
        title: Option<String>,
        categories: Vec<String>,
        data: ChartData,
        height: u32,
        currency: SmolStr,
    ) -> Self {
        Self { kind, ordinal, title, categories, data, height, currency }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn data(&self) -> &ChartData {
        &self.data
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

/// Pairs categories with values positionally.
///
/// Mismatched lengths truncate to the shorter side; lenient number parsing
/// leaves NaN sentinels in `values`, and those are yielded unchanged, so
/// renderers are expected to skip non-finite entries.
pub fn aligned_pairs<'a>(
    categories: &'a [String],
    values: &'a [f64],
) -> impl Iterator<Item = (&'a str, f64)> + 'a {
    categories.iter().map(String::as_str).zip(values.iter().copied())
}
