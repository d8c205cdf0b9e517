// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::model::{ChartData, ChartDirective, ChartKind, ChartSeries};

/// Display height applied when `height` is absent, unparsable, or zero.
pub const DEFAULT_HEIGHT: u32 = 300;

/// Currency symbol applied when `currency` is absent.
pub const DEFAULT_CURRENCY: &str = "€";

/// Series label applied when the single-series fallback has no `title`.
pub const DEFAULT_SERIES_LABEL: &str = "Series";

/// Fallback values the attribute parser fills in for absent or malformed
/// attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveDefaults {
    pub height: u32,
    pub currency: SmolStr,
    pub series_label: SmolStr,
}

impl Default for DirectiveDefaults {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            currency: SmolStr::new_static(DEFAULT_CURRENCY),
            series_label: SmolStr::new_static(DEFAULT_SERIES_LABEL),
        }
    }
}

/// Expected shape of one `datasets` entry. Anything the typed decode
/// rejects takes the same fallback path as undecodable JSON.
#[derive(Debug, Clone, Deserialize)]
struct DatasetSpec {
    label: String,
    data: Vec<f64>,
}

fn attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([A-Za-z_][A-Za-z0-9_]*)=(?:"([^"]*)"|'([^']*)')"#)
            .expect("attribute grammar compiles")
    })
}

/// Attribute pairs of one directive body, in source order.
fn collect_attrs(body: &str) -> SmallVec<[(&str, &str); 8]> {
    attr_regex()
        .captures_iter(body)
        .map(|caps| {
            let key = caps.get(1).expect("key group always participates").as_str();
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            (key, value)
        })
        .collect()
}

fn split_list(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|piece| piece.trim().to_owned()).collect()
}

/// Lenient numeric list: an unparsable piece becomes a NaN sentinel in
/// place, never a rejection.
fn split_numbers(raw: &str) -> Vec<f64> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|piece| piece.trim().parse::<f64>().unwrap_or(f64::NAN)).collect()
}

fn decode_datasets(raw: &str) -> Option<Vec<ChartSeries>> {
    let specs: Vec<DatasetSpec> = serde_json::from_str(raw).ok()?;
    Some(specs.into_iter().map(|spec| ChartSeries::new(spec.label, spec.data)).collect())
}

/// Decodes one attribute body into a directive record.
///
/// Attributes are order-independent `name="value"` / `name='value'` pairs;
/// unknown keys are ignored and duplicate keys resolve to the last
/// occurrence. Malformed values degrade to `defaults`; this function never
/// fails.
pub(crate) fn parse_directive(
    kind: ChartKind,
    body: &str,
    ordinal: usize,
    defaults: &DirectiveDefaults,
) -> ChartDirective {
    let mut title: Option<&str> = None;
    let mut labels: Option<&str> = None;
    let mut data: Option<&str> = None;
    let mut datasets: Option<&str> = None;
    let mut height: Option<&str> = None;
    let mut currency: Option<&str> = None;

    for (key, value) in collect_attrs(body) {
        match key {
            "title" => title = Some(value),
            "labels" => labels = Some(value),
            "data" => data = Some(value),
            "datasets" => datasets = Some(value),
            "height" => height = Some(value),
            "currency" => currency = Some(value),
            _ => {}
        }
    }

    let categories = labels.map(split_list).unwrap_or_default();
    let values = split_numbers(data.unwrap_or(""));

    let chart_data = match kind {
        ChartKind::Pie => ChartData::Values(values),
        ChartKind::Line | ChartKind::Bar => {
            let series = datasets.and_then(decode_datasets).unwrap_or_else(|| {
                let label = title.unwrap_or_else(|| defaults.series_label.as_str());
                vec![ChartSeries::new(label, values)]
            });
            ChartData::Series(series)
        }
    };

    let height = height
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|parsed| *parsed > 0)
        .unwrap_or(defaults.height);

    let currency = currency.map(SmolStr::new).unwrap_or_else(|| defaults.currency.clone());

    ChartDirective::new(
        kind,
        ordinal,
        title.map(str::to_owned),
        categories,
        chart_data,
        height,
        currency,
    )
}
