// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Florin-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Florin and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use florin::shortcode::{extract, rewrite};

mod fixtures;

use fixtures::Case;

// Benchmark identity (keep stable):
// - Group names in this file: `shortcode.extract`, `shortcode.rewrite`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (`small`, `medium_mixed`,
//   `large_long_tail`).
fn benches_shortcode(c: &mut Criterion) {
    let cases = [Case::Small, Case::MediumMixed, Case::LargeLongTail];

    {
        let mut group = c.benchmark_group("shortcode.extract");
        for case in cases {
            let text = fixtures::fixture(case);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_function(case.id(), |b| {
                b.iter(|| black_box(extract(black_box(&text))).len())
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("shortcode.rewrite");
        for case in cases {
            let text = fixtures::fixture(case);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_function(case.id(), |b| {
                b.iter(|| black_box(rewrite(black_box(&text))).len())
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benches_shortcode);
criterion_main!(benches);
