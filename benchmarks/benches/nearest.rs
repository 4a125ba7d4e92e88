/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tinct_benches::random_colors;
use tinct_colors::{ColorResolver, PaletteKind, PaletteSet};

fn bench_nearest(c: &mut Criterion) {
    let resolver = ColorResolver::bundled();
    let colors = random_colors(100);

    let mut group = c.benchmark_group("nearest named color");
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("css", |b| {
        let css = PaletteSet::empty().with(PaletteKind::Css);
        b.iter(|| {
            for color in &colors {
                let _ = black_box(resolver.nearest_named_color(*color, css));
            }
        })
    });

    group.bench_function("all palettes", |b| {
        b.iter(|| {
            for color in &colors {
                let _ = black_box(resolver.nearest_named_color(*color, PaletteSet::all()));
            }
        })
    });
    group.finish();
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_nearest);

criterion_main!(benches);
