// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_zoom::{ScaleGesture, ZoomController};
use understory_zoom_snapshot::{ImageRenderHook, SnapshotOptions, capture_controller};

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_zoom_snapshot");
    group.sample_size(20);

    let (w, h) = (512_u32, 384_u32);
    let pixels: Vec<u8> = (0..w * h)
        .flat_map(|i| {
            let [a, b, ..] = i.to_le_bytes();
            [a, b, a ^ b, 0xff]
        })
        .collect();

    let mut zoom = ZoomController::default();
    zoom.set_viewport(Size::new(320.0, 480.0));
    zoom.set_content(Size::new(f64::from(w), f64::from(h)));
    zoom.on_scale(ScaleGesture::new(3.0, (160.0, 240.0)));

    for (name, options) in [
        ("rgba8888", SnapshotOptions::default()),
        (
            "rgba4444",
            SnapshotOptions {
                max_bytes: Some(320 * 480 * 2),
            },
        ),
    ] {
        group.bench_function(format!("capture_{name}(320x480)"), |b| {
            let mut hook = ImageRenderHook::new(w, h, &pixels).expect("source matches dimensions");
            b.iter(|| black_box(capture_controller(&zoom, &mut hook, &options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_snapshot);
criterion_main!(benches);
