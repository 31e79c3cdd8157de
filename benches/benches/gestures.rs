// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_zoom::{PointerEvent, ScaleGesture, Standalone, ZoomController};

fn fitted(viewport: Size, content: Size) -> ZoomController {
    let mut zoom = ZoomController::default();
    zoom.set_double_tap_enabled(true);
    zoom.set_viewport(viewport);
    zoom.set_content(content);
    zoom
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_zoom");
    let viewport = Size::new(1080.0, 1920.0);
    let content = Size::new(4000.0, 3000.0);

    group.bench_function("fit", |b| {
        b.iter(|| black_box(fitted(black_box(viewport), black_box(content))));
    });

    group.bench_function("pinch_in_out(64)", |b| {
        b.iter_batched(
            || fitted(viewport, content),
            |mut zoom| {
                for i in 0..64 {
                    let factor = if i < 32 { 1.05 } else { 0.95 };
                    zoom.on_scale(ScaleGesture::new(factor, (300.0 + f64::from(i), 900.0)));
                }
                black_box(zoom.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("zoomed_drag(128)", |b| {
        b.iter_batched(
            || {
                let mut zoom = fitted(viewport, content);
                zoom.on_scale(ScaleGesture::new(8.0, (540.0, 960.0)));
                zoom
            },
            |mut zoom| {
                let mut host = Standalone;
                zoom.on_pointer_event(PointerEvent::down(0, (540.0, 960.0)), &mut host);
                for i in 1..=128 {
                    let step = f64::from(i) * 7.0;
                    let p = Point::new(540.0 - step, 960.0 + step * 0.5);
                    zoom.on_pointer_event(PointerEvent::moved(0, p), &mut host);
                }
                let event = zoom.on_pointer_event(PointerEvent::up(0, (0.0, 0.0)), &mut host);
                black_box(event);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("double_tap_animation", |b| {
        b.iter_batched(
            || fitted(viewport, content),
            |mut zoom| {
                zoom.on_double_tap(Point::new(200.0, 700.0));
                let mut frames = 0_u32;
                while zoom.tick() {
                    frames += 1;
                }
                black_box(frames);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
