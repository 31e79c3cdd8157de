// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a zoom controller through a scripted touch session inside a
//! horizontal pager, printing what the host would see.
//!
//! Run with `RUST_LOG=trace` to see per-frame controller logging.

use std::cell::RefCell;
use std::error::Error;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Point, Size};
use understory_zoom::{
    HostContainer, NavigationEvent, PointerEvent, ScaleGesture, ZoomConfig, ZoomController,
};
use understory_zoom_snapshot::{ImageRenderHook, SnapshotOptions, capture_controller};

/// A pager that records how often a page asked it to keep its hands off.
#[derive(Debug, Default)]
struct Pager {
    claims: u32,
}

impl HostContainer for Pager {
    fn is_horizontal_pager(&self) -> bool {
        true
    }

    fn disallow_intercept(&mut self) {
        self.claims += 1;
    }
}

fn checkerboard(width: u32, height: u32, cell: u32) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let rgba: [u8; 4] = if ((x / cell) + (y / cell)) % 2 == 0 {
                [240, 240, 240, 255]
            } else {
                [30, 30, 30, 255]
            };
            pixels.extend_from_slice(&rgba);
        }
    }
    pixels
}

fn report(label: &str, zoom: &ZoomController) {
    let info = zoom.debug_info();
    println!(
        "{label:<24} scale={:.3} zoomed={} rect={:?}",
        info.scale,
        zoom.is_zoomed(),
        zoom.mapped_content_rect(),
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (width, height) = (200_u32, 100_u32);
    let pixels = checkerboard(width, height, 10);
    let mut hook = ImageRenderHook::new(width, height, &pixels)?;

    let events = Rc::new(RefCell::new(Vec::<NavigationEvent>::new()));
    let config = ZoomConfig::default().with_frame_interval(Duration::from_millis(16));
    let mut zoom = ZoomController::new(config);
    zoom.set_double_tap_enabled(true);
    {
        let events = Rc::clone(&events);
        zoom.set_navigation_handler(move |event| events.borrow_mut().push(event));
    }

    // Content may arrive before layout.
    zoom.set_content(hook.size());
    zoom.set_viewport(Size::new(360.0, 640.0));
    report("fitted", &zoom);

    let mut pager = Pager::default();
    log::info!("scripted session on a {width}x{height} image");

    // A tap and a swipe while fitted.
    zoom.on_pointer_event(PointerEvent::down(0, (180.0, 320.0)), &mut pager);
    zoom.on_pointer_event(PointerEvent::up(0, (182.0, 321.0)), &mut pager);
    zoom.on_pointer_event(PointerEvent::down(0, (180.0, 100.0)), &mut pager);
    zoom.on_pointer_event(PointerEvent::moved(0, (180.0, 300.0)), &mut pager);
    zoom.on_pointer_event(PointerEvent::up(0, (180.0, 400.0)), &mut pager);

    // Pinch in, then drag the zoomed content around.
    zoom.on_scale_begin();
    for _ in 0..10 {
        zoom.on_scale(ScaleGesture::new(1.2, (120.0, 320.0)));
    }
    zoom.on_scale_end();
    report("pinched", &zoom);

    zoom.on_pointer_event(PointerEvent::down(0, (180.0, 320.0)), &mut pager);
    for step in 1..=20 {
        let p = Point::new(180.0 + f64::from(step) * 15.0, 320.0);
        zoom.on_pointer_event(PointerEvent::moved(0, p), &mut pager);
    }
    zoom.on_pointer_event(PointerEvent::up(0, (480.0, 320.0)), &mut pager);
    report("dragged", &zoom);

    // Double tap back to the fitted scale, ticking like a 16 ms timer would.
    zoom.on_double_tap(Point::new(180.0, 320.0));
    let mut frames = 0;
    while zoom.tick() {
        frames += 1;
    }
    report("double tapped", &zoom);

    let snapshot = capture_controller(&zoom, &mut hook, &SnapshotOptions::default())?;
    println!(
        "snapshot {}x{} {:?} ({} bytes) after {frames} frames",
        snapshot.width(),
        snapshot.height(),
        snapshot.format(),
        snapshot.data().len(),
    );
    println!("pager claims: {}", pager.claims);
    println!("navigation: {:?}", events.borrow());
    Ok(())
}
