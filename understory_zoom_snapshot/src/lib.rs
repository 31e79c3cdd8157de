// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_snapshot --heading-base-level=0

//! Understory Zoom Snapshot: render the zoomed viewport into a pixel buffer.
//!
//! [`capture`] allocates a viewport-sized buffer and asks a [`RenderHook`] to
//! draw the content with the current transform. The buffer is allocated
//! fallibly: if a full-fidelity RGBA 8888 buffer cannot be had, the capture
//! retries with RGBA 4444, and only reports [`SnapshotError::OutOfMemory`] if
//! that fails as well. Gesture and transform state are never touched.
//!
//! [`ImageRenderHook`] is a small reference hook that samples an RGBA8 image
//! (nearest neighbour), which is enough for thumbnails and tests. Real hosts
//! usually implement [`RenderHook`] on top of their own renderer.
//!
//! ```rust
//! use kurbo::Size;
//! use understory_zoom::ZoomController;
//! use understory_zoom_snapshot::{
//!     ImageRenderHook, PixelFormat, SnapshotOptions, capture_controller,
//! };
//!
//! // A 2x2 opaque red image.
//! let pixels = [255_u8, 0, 0, 255].repeat(4);
//! let mut hook = ImageRenderHook::new(2, 2, &pixels).unwrap();
//!
//! let mut zoom = ZoomController::default();
//! zoom.set_viewport(Size::new(8.0, 8.0));
//! zoom.set_content(Size::new(2.0, 2.0));
//!
//! let snapshot = capture_controller(&zoom, &mut hook, &SnapshotOptions::default()).unwrap();
//! assert_eq!(snapshot.format(), PixelFormat::Rgba8888);
//! assert_eq!(snapshot.pixel(4, 4), Some([255, 0, 0, 255]));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Point, Size};
use understory_zoom::ZoomController;

/// Pixel layouts a snapshot can be stored in, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8 bits per channel, 4 bytes per pixel.
    Rgba8888,
    /// 4 bits per channel, 2 bytes per pixel (`RRRRGGGG BBBBAAAA`).
    Rgba4444,
}

impl PixelFormat {
    /// Formats tried by [`capture`], in order.
    pub const FALLBACK_ORDER: [Self; 2] = [Self::Rgba8888, Self::Rgba4444];

    /// Returns the storage size of one pixel.
    #[must_use]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgba8888 => 4,
            Self::Rgba4444 => 2,
        }
    }
}

/// Error returned by [`capture`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// The viewport has no pixels.
    EmptyViewport,
    /// No pixel format could be allocated.
    OutOfMemory {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Source pixel data does not match the stated dimensions.
    InvalidSource {
        /// Bytes implied by the dimensions.
        expected: usize,
        /// Bytes provided.
        actual: usize,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyViewport => f.write_str("cannot snapshot an empty viewport"),
            Self::OutOfMemory { width, height } => {
                write!(
                    f,
                    "could not allocate a {width}x{height} snapshot in any pixel format"
                )
            }
            Self::InvalidSource { expected, actual } => {
                write!(f, "source image has {actual} bytes, expected {expected}")
            }
        }
    }
}

impl core::error::Error for SnapshotError {}

/// Limits applied while capturing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SnapshotOptions {
    /// Largest buffer, in bytes, the capture may allocate. Formats that need
    /// more are treated as failed allocations.
    pub max_bytes: Option<usize>,
}

/// A viewport-sized pixel buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("data", &format_args!("[{} bytes]", self.data.len()))
            .finish()
    }
}

impl Snapshot {
    fn try_new(
        width: u32,
        height: u32,
        format: PixelFormat,
        options: &SnapshotOptions,
    ) -> Option<Self> {
        let bytes = usize::try_from(width)
            .ok()?
            .checked_mul(usize::try_from(height).ok()?)?
            .checked_mul(format.bytes_per_pixel())?;
        if options.max_bytes.is_some_and(|max| bytes > max) {
            return None;
        }
        let mut data = Vec::new();
        data.try_reserve_exact(bytes).ok()?;
        data.resize(bytes, 0);
        Some(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Storage format.
    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw pixel bytes, row-major without padding.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = usize::try_from(y).ok()? * usize::try_from(self.width).ok()?
            + usize::try_from(x).ok()?;
        Some(index * self.format.bytes_per_pixel())
    }

    /// Writes an RGBA8 color, quantizing it to the storage format. Pixels
    /// outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let Some(at) = self.offset(x, y) else {
            return;
        };
        match self.format {
            PixelFormat::Rgba8888 => self.data[at..at + 4].copy_from_slice(&rgba),
            PixelFormat::Rgba4444 => {
                let [r, g, b, a] = rgba.map(|c| c >> 4);
                self.data[at] = (r << 4) | g;
                self.data[at + 1] = (b << 4) | a;
            }
        }
    }

    /// Reads a pixel back as RGBA8.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let at = self.offset(x, y)?;
        Some(match self.format {
            PixelFormat::Rgba8888 => [
                self.data[at],
                self.data[at + 1],
                self.data[at + 2],
                self.data[at + 3],
            ],
            PixelFormat::Rgba4444 => {
                let (hi, lo) = (self.data[at], self.data[at + 1]);
                [hi >> 4, hi & 0x0f, lo >> 4, lo & 0x0f].map(|n| n * 17)
            }
        })
    }
}

/// Draws content into a snapshot.
///
/// `transform` maps content coordinates to snapshot pixels; it is the same
/// transform the on-screen renderer uses.
pub trait RenderHook {
    /// Renders into `target`, which starts out fully transparent.
    fn render(&mut self, transform: Affine, target: &mut Snapshot);
}

/// Captures a snapshot of `viewport` by running `hook` with `transform`.
///
/// Tries each of [`PixelFormat::FALLBACK_ORDER`] until a buffer can be
/// allocated.
pub fn capture<R: RenderHook + ?Sized>(
    viewport: Size,
    transform: Affine,
    hook: &mut R,
    options: &SnapshotOptions,
) -> Result<Snapshot, SnapshotError> {
    let (width, height) = pixel_size(viewport).ok_or(SnapshotError::EmptyViewport)?;
    for format in PixelFormat::FALLBACK_ORDER {
        match Snapshot::try_new(width, height, format, options) {
            Some(mut snapshot) => {
                hook.render(transform, &mut snapshot);
                log::debug!("captured {width}x{height} snapshot as {format:?}");
                return Ok(snapshot);
            }
            None => log::warn!("could not allocate {width}x{height} snapshot as {format:?}"),
        }
    }
    Err(SnapshotError::OutOfMemory { width, height })
}

/// Captures the current state of `zoom`.
pub fn capture_controller<R: RenderHook + ?Sized>(
    zoom: &ZoomController,
    hook: &mut R,
    options: &SnapshotOptions,
) -> Result<Snapshot, SnapshotError> {
    capture(zoom.viewport(), zoom.transform(), hook, options)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "checked to be finite, positive and within u32 before casting"
)]
fn pixel_size(viewport: Size) -> Option<(u32, u32)> {
    let to_px = |v: f64| {
        (v.is_finite() && v >= 1.0 && v <= f64::from(u32::MAX)).then(|| v as u32)
    };
    Some((to_px(viewport.width)?, to_px(viewport.height)?))
}

/// Nearest-neighbour sampler over an RGBA8 image.
#[derive(Clone, Copy, Debug)]
pub struct ImageRenderHook<'a> {
    width: u32,
    height: u32,
    pixels: &'a [u8],
}

impl<'a> ImageRenderHook<'a> {
    /// Wraps `pixels`, which must hold `width * height` RGBA8 pixels.
    pub fn new(width: u32, height: u32, pixels: &'a [u8]) -> Result<Self, SnapshotError> {
        let expected =
            usize::try_from(u64::from(width) * u64::from(height) * 4).unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(SnapshotError::InvalidSource {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Returns the intrinsic size to report as content size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "coordinates are checked to lie inside the image before casting"
    )]
    fn sample(&self, p: Point) -> Option<[u8; 4]> {
        if !(p.x >= 0.0 && p.y >= 0.0) {
            return None;
        }
        if p.x >= f64::from(self.width) || p.y >= f64::from(self.height) {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        let at = (y * self.width as usize + x) * 4;
        let px = self.pixels.get(at..at + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl RenderHook for ImageRenderHook<'_> {
    fn render(&mut self, transform: Affine, target: &mut Snapshot) {
        let inverse = transform.inverse();
        for y in 0..target.height() {
            for x in 0..target.width() {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if let Some(rgba) = self.sample(inverse * center) {
                    target.set_pixel(x, y, rgba);
                }
            }
        }
    }
}
