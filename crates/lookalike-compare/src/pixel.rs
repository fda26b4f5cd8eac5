//! Pixel-by-pixel comparator
//!
//! Honours `strict`, `tolerance` and `highlightColor`. The caret,
//! anti-aliasing and pixel-ratio fields are accepted but do not change the
//! verdict: captures are compared at their stored resolution and every pixel
//! counts. Images with different dimensions never match.

#![allow(clippy::result_large_err)]

use crate::color::pixel_delta_e;
use image::{DynamicImage, GenericImageView, ImageFormat, Rgba, RgbaImage};
use lookalike_core::errors::{LkError, LkErrorKind, SnapshotError};
use lookalike_core::options::{defaults, parse_hex_color};
use lookalike_core::{DiffPolicy, DiffRequest, ImageComparator};
use std::path::Path;

/// Reference-image comparator built on the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelComparator;

impl PixelComparator {
    pub fn new() -> Self {
        Self
    }

    fn open(path: &Path) -> Result<DynamicImage, LkError> {
        image::open(path).map_err(|e| {
            LkError::from(SnapshotError::Image {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
            .with_op("decode_image")
        })
    }
}

/// Whether two pixels differ under `policy`
fn pixels_differ(a: Rgba<u8>, b: Rgba<u8>, policy: &DiffPolicy) -> bool {
    if policy.strict {
        a != b
    } else {
        pixel_delta_e(a, b) > policy.effective_tolerance()
    }
}

fn highlight(policy: &DiffPolicy) -> Rgba<u8> {
    let [r, g, b] = parse_hex_color(&policy.highlight_color)
        .or_else(|| parse_hex_color(defaults::HIGHLIGHT_COLOR))
        .unwrap_or([255, 0, 255]);
    Rgba([r, g, b, 255])
}

/// Faded grey copy of a reference pixel, used as context around highlights
fn faded(pixel: Rgba<u8>) -> Rgba<u8> {
    let luma = (u32::from(pixel[0]) * 299 + u32::from(pixel[1]) * 587 + u32::from(pixel[2]) * 114)
        / 1000;
    let v = (255 - (255 - luma) / 4) as u8;
    Rgba([v, v, v, 255])
}

/// Count differing pixels; out-of-bounds pixels on either side count as different
pub fn count_differences(reference: &DynamicImage, current: &DynamicImage, policy: &DiffPolicy) -> u64 {
    let (rw, rh) = reference.dimensions();
    let (cw, ch) = current.dimensions();
    let (w, h) = (rw.max(cw), rh.max(ch));

    let mut count = 0;
    for y in 0..h {
        for x in 0..w {
            let differs = if x < rw && y < rh && x < cw && y < ch {
                pixels_differ(reference.get_pixel(x, y), current.get_pixel(x, y), policy)
            } else {
                true
            };
            if differs {
                count += 1;
            }
        }
    }
    count
}

/// Draw the diff canvas: the union of both sizes, differing pixels in the
/// highlight colour, matching pixels as a faded copy of the reference
pub fn draw_diff(reference: &DynamicImage, current: &DynamicImage, policy: &DiffPolicy) -> RgbaImage {
    let (rw, rh) = reference.dimensions();
    let (cw, ch) = current.dimensions();
    let (w, h) = (rw.max(cw), rh.max(ch));
    let mark = highlight(policy);

    RgbaImage::from_fn(w, h, |x, y| {
        let in_ref = x < rw && y < rh;
        let in_cur = x < cw && y < ch;
        match (in_ref, in_cur) {
            (true, true) => {
                let a = reference.get_pixel(x, y);
                let b = current.get_pixel(x, y);
                if pixels_differ(a, b, policy) {
                    mark
                } else {
                    faded(a)
                }
            }
            _ => mark,
        }
    })
}

impl ImageComparator for PixelComparator {
    fn images_equal(
        &self,
        reference: &Path,
        current: &Path,
        policy: &DiffPolicy,
    ) -> Result<bool, LkError> {
        let reference_img = Self::open(reference)?;
        let current_img = Self::open(current)?;

        if reference_img.dimensions() != current_img.dimensions() {
            tracing::debug!(
                reference = ?reference_img.dimensions(),
                current = ?current_img.dimensions(),
                "dimension mismatch"
            );
            return Ok(false);
        }

        let differing = count_differences(&reference_img, &current_img, policy);
        tracing::debug!(
            differing_pixels = differing,
            tolerance = policy.effective_tolerance(),
            strict = policy.strict,
            "pixel comparison finished"
        );
        Ok(differing == 0)
    }

    fn render_diff(&self, request: &DiffRequest<'_>) -> Result<(), LkError> {
        let reference_img = Self::open(request.reference)?;
        let current_img = Self::open(request.current)?;

        let canvas = draw_diff(&reference_img, &current_img, request.policy);
        canvas
            .save_with_format(request.diff, ImageFormat::Png)
            .map_err(|e| {
                let kind = match &e {
                    image::ImageError::IoError(_) => LkErrorKind::Io,
                    _ => LkErrorKind::Comparison,
                };
                LkError::new(kind)
                    .with_op("render_diff")
                    .with_path(request.diff)
                    .with_message(e.to_string())
            })
    }
}
