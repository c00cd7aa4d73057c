//! Procedural rendering of the scales-of-justice emblem.
//!
//! All geometry is derived from the requested pixel size with integer
//! arithmetic, so the 192px and 512px renditions are self-similar.

use crate::font::LabelFont;
use image::{Rgba, RgbaImage};

/// Brand green `#22c55e`, used for the background and every foreground stroke.
pub const BRAND_GREEN: Rgba<u8> = Rgba([0x22, 0xc5, 0x5e, 0xff]);

/// White `#ffffff` fill of the circular badge.
pub const BADGE_WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Stroke width used for the post, beam and pan outlines at a given size.
pub fn stroke_width(size: u32) -> u32 {
    (size / 50).max(2)
}

/// Render the emblem at `size`×`size` pixels with `label` drawn beneath it.
pub fn render(size: u32, label: &str, font: &LabelFont) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, BRAND_GREEN);

    // White circular badge, inset by size/8 on all sides
    let margin = size / 8;
    let center = size as f32 / 2.0;
    let badge_radius = (size - 2 * margin) as f32 / 2.0;
    fill_circle(&mut img, center, center, badge_radius, BADGE_WHITE);

    let cx = (size / 2) as i64;
    let cy = (size / 2) as i64;
    let stroke = stroke_width(size);
    let arm = (size / 4) as i64;

    // Vertical post of the scales
    fill_rect(
        &mut img,
        cx - (stroke as i64) / 2,
        cy - arm,
        stroke,
        (2 * arm) as u32,
        BRAND_GREEN,
    );

    // Horizontal balance beam
    let reach = (size / 3) as i64;
    fill_rect(
        &mut img,
        cx - reach,
        cy - arm - (stroke as i64) / 2,
        (2 * reach) as u32,
        stroke,
        BRAND_GREEN,
    );

    // Pan outlines hanging at each end of the beam
    let pan_radius = (size / 16) as f32;
    let beam_y = (cy - arm) as f32;
    stroke_circle(&mut img, (cx - reach) as f32, beam_y, pan_radius, stroke, BRAND_GREEN);
    stroke_circle(&mut img, (cx + reach) as f32, beam_y, pan_radius, stroke, BRAND_GREEN);

    // Label beneath the emblem
    let label_height = size / 6;
    font.draw_text(&mut img, label, label_height, cx, cy + (size / 6) as i64, BRAND_GREEN);

    img
}

/// Fill an axis-aligned rectangle, clipped to the image bounds.
pub(crate) fn fill_rect(img: &mut RgbaImage, x: i64, y: i64, w: u32, h: u32, color: Rgba<u8>) {
    for dy in 0..h as i64 {
        for dx in 0..w as i64 {
            let px = x + dx;
            let py = y + dy;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    for y in 0..img.height() {
        for x in 0..img.width() {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance <= radius - 1.0 {
                img.put_pixel(x, y, color);
            } else if distance <= radius {
                // Anti-aliasing at the rim
                blend_pixel(img, x as i64, y as i64, color, radius - distance);
            }
        }
    }
}

/// Stroke a circle outline of the given centerline radius and stroke width.
fn stroke_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, width: u32, color: Rgba<u8>) {
    let half = width as f32 / 2.0;
    let outer = radius + half;
    let inner = radius - half;

    let x0 = ((cx - outer).floor() as i64).max(0);
    let y0 = ((cy - outer).floor() as i64).max(0);
    let x1 = ((cx + outer).ceil() as i64).min(img.width() as i64 - 1);
    let y1 = ((cy + outer).ceil() as i64).min(img.height() as i64 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance >= inner && distance <= outer {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Mix `color` into the pixel at (x, y) with the given coverage in [0, 1].
pub(crate) fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let t = coverage.clamp(0.0, 1.0);
    let under = *img.get_pixel(x as u32, y as u32);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    let blended = Rgba([
        mix(under[0], color[0]),
        mix(under[1], color[1]),
        mix(under[2], color[2]),
        255,
    ]);
    img.put_pixel(x as u32, y as u32, blended);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_matches_requested_dimensions() {
        for size in [64, 192, 512] {
            let img = render(size, "MX", &LabelFont::Builtin);
            assert_eq!(img.width(), size);
            assert_eq!(img.height(), size);
        }
    }

    #[test]
    fn stroke_width_scales_with_size() {
        assert_eq!(stroke_width(192), 3);
        assert_eq!(stroke_width(512), 10);
        // floor of 2 for small sizes
        assert_eq!(stroke_width(64), 2);
        assert_eq!(stroke_width(16), 2);
    }

    #[test]
    fn corners_are_brand_green() {
        let img = render(192, "MX", &LabelFont::Builtin);
        assert_eq!(*img.get_pixel(0, 0), BRAND_GREEN);
        assert_eq!(*img.get_pixel(191, 0), BRAND_GREEN);
        assert_eq!(*img.get_pixel(0, 191), BRAND_GREEN);
        assert_eq!(*img.get_pixel(191, 191), BRAND_GREEN);
    }

    #[test]
    fn badge_interior_is_white() {
        // A point inside the badge, clear of the post, beam, pans and label.
        let img = render(192, "MX", &LabelFont::Builtin);
        assert_eq!(*img.get_pixel(96 + 24, 96), BADGE_WHITE);

        let img = render(512, "MX", &LabelFont::Builtin);
        assert_eq!(*img.get_pixel(256 + 64, 256), BADGE_WHITE);
    }

    #[test]
    fn post_and_beam_are_brand_green() {
        let img = render(512, "MX", &LabelFont::Builtin);
        // post runs from (256, 128) down to (256, 384)
        assert_eq!(*img.get_pixel(256, 300), BRAND_GREEN);
        assert_eq!(*img.get_pixel(256, 150), BRAND_GREEN);
        // beam sits at y = 128 and spans 256 ± 170
        assert_eq!(*img.get_pixel(200, 128), BRAND_GREEN);
        assert_eq!(*img.get_pixel(350, 128), BRAND_GREEN);
    }

    #[test]
    fn stroke_circle_leaves_interior_untouched() {
        let mut img = RgbaImage::from_pixel(100, 100, BADGE_WHITE);
        stroke_circle(&mut img, 50.0, 50.0, 20.0, 4, BRAND_GREEN);

        // on the ring
        assert_eq!(*img.get_pixel(50, 30), BRAND_GREEN);
        assert_eq!(*img.get_pixel(30, 50), BRAND_GREEN);
        // interior and exterior stay white
        assert_eq!(*img.get_pixel(50, 50), BADGE_WHITE);
        assert_eq!(*img.get_pixel(50, 5), BADGE_WHITE);
    }

    #[test]
    fn stroke_circle_clips_at_image_edge() {
        let mut img = RgbaImage::from_pixel(32, 32, BADGE_WHITE);
        // circle centered outside the canvas
        stroke_circle(&mut img, 0.0, 0.0, 20.0, 4, BRAND_GREEN);
        assert_eq!(img.width(), 32);
        assert_eq!(img.height(), 32);
    }

    #[test]
    fn fill_rect_clips_negative_origin() {
        let mut img = RgbaImage::from_pixel(16, 16, BADGE_WHITE);
        fill_rect(&mut img, -4, -4, 8, 8, BRAND_GREEN);
        assert_eq!(*img.get_pixel(0, 0), BRAND_GREEN);
        assert_eq!(*img.get_pixel(3, 3), BRAND_GREEN);
        assert_eq!(*img.get_pixel(4, 4), BADGE_WHITE);
    }

    #[test]
    fn label_pixels_are_brand_green() {
        // Builtin face: "MX" at size 192 starts at x = 74, y = 128 and the
        // first column of 'M' is fully set.
        let img = render(192, "MX", &LabelFont::Builtin);
        assert_eq!(*img.get_pixel(74, 130), BRAND_GREEN);
    }
}
