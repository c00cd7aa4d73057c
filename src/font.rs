//! Label font resolution and rasterization.
//!
//! Resolution is best-effort: a preferred TrueType file is tried first, then
//! a list of well-known system font locations, and finally a built-in bitmap
//! face. The chain always produces a usable face, so rendering a label can
//! never fail on a machine without fonts.

use crate::emblem::{blend_pixel, fill_rect};
use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};
use std::fs;
use std::path::{Path, PathBuf};

/// System font files probed when no usable preferred font is given.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub enum LabelFont {
    Truetype(Font<'static>),
    Builtin,
}

impl LabelFont {
    /// Resolve the best available face. Never fails: unreadable or
    /// unparseable candidates are skipped silently and the built-in face is
    /// the final fallback.
    pub fn resolve(preferred: Option<&Path>) -> LabelFont {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));

        for path in candidates {
            if let Some(font) = load_truetype(&path) {
                return LabelFont::Truetype(font);
            }
        }

        LabelFont::Builtin
    }

    /// Draw `text` with its top edge at `top`, horizontally centered on `cx`.
    pub fn draw_text(
        &self,
        img: &mut RgbaImage,
        text: &str,
        height_px: u32,
        cx: i64,
        top: i64,
        color: Rgba<u8>,
    ) {
        match self {
            LabelFont::Truetype(font) => draw_truetype(font, img, text, height_px, cx, top, color),
            LabelFont::Builtin => draw_builtin(img, text, height_px, cx, top, color),
        }
    }
}

fn load_truetype(path: &Path) -> Option<Font<'static>> {
    let data = fs::read(path).ok()?;
    Font::try_from_vec(data)
}

fn draw_truetype(
    font: &Font<'static>,
    img: &mut RgbaImage,
    text: &str,
    height_px: u32,
    cx: i64,
    top: i64,
    color: Rgba<u8>,
) {
    let scale = Scale::uniform(height_px as f32);
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<_> = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .collect();

    let width = glyphs
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0);
    let origin_x = cx - (width / 2.0).round() as i64;

    for glyph in &glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let x = origin_x + bb.min.x as i64 + gx as i64;
                let y = top + bb.min.y as i64 + gy as i64;
                blend_pixel(img, x, y, color, coverage);
            });
        }
    }
}

const GLYPH_W: u32 = 5;
const GLYPH_H: u32 = 7;

fn draw_builtin(
    img: &mut RgbaImage,
    text: &str,
    height_px: u32,
    cx: i64,
    top: i64,
    color: Rgba<u8>,
) {
    let scale = (height_px / GLYPH_H).max(1) as i64;
    let advance = (GLYPH_W as i64 + 1) * scale;

    let chars: Vec<char> = text.chars().map(|c| c.to_ascii_uppercase()).collect();
    if chars.is_empty() {
        return;
    }

    let width = advance * chars.len() as i64 - scale;
    let mut pen_x = cx - width / 2;

    for c in chars {
        if let Some(rows) = glyph_rows(c) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                        fill_rect(
                            img,
                            pen_x + col as i64 * scale,
                            top + row as i64 * scale,
                            scale as u32,
                            scale as u32,
                            color,
                        );
                    }
                }
            }
        }
        pen_x += advance;
    }
}

/// 5×7 row patterns for the built-in face. Unsupported characters render as
/// a blank advance.
fn glyph_rows(c: char) -> Option<&'static [u8; 7]> {
    match c {
        'A' => Some(&[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'B' => Some(&[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'C' => Some(&[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'D' => Some(&[0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
        'E' => Some(&[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'F' => Some(&[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
        'G' => Some(&[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
        'H' => Some(&[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'I' => Some(&[0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'J' => Some(&[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
        'K' => Some(&[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
        'L' => Some(&[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => Some(&[0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => Some(&[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
        'O' => Some(&[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => Some(&[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'Q' => Some(&[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
        'R' => Some(&[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => Some(&[0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => Some(&[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => Some(&[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'V' => Some(&[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'W' => Some(&[0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001]),
        'X' => Some(&[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
        'Y' => Some(&[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]),
        'Z' => Some(&[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
        '0' => Some(&[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => Some(&[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        '2' => Some(&[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111]),
        '3' => Some(&[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        '4' => Some(&[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => Some(&[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => Some(&[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => Some(&[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => Some(&[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => Some(&[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
        _ => None,
    }
}
