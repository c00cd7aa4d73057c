use crate::emblem;
use crate::font::LabelFont;
use crate::manifest;
use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The two manifest icon sizes.
pub const ICON_SIZES: [u32; 2] = [192, 512];

#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub label: String,
    pub font: Option<PathBuf>,
    pub manifest: bool,
}

pub fn generate_icons(args: Args) -> Result<()> {
    println!("Generating manifest icons...");

    // Font resolution is best-effort and never fails the run
    let font = LabelFont::resolve(args.font.as_deref());

    std::fs::create_dir_all(&args.output).context("Can't create output directory")?;

    for size in ICON_SIZES {
        let icon = emblem::render(size, &args.label, &font);
        let path = args.output.join(format!("icon-{size}.png"));
        save_png(&icon, &path).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("  ✓ Generated icon-{size}.png");
    }

    if args.manifest {
        manifest::write_manifest(&args.output, &ICON_SIZES)?;
    }

    println!("Icons generated successfully!");
    Ok(())
}

// Encode with PNG compression, overwriting any existing file
fn save_png(icon: &RgbaImage, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    let encoder =
        PngEncoder::new_with_quality(&mut out, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(icon.as_raw(), icon.width(), icon.height(), ColorType::Rgba8)?;
    out.flush()?;
    Ok(())
}
