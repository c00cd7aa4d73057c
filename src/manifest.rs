//! Web app manifest fragment describing the generated icon set.
//!
//! Mirrors the `icons` member of the W3C Web Application Manifest; the file
//! is written next to the icons so it can be served or merged as-is.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize, Debug, Clone)]
pub struct ManifestIcons {
    pub icons: Vec<IconEntry>,
}

/// One entry of the manifest `icons` array.
#[derive(Serialize, Debug, Clone)]
pub struct IconEntry {
    /// Path the icon is served from, relative to the site root.
    pub src: String,

    /// Space-separated sizes string, e.g. "192x192".
    pub sizes: String,

    /// MIME type of the icon file.
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl IconEntry {
    pub fn png(size: u32) -> Self {
        IconEntry {
            src: format!("/icon-{size}.png"),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".to_string(),
        }
    }
}

/// Write `manifest.webmanifest` into `out_dir` for the given icon sizes.
pub fn write_manifest(out_dir: &Path, sizes: &[u32]) -> Result<()> {
    let manifest = ManifestIcons {
        icons: sizes.iter().map(|&size| IconEntry::png(size)).collect(),
    };

    let json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;

    let path = out_dir.join("manifest.webmanifest");
    std::fs::write(&path, json).context("Failed to write manifest.webmanifest")?;

    println!("  ✓ Generated manifest.webmanifest");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_entry_fields_follow_size() {
        let entry = IconEntry::png(192);
        assert_eq!(entry.src, "/icon-192.png");
        assert_eq!(entry.sizes, "192x192");
        assert_eq!(entry.mime_type, "image/png");
    }

    #[test]
    fn manifest_serializes_type_field_name() {
        let manifest = ManifestIcons {
            icons: vec![IconEntry::png(512)],
        };
        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains(r#""type":"image/png""#));
        assert!(json.contains(r#""sizes":"512x512""#));
    }
}
