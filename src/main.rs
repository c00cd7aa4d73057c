use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod emblem;
mod font;
mod manifest;
mod renderer;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Generate the installable web app's PNG icon set"
)]
struct Args {
    /// Output directory for the generated icons.
    #[clap(short, long, value_name = "DIR", default_value = "./public")]
    output: PathBuf,

    /// Short label drawn beneath the emblem.
    #[clap(short, long, value_name = "TEXT", default_value = "MX")]
    label: String,

    /// Preferred TrueType font for the label. When missing or unreadable,
    /// well-known system fonts are tried, then a built-in face.
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Also write a manifest.webmanifest describing the generated icons.
    #[clap(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    renderer::generate_icons(renderer::Args {
        output: args.output,
        label: args.label,
        font: args.font,
        manifest: args.manifest,
    })
}
