//! Placeholder icon generation for the extension package.
//!
//! The extension manifest references PNG icons at 16, 48 and 128 pixels.
//! Until real artwork exists, this module writes text files containing SVG
//! markup under those PNG names; Chrome tolerates the placeholders when the
//! extension is loaded unpacked. The mismatch between the `.png` extension
//! and the SVG content is deliberate and must be preserved.

use anyhow::{Context, Result};
use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::PathBuf;

/// Icon edge lengths the extension manifest references, in pixels.
/// Kept in ascending order so runs are deterministic.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// SVG drawing shared by every placeholder. The `{size}` token is filled
/// with the icon edge length wherever it appears; the drawing itself lives
/// in the fixed 100x100 viewBox coordinate space, so all sizes render the
/// same graphic.
pub const SVG_TEMPLATE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100">
  <rect width="100" height="100" fill="#4CAF50" rx="20"/>
  <circle cx="50" cy="35" r="8" fill="white"/>
  <circle cx="30" cy="65" r="8" fill="white"/>
  <circle cx="70" cy="65" r="8" fill="white"/>
  <line x1="50" y1="35" x2="30" y2="65" stroke="white" stroke-width="3"/>
  <line x1="50" y1="35" x2="70" y2="65" stroke="white" stroke-width="3"/>
  <line x1="30" y1="65" x2="70" y2="65" stroke="white" stroke-width="3"/>
</svg>"##;

/// Everything the generator needs: the sizes to emit, the template to
/// render, and the directory the files land in.
#[derive(Debug, Clone)]
pub struct PlaceholderConfig {
    pub sizes: Vec<u32>,
    pub template: String,
    pub out_dir: PathBuf,
}

impl PlaceholderConfig {
    /// The fixed configuration for the chrome_extension package.
    pub fn chrome_extension(out_dir: PathBuf) -> Self {
        Self {
            sizes: ICON_SIZES.to_vec(),
            template: SVG_TEMPLATE.to_string(),
            out_dir,
        }
    }
}

/// File name the manifest references for a given edge length.
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

/// Fill the `{size}` token at every occurrence in the template.
pub fn render_icon(template: &str, size: u32) -> String {
    template.replace("{size}", &size.to_string())
}

/// Full file content for one placeholder: a comment line naming the nominal
/// size, then the rendered SVG document.
pub fn placeholder_content(template: &str, size: u32) -> String {
    format!(
        "<!-- Placeholder for {size}x{size} icon -->\n{}",
        render_icon(template, size)
    )
}

/// Write one placeholder per configured size, then print the load
/// instructions. Existing files are overwritten. The first write error
/// aborts the run and the instructions are never printed.
pub fn generate_all(config: &PlaceholderConfig) -> Result<()> {
    create_dir_all(&config.out_dir).context("Can't create output directory")?;

    for &size in &config.sizes {
        write_placeholder(config, size)?;
    }

    print_instructions();

    Ok(())
}

fn write_placeholder(config: &PlaceholderConfig, size: u32) -> Result<()> {
    let path = config.out_dir.join(icon_file_name(size));

    let mut file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(placeholder_content(&config.template, size).as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}

/// The fixed instruction block shown after a successful run.
fn print_instructions() {
    println!("Icon placeholders created!");
    println!();
    println!("To use the extension:");
    println!("1. Open Chrome and go to chrome://extensions/");
    println!("2. Enable 'Developer mode' (top right)");
    println!("3. Click 'Load unpacked'");
    println!("4. Select the chrome_extension folder");
    println!();
    println!("The extension will then be active!");
}
