use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};

/// Writes `img` to `path` as PNG, creating missing parent directories.
pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("saving image {}", path.display()))
}
