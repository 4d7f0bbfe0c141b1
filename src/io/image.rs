//! PNG export of the stitched image with pattern cells highlighted

use crate::analysis::patterns::{Pattern, SearchOutcome};
use crate::io::configuration::{
    EXPORT_BACKGROUND, EXPORT_MONSTER, EXPORT_PIXEL_SCALE, EXPORT_WATER,
};
use crate::io::error::{PuzzleError, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Render the oriented image, one `EXPORT_PIXEL_SCALE` square per cell
pub fn render(outcome: &SearchOutcome, pattern: &Pattern) -> RgbaImage {
    let pixels = outcome.image.pixels();
    let highlighted = outcome.highlighted(pattern);
    let side = outcome.image.side() as u32;
    let scale = EXPORT_PIXEL_SCALE;

    ImageBuffer::from_fn(side * scale, side * scale, |x, y| {
        let cell = ((y / scale) as usize, (x / scale) as usize);
        let colour = if highlighted.get(cell).copied().unwrap_or(false) {
            EXPORT_MONSTER
        } else if pixels.get(cell).copied().unwrap_or(false) {
            EXPORT_WATER
        } else {
            EXPORT_BACKGROUND
        };
        Rgba(colour)
    })
}

/// Save the rendered image as a PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(outcome: &SearchOutcome, pattern: &Pattern, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PuzzleError::ImageExport {
            path: parent.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?;
    }

    render(outcome, pattern)
        .save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    log::info!("exported stitched image to '{}'", output_path.display());
    Ok(())
}
