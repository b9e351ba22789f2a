use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use tracing::instrument;

use super::Error;
use crate::{Config, domain::project::blur_path_for};

/// Placeholders are a quarter of the original size on each side.
const DOWNSCALE: u32 = 4;

/// Standard deviation of the Gaussian applied after downscaling.
const SIGMA: f32 = 6.0;

/// The file a blurred placeholder for `input` is written to.
///
/// Follows the same naming convention content checks expect of
/// [`crate::Project::blur_image`].
#[must_use]
pub fn blur_output(input: &Path, config: &Config) -> PathBuf {
    PathBuf::from(blur_path_for(&input.to_string_lossy(), config))
}

/// Writes a downscaled, blurred copy of an image and returns its path.
///
/// Each side shrinks to a quarter of its length, never below one pixel. The
/// output format follows the output file's extension, which matches the
/// input's.
///
/// # Errors
///
/// Returns an error if the image cannot be decoded, the placeholder directory
/// cannot be created, or the placeholder cannot be encoded.
#[instrument(level = "debug", skip(config))]
pub fn blur_image(input: &Path, config: &Config) -> Result<PathBuf, Error> {
    let original = image::open(input)?;
    let width = (original.width() / DOWNSCALE).max(1);
    let height = (original.height() / DOWNSCALE).max(1);

    let placeholder = original
        .resize_exact(width, height, FilterType::Lanczos3)
        .blur(SIGMA);

    let output = blur_output(input, config);
    if let Some(dir) = output.parent() {
        std::fs::create_dir_all(dir)?;
    }
    placeholder.save(&output)?;

    tracing::info!(
        "Blurred {} ({}x{}) into {} ({width}x{height})",
        input.display(),
        original.width(),
        original.height(),
        output.display()
    );
    Ok(output)
}
