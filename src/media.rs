//! Image tooling for project placeholders and logos.

use std::io;

mod blur;
mod logo;

pub use blur::{blur_image, blur_output};
pub use logo::{app_icon, background_for, convert_logo, logo_output};

/// Errors raised while producing media files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("failed to access media file: {0}")]
    Io(#[from] io::Error),

    /// A raster image could not be decoded or encoded.
    #[error("failed to process image: {0}")]
    Image(#[from] image::ImageError),

    /// The input is not an SVG document this tool can restyle.
    #[error("invalid SVG: {0}")]
    InvalidSvg(&'static str),
}
