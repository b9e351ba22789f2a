use serde::{Deserialize, Serialize};

use crate::domain::Config;

/// A card in the project gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Full-resolution image path.
    pub image: String,
    /// Low-resolution blurred placeholder path.
    pub blur_image: String,
    /// Short description shown on the card.
    pub description: String,
    /// Start and end colours of the card's background gradient.
    pub gradient: [String; 2],
    /// Link target. `#` when the project has no public page.
    pub url: String,
    /// Technology tags.
    pub tech: Vec<String>,
}

impl Project {
    /// The blur image path this project's image is expected to map to.
    #[must_use]
    pub fn expected_blur_image(&self, config: &Config) -> String {
        blur_path_for(&self.image, config)
    }
}

/// Derives the conventional blurred placeholder path for an image.
///
/// `/dir/name.ext` maps to `/dir/<blur_dir>/name<blur_suffix>.ext`.
///
/// # Examples
///
/// ```
/// use portfolio::{Config, domain::project::blur_path_for};
///
/// let config = Config::default();
/// assert_eq!(
///     blur_path_for("/projects/aatt.png", &config),
///     "/projects/blur/aatt-blur.png"
/// );
/// ```
#[must_use]
pub fn blur_path_for(image: &str, config: &Config) -> String {
    let (dir, file) = match image.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, image),
    };

    let (stem, ext) = match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (file, None),
    };

    let mut path = String::with_capacity(image.len() + 16);
    if let Some(dir) = dir {
        path.push_str(dir);
        path.push('/');
    }
    if !config.blur_dir().is_empty() {
        path.push_str(config.blur_dir());
        path.push('/');
    }
    path.push_str(stem);
    path.push_str(config.blur_suffix());
    if let Some(ext) = ext {
        path.push('.');
        path.push_str(ext);
    }
    path
}
