use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for content checking and loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// A content file to use instead of the built-in content.
    ///
    /// Relative paths are resolved against the directory holding the
    /// configuration file.
    pub content: Option<PathBuf>,

    /// The directory, next to each project image, holding blurred
    /// placeholders.
    ///
    /// Empty means placeholders sit beside the original image.
    blur_dir: String,

    /// The suffix appended to an image's file stem to name its placeholder.
    ///
    /// For example, '-blur' maps `aatt.png` to `aatt-blur.png`.
    blur_suffix: String,

    /// Whether project placeholders must follow the blur naming convention.
    pub check_blur_images: bool,

    /// Whether warnings make the content unhealthy.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: None,
            blur_dir: default_blur_dir(),
            blur_suffix: default_blur_suffix(),
            check_blur_images: default_check_blur_images(),
            strict: false,
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Loads the configuration at `path`, falling back to the default if the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Returns the blur placeholder directory name.
    #[must_use]
    pub fn blur_dir(&self) -> &str {
        &self.blur_dir
    }

    /// Returns the blur placeholder file stem suffix.
    #[must_use]
    pub fn blur_suffix(&self) -> &str {
        &self.blur_suffix
    }

    /// Resolves the configured content path relative to `base`.
    #[must_use]
    pub fn content_path(&self, base: &Path) -> Option<PathBuf> {
        self.content.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            }
        })
    }
}

fn default_blur_dir() -> String {
    "blur".to_string()
}

fn default_blur_suffix() -> String {
    "-blur".to_string()
}

const fn default_check_blur_images() -> bool {
    true
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<PathBuf>,

        #[serde(default = "default_blur_dir")]
        blur_dir: String,

        #[serde(default = "default_blur_suffix")]
        blur_suffix: String,

        #[serde(default = "default_check_blur_images")]
        check_blur_images: bool,

        #[serde(default)]
        strict: bool,
    },
}

impl From<Versions> for super::Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                content,
                blur_dir,
                blur_suffix,
                check_blur_images,
                strict,
            } => Self {
                content,
                blur_dir,
                blur_suffix,
                check_blur_images,
                strict,
            },
        }
    }
}

impl From<super::Config> for Versions {
    fn from(config: super::Config) -> Self {
        Self::V1 {
            content: config.content,
            blur_dir: config.blur_dir,
            blur_suffix: config.blur_suffix,
            check_blur_images: config.check_blur_images,
            strict: config.strict,
        }
    }
}
