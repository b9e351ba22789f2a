use std::{
    fmt, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::instrument;

use crate::{Config, Content};

/// A serialization format for content files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// JSON, the format the presentation layer consumes.
    #[default]
    Json,
    /// YAML, convenient for hand-authored content.
    Yaml,
}

impl Format {
    /// Infers the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unsupported content format '{other}'")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Errors that can occur when loading or saving content files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read or written.
    #[error("failed to access content file: {0}")]
    Io(#[from] io::Error),

    /// The file is not valid JSON content.
    #[error("failed to parse JSON content: {0}")]
    Json(#[from] serde_json::Error),

    /// The file is not valid YAML content.
    #[error("failed to parse YAML content: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not name a supported format.
    #[error("cannot infer content format from '{}'", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl Content {
    /// Loads content from a JSON or YAML file, chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognised, or the file cannot
    /// be read or parsed.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let format =
            Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.into()))?;
        let text = std::fs::read_to_string(path)?;
        let content = Self::parse(&text, format)?;
        tracing::debug!("Loaded content from {}", path.display());
        Ok(content)
    }

    /// Parses content from a string in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid content in that format.
    pub fn parse(text: &str, format: Format) -> Result<Self, LoadError> {
        Ok(match format {
            Format::Json => serde_json::from_str(text)?,
            Format::Yaml => serde_yaml::from_str(text)?,
        })
    }

    /// Renders the content in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(&self, format: Format) -> Result<String, LoadError> {
        Ok(match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Yaml => serde_yaml::to_string(self)?,
        })
    }

    /// Writes the content to a file, choosing the format by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognised or the file cannot
    /// be written.
    pub fn save(&self, path: &Path) -> Result<(), LoadError> {
        let format =
            Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.into()))?;
        self.save_as(path, format)
    }

    /// Writes the content to a file in the given format, whatever its
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    #[instrument(level = "debug", skip(self))]
    pub fn save_as(&self, path: &Path, format: Format) -> Result<(), LoadError> {
        std::fs::write(path, self.render(format)?)?;
        tracing::info!("Wrote {format} content to {}", path.display());
        Ok(())
    }
}

/// Loads the content selected by the configuration.
///
/// Falls back to the built-in content when the configuration names no file.
/// Relative paths are resolved against `base`.
///
/// # Errors
///
/// Returns an error if the configured file cannot be loaded.
pub fn load_content(config: &Config, base: &Path) -> Result<Content, LoadError> {
    match config.content_path(base) {
        Some(path) => Content::load(&path),
        None => {
            tracing::debug!("Using built-in content");
            Ok(Content::builtin())
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::TimelineNode;

    #[test_case("content.json", Some(Format::Json); "json")]
    #[test_case("content.yaml", Some(Format::Yaml); "yaml")]
    #[test_case("content.YML", Some(Format::Yaml); "uppercase yml")]
    #[test_case("content.toml", None; "toml")]
    #[test_case("content", None; "no extension")]
    fn infers_format_from_extension(file: &str, expected: Option<Format>) {
        assert_eq!(Format::from_path(Path::new(file)), expected);
    }

    #[test]
    fn saves_and_loads_yaml_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("content.yaml");
        let mut content = Content::builtin();
        content.timeline = content
            .timeline
            .iter()
            .cloned()
            .chain([TimelineNode::Diverge])
            .collect();

        content.save(&path).unwrap();
        let loaded = Content::load(&path).unwrap();

        assert_eq!(loaded, content);
    }

    #[test]
    fn rejects_unknown_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("content.txt");

        let err = Content::builtin().save(&path).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(p) if p == path));
    }

    #[test]
    fn save_as_ignores_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("content.txt");

        Content::builtin().save_as(&path, Format::Yaml).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(Content::parse(&text, Format::Yaml).unwrap(), Content::builtin());
    }

    #[test]
    fn load_reports_parse_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("content.json");
        std::fs::write(&path, r#"{"metadata": 3}"#).unwrap();

        let err = Content::load(&path).unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn json_export_uses_presentation_field_names() {
        let json = Content::builtin().render(Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["menuLinks"][1]["ref"], "works");
        assert_eq!(value["projects"][0]["blurImage"], "/projects/blur/red-teaming-test-blur.png");
        assert_eq!(value["timeline"][0]["type"], "checkpoint");
        assert_eq!(value["timeline"][1]["slideImage"], "/timeline/9_join_kjr.PNG");
        assert_eq!(value["skills"]["Cloud Computing"][1], "gcp");
    }

    #[test]
    fn builtin_content_is_used_without_configured_file() {
        let content = load_content(&Config::default(), Path::new(".")).unwrap();
        assert_eq!(content, Content::builtin());
    }

    #[test]
    fn configured_file_is_resolved_against_base() {
        let tmp = tempfile::tempdir().unwrap();
        let mut content = Content::builtin();
        content.email = "someone@example.com".to_string();
        content.save(&tmp.path().join("site.json")).unwrap();

        let mut config = Config::default();
        config.content = Some(PathBuf::from("site.json"));

        let loaded = load_content(&config, tmp.path()).unwrap();
        assert_eq!(loaded.email, "someone@example.com");
    }
}
