use std::path::PathBuf;

use clap::Parser;
use portfolio::{Config, media};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Write blurred, quarter-size placeholders for project images")]
pub struct Blur {
    /// Images to blur
    #[arg(required = true, value_name = "IMAGE")]
    images: Vec<PathBuf>,
}

impl Blur {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        for image in &self.images {
            let output = media::blur_image(image, config)
                .map_err(|e| anyhow::anyhow!("Failed to blur {}: {e}", image.display()))?;
            println!(
                "{} {}",
                "✓".success(),
                format!("{} -> {}", image.display(), output.display()).dim()
            );
        }
        Ok(())
    }
}

#[derive(Debug, Parser)]
#[command(about = "Turn an SVG logo into a 128x128 rounded app icon")]
pub struct Logo {
    /// The SVG logo to convert
    #[arg(value_name = "SVG")]
    svg: PathBuf,
}

impl Logo {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self) -> anyhow::Result<()> {
        let output = media::convert_logo(&self.svg)
            .map_err(|e| anyhow::anyhow!("Failed to convert {}: {e}", self.svg.display()))?;
        println!(
            "{} {}",
            "✓".success(),
            format!("{} -> {}", self.svg.display(), output.display()).dim()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn blur_requires_an_image() {
        assert!(Blur::try_parse_from(["blur"]).is_err());
    }

    #[test]
    fn blurs_every_image() {
        let tmp = tempfile::tempdir().unwrap();
        let images: Vec<_> = ["a.png", "b.png"]
            .iter()
            .map(|name| tmp.path().join(name))
            .collect();
        for image in &images {
            image::RgbImage::new(8, 4).save(image).unwrap();
        }

        Blur { images }.run(&Config::default()).unwrap();

        assert!(tmp.path().join("blur/a-blur.png").exists());
        assert!(tmp.path().join("blur/b-blur.png").exists());
    }

    #[test]
    fn reports_unreadable_logo() {
        let tmp = tempfile::tempdir().unwrap();
        let svg = tmp.path().join("missing.svg");

        let err = Logo { svg }.run().unwrap_err();

        assert!(err.to_string().starts_with("Failed to convert"));
    }
}
