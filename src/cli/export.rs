use std::path::PathBuf;

use clap::Parser;
use portfolio::{Content, Format};
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Write the content as JSON or YAML for the presentation layer")]
pub struct Export {
    /// Output format. Inferred from --out when omitted, otherwise JSON.
    #[arg(long, value_name = "FORMAT")]
    format: Option<ExportFormat>,

    /// Write to this file instead of stdout
    #[arg(long, short, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ExportFormat {
    Json,
    Yaml,
}

impl From<ExportFormat> for Format {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Json => Self::Json,
            ExportFormat::Yaml => Self::Yaml,
        }
    }
}

impl Export {
    fn resolve_format(&self) -> Format {
        self.format.map(Format::from).unwrap_or_else(|| {
            self.out
                .as_deref()
                .and_then(Format::from_path)
                .unwrap_or_default()
        })
    }

    #[instrument(level = "debug", skip_all)]
    pub fn run(self, content: &Content) -> anyhow::Result<()> {
        let format = self.resolve_format();

        match &self.out {
            Some(path) => content
                .save_as(path, format)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {e}", path.display()))?,
            None => print!("{}", content.render(format)?),
        }
        Ok(())
    }
}
