use std::path::{Path, PathBuf};

mod export;
mod list;
mod media;
mod status;
mod terminal;
mod timeline;
mod validate;

use clap::ArgAction;
use export::Export;
use list::{Projects, Skills};
use media::{Blur, Logo};
use portfolio::{Config, Content};
use status::Status;
use timeline::Timeline;
use validate::Validate;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The path to the configuration file
    #[arg(short, long, default_value = "portfolio.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = Config::load_or_default(&self.config).map_err(|e| anyhow::anyhow!(e))?;
        let base = self
            .config
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        self.command
            .unwrap_or_else(|| Command::Status(Status::default()))
            .run(&config, base)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Summarise the content (default)
    Status(Status),

    /// Check the content for contract violations and convention drift
    Validate(Validate),

    /// Show the career timeline
    Timeline(Timeline),

    /// Export the content for the presentation layer
    Export(Export),

    /// List skills by category
    Skills(Skills),

    /// List project cards
    Projects(Projects),

    /// Generate blurred placeholders for project images
    Blur(Blur),

    /// Convert an SVG logo into an app icon
    Logo(Logo),
}

impl Command {
    /// Runs the command. Content is only loaded by commands that read it.
    fn run(self, config: &Config, base: &Path) -> anyhow::Result<()> {
        let content = || -> anyhow::Result<Content> {
            Ok(portfolio::load_content(config, base)?)
        };

        match self {
            Self::Status(command) => command.run(&content()?)?,
            Self::Validate(command) => command.run(&content()?, config)?,
            Self::Timeline(command) => command.run(&content()?)?,
            Self::Export(command) => command.run(&content()?)?,
            Self::Skills(command) => command.run(&content()?)?,
            Self::Projects(command) => command.run(&content()?)?,
            Self::Blur(command) => command.run(config)?,
            Self::Logo(command) => command.run()?,
        }
        Ok(())
    }
}
