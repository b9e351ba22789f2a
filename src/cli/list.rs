use clap::Parser;
use portfolio::Content;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow, terminal_width, truncate};

#[derive(Debug, Parser)]
#[command(about = "List skill tags grouped by category")]
pub struct Skills {
    /// Only show this category
    #[arg(long)]
    category: Option<String>,
}

impl Skills {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, content: &Content) -> anyhow::Result<()> {
        if let Some(category) = &self.category {
            let skills = content
                .skills
                .get(category)
                .ok_or_else(|| anyhow::anyhow!("No skill category named '{category}'"))?;
            for skill in skills {
                println!("{skill}");
            }
            return Ok(());
        }

        for (category, skills) in &content.skills {
            println!("{}", category.strong());
            println!("  {}", skills.join(", "));
        }
        Ok(())
    }
}

#[derive(Debug, Parser)]
#[command(about = "List project cards in gallery order")]
pub struct Projects {
    /// Only show projects using this technology tag
    #[arg(long)]
    tech: Option<String>,
}

impl Projects {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, content: &Content) -> anyhow::Result<()> {
        let width = terminal_width().map_or(100, usize::from);

        let projects: Vec<_> = content
            .projects
            .iter()
            .filter(|p| {
                self.tech
                    .as_ref()
                    .is_none_or(|tech| p.tech.iter().any(|t| t.eq_ignore_ascii_case(tech)))
            })
            .collect();

        if projects.is_empty() {
            println!("No matching projects.");
            return Ok(());
        }

        for project in projects {
            println!("{}", project.name.strong());
            if !is_narrow() {
                println!("  {}", truncate(&project.description, width.saturating_sub(2)).dim());
            }
            println!(
                "  {} {}",
                project.tech.join(", ").info(),
                project.gradient.join(" → ").dim()
            );
        }
        Ok(())
    }
}
