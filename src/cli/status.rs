use clap::Parser;
use portfolio::Content;
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, Parser, Default)]
#[command(about = "Show section counts for the loaded content")]
pub struct Status {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, PartialEq, Eq)]
struct Counts {
    menu_links: usize,
    typed_strings: usize,
    social_links: usize,
    projects: usize,
    skill_categories: usize,
    skills: usize,
    timeline_nodes: usize,
    years: Option<usize>,
}

impl Counts {
    fn of(content: &Content) -> Self {
        Self {
            menu_links: content.menu_links.len(),
            typed_strings: content.typed_strings.len(),
            social_links: content.social_links.len(),
            projects: content.projects.len(),
            skill_categories: content.skills.len(),
            skills: content.skills.all_tags().len(),
            timeline_nodes: content.timeline.len(),
            years: content.timeline.group_by_year().ok().map(|groups| groups.len()),
        }
    }
}

impl Status {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, content: &Content) -> anyhow::Result<()> {
        let counts = Counts::of(content);

        match self.output {
            OutputFormat::Json => Self::output_json(content, &counts)?,
            OutputFormat::Table => Self::output_table(content, &counts),
        }
        Ok(())
    }

    fn output_json(content: &Content, counts: &Counts) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "title": content.metadata.title,
            "site_url": content.metadata.site_url,
            "menu_links": counts.menu_links,
            "typed_strings": counts.typed_strings,
            "social_links": counts.social_links,
            "projects": counts.projects,
            "skills": {
                "categories": counts.skill_categories,
                "tags": counts.skills,
            },
            "timeline": {
                "nodes": counts.timeline_nodes,
                "years": counts.years,
            },
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_table(content: &Content, counts: &Counts) {
        println!("{}", content.metadata.title.strong());
        if !is_narrow() {
            println!("{}", content.metadata.site_url.dim());
        }
        println!();

        println!("Menu links     {:>4}", counts.menu_links);
        println!("Typed strings  {:>4}", counts.typed_strings);
        println!("Social links   {:>4}", counts.social_links);
        println!("Projects       {:>4}", counts.projects);
        println!(
            "Skills         {:>4} {}",
            counts.skills,
            format!("in {} categories", counts.skill_categories).dim()
        );
        match counts.years {
            Some(years) => println!(
                "Timeline       {:>4} {}",
                counts.timeline_nodes,
                format!("across {years} years").dim()
            ),
            None => println!(
                "Timeline       {:>4} {}",
                counts.timeline_nodes,
                "(ungroupable, run 'portfolio validate')".warning()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_builtin_content() {
        let counts = Counts::of(&Content::builtin());

        assert_eq!(
            counts,
            Counts {
                menu_links: 5,
                typed_strings: 4,
                social_links: 2,
                projects: 6,
                skill_categories: 4,
                skills: 13,
                timeline_nodes: 15,
                years: Some(5),
            }
        );
    }
}
