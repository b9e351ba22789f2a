use clap::Parser;
use portfolio::{
    Alignment, Checkpoint, Content, TimelineNode,
    domain::timeline::{Entry, YearGroup},
};
use tracing::instrument;

use super::terminal::{Colorize, terminal_width, truncate};

#[derive(Debug, Parser)]
#[command(about = "Show the career timeline grouped by year")]
pub struct Timeline {
    /// Print every node in order with its index and side instead of grouping
    #[arg(long)]
    flat: bool,

    /// Only show the given year
    #[arg(long, conflicts_with = "flat")]
    year: Option<String>,
}

impl Timeline {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, content: &Content) -> anyhow::Result<()> {
        let width = terminal_width().map_or(100, usize::from);

        if self.flat {
            for entry in content.timeline.entries() {
                println!("{}", flat_line(&entry));
            }
            return Ok(());
        }

        let groups = content.timeline.group_by_year()?;
        let groups: Vec<_> = match &self.year {
            Some(year) => groups.into_iter().filter(|g| g.year() == year.as_str()).collect(),
            None => groups,
        };

        if groups.is_empty() {
            match self.year {
                Some(year) => println!("No timeline entries for {year}."),
                None => println!("The timeline is empty."),
            }
            return Ok(());
        }

        for (i, group) in groups.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_group(group, width);
        }
        Ok(())
    }
}

fn print_group(group: &YearGroup<'_>, width: usize) {
    println!("{}", group.year().strong().info());
    if group.events.is_empty() {
        println!("  {}", "no events".dim());
    }
    for event in &group.events {
        println!("  {} {}", marker(event.alignment), event.title.trim());
        if let Some(subtitle) = &event.subtitle {
            println!("    {}", truncate(subtitle, width.saturating_sub(4)).dim());
        }
    }
}

const fn marker(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "◀",
        Alignment::Right => "▶",
    }
}

fn flat_line(entry: &Entry<'_>) -> String {
    let side = entry
        .side
        .map_or_else(|| "-".to_string(), |side| side.to_string());
    match entry.node {
        TimelineNode::Checkpoint(Checkpoint { title, size, .. }) => {
            format!("{:>3}  {side:<5}  checkpoint/{size}  {}", entry.index, title.trim())
        }
        node => format!("{:>3}  {side:<5}  {}", entry.index, node.kind()),
    }
}
