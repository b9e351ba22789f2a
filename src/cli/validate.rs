use clap::Parser;
use portfolio::{
    Config, Content,
    domain::{
        Report, Severity,
        check::{self, Section},
    },
};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Check the timeline contract and content authoring conventions")]
pub struct Validate {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    strict: bool,

    /// Suppress all output except errors
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Summary,
}

const SECTIONS: [Section; 4] = [
    Section::Menu,
    Section::TypedStrings,
    Section::Projects,
    Section::Timeline,
];

impl Validate {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, content: &Content, config: &Config) -> anyhow::Result<()> {
        let strict = self.strict || config.strict;
        let report = check::check(content, config);

        match self.output {
            OutputFormat::Table => self.output_table(&report, strict),
            OutputFormat::Json => Self::output_json(&report, strict)?,
            OutputFormat::Summary => Self::output_summary(&report),
        }

        if !report.is_healthy(strict) {
            std::process::exit(2);
        }

        Ok(())
    }

    fn output_table(&self, report: &Report, strict: bool) {
        if self.quiet {
            for issue in report.issues() {
                if issue.severity == Severity::Error || strict {
                    eprintln!("{}", format_issue(issue).error());
                }
            }
            return;
        }

        println!("Validating content...\n");

        for section in SECTIONS {
            let issues: Vec<_> = report.in_section(section).collect();
            let label = format!("{section}:");
            if issues.is_empty() {
                println!("✓ {label:<15} no issues");
                continue;
            }

            let line = format!("✗ {label:<15} {} issues found", issues.len());
            if issues.iter().any(|i| i.severity == Severity::Error) {
                println!("{}", line.error());
            } else {
                println!("{}", line.warning());
            }
            for issue in issues {
                println!("    {}", format_issue(issue).dim());
            }
        }

        let errors = report.error_count();
        let warnings = report.warning_count();
        if report.is_healthy(strict) && warnings == 0 {
            println!("\n{}", "Content is healthy (0 issues)".success());
        } else if report.is_healthy(strict) {
            println!(
                "\n{}",
                format!("Content is usable ({warnings} warnings)").warning()
            );
            println!(
                "{}",
                "Run 'portfolio validate --strict' to treat warnings as errors".dim()
            );
        } else {
            println!(
                "\n{}",
                format!("Summary: {errors} errors, {warnings} warnings").error()
            );
        }
    }

    fn output_json(report: &Report, strict: bool) -> anyhow::Result<()> {
        use serde_json::json;

        let output = json!({
            "status": if report.is_healthy(strict) { "healthy" } else { "issues_found" },
            "strict": strict,
            "issues": report.issues(),
            "summary": {
                "errors": report.error_count(),
                "warnings": report.warning_count(),
            }
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_summary(report: &Report) {
        println!(
            "errors={} warnings={}",
            report.error_count(),
            report.warning_count()
        );
    }
}

fn format_issue(issue: &check::Issue) -> String {
    let severity = match issue.severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
    };
    format!(
        "{severity} [{} #{}] {}",
        issue.section, issue.index, issue.message
    )
}

#[cfg(test)]
mod tests {
    use portfolio::domain::Issue;

    use super::*;

    #[test]
    fn formats_issue_with_index() {
        let issue = Issue {
            section: Section::Timeline,
            index: 3,
            severity: Severity::Error,
            message: "'x' appears before any year marker".to_string(),
        };

        assert_eq!(
            format_issue(&issue),
            "error [timeline #3] 'x' appears before any year marker"
        );
    }
}
