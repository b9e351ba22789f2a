use std::{collections::HashSet, fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use tracing::instrument;

use crate::{Config, Content, domain::timeline::Error as TimelineError};

static HEX_COLOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex colour pattern is valid")
});

/// How serious an issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An authoring convention is not followed.
    Warning,
    /// The content breaks the timeline contract.
    Error,
}

/// The part of the content an issue was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Navigation links.
    Menu,
    /// Typing animation lines.
    TypedStrings,
    /// Project cards.
    Projects,
    /// Career timeline.
    Timeline,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Menu => f.write_str("menu"),
            Self::TypedStrings => f.write_str("typed strings"),
            Self::Projects => f.write_str("projects"),
            Self::Timeline => f.write_str("timeline"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Where the issue was found.
    pub section: Section,
    /// Position of the offending entry within its section.
    pub index: usize,
    /// How serious the issue is.
    pub severity: Severity,
    /// Human readable description.
    pub message: String,
}

/// The findings of a content check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    issues: Vec<Issue>,
}

impl Report {
    /// All issues in the order they were found.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Issues found in one section.
    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.section == section)
    }

    /// Number of errors.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    /// Number of warnings.
    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Returns `true` if there are no errors, and no warnings when `strict`.
    #[must_use]
    pub fn is_healthy(&self, strict: bool) -> bool {
        self.error_count() == 0 && (!strict || self.warning_count() == 0)
    }

    fn push(&mut self, section: Section, index: usize, severity: Severity, message: String) {
        self.issues.push(Issue {
            section,
            index,
            severity,
            message,
        });
    }
}

/// Checks the content against the timeline contract and authoring
/// conventions.
#[instrument(level = "debug", skip_all)]
#[must_use]
pub fn check(content: &Content, config: &Config) -> Report {
    let mut report = Report::default();

    check_menu(content, &mut report);
    check_typed_strings(content, &mut report);
    check_projects(content, config, &mut report);
    check_timeline(content, &mut report);

    tracing::debug!(
        "Content check found {} errors and {} warnings",
        report.error_count(),
        report.warning_count()
    );
    report
}

fn check_menu(content: &Content, report: &mut Report) {
    let mut seen = HashSet::new();
    for (index, link) in content.menu_links.iter().enumerate() {
        if !seen.insert(link.anchor.as_str()) {
            report.push(
                Section::Menu,
                index,
                Severity::Warning,
                format!("'{}' targets '{}', which is already linked", link.name, link.anchor),
            );
        }
    }
}

fn check_typed_strings(content: &Content, report: &mut Report) {
    for (index, line) in content.typed_strings.iter().enumerate() {
        if line.trim().is_empty() {
            report.push(
                Section::TypedStrings,
                index,
                Severity::Warning,
                "typed string is empty".to_string(),
            );
        }
    }
}

fn check_projects(content: &Content, config: &Config, report: &mut Report) {
    for (index, project) in content.projects.iter().enumerate() {
        for colour in &project.gradient {
            if !HEX_COLOUR.is_match(colour) {
                report.push(
                    Section::Projects,
                    index,
                    Severity::Warning,
                    format!("'{}' gradient colour '{colour}' is not a hex colour", project.name),
                );
            }
        }

        if config.check_blur_images {
            let expected = project.expected_blur_image(config);
            if project.blur_image != expected {
                report.push(
                    Section::Projects,
                    index,
                    Severity::Warning,
                    format!(
                        "'{}' blur image is '{}', expected '{expected}'",
                        project.name, project.blur_image
                    ),
                );
            }
        }
    }
}

fn check_timeline(content: &Content, report: &mut Report) {
    let timeline = &content.timeline;

    if let Err(TimelineError::MissingField { index, field }) = timeline.validate() {
        report.push(
            Section::Timeline,
            index,
            Severity::Error,
            format!("checkpoint is missing required field '{field}'"),
        );
    }

    if let Err(TimelineError::OrphanedEvent { index, title }) = timeline.group_by_year() {
        report.push(
            Section::Timeline,
            index,
            Severity::Error,
            format!("'{title}' appears before any year marker"),
        );
    }

    for entry in timeline.entries() {
        let Some(checkpoint) = entry.node.as_checkpoint() else {
            continue;
        };
        if !checkpoint.is_year_marker() {
            continue;
        }
        if checkpoint.should_draw_line {
            report.push(
                Section::Timeline,
                entry.index,
                Severity::Warning,
                format!("year marker '{}' draws a connecting line", checkpoint.title),
            );
        }
        if checkpoint.has_media() {
            report.push(
                Section::Timeline,
                entry.index,
                Severity::Warning,
                format!("year marker '{}' hosts media", checkpoint.title),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Alignment, Checkpoint, ItemSize, TimelineNode};

    fn checkpoint(title: &str, size: ItemSize) -> Checkpoint {
        Checkpoint {
            title: title.to_string(),
            subtitle: None,
            size,
            image: None,
            slide_image: None,
            should_draw_line: size == ItemSize::Small,
            alignment: Alignment::Right,
        }
    }

    #[test]
    fn builtin_content_is_healthy() {
        let report = check(&Content::builtin(), &Config::default());

        assert!(report.issues().is_empty(), "{:?}", report.issues());
        assert!(report.is_healthy(true));
    }

    #[test]
    fn timeline_contract_violations_are_errors() {
        let mut content = Content::builtin();
        content.timeline = vec![
            TimelineNode::from(checkpoint("orphan", ItemSize::Small)),
            TimelineNode::from(checkpoint("2024", ItemSize::Large)),
            TimelineNode::from(checkpoint("", ItemSize::Small)),
        ]
        .into();

        let report = check(&content, &Config::default());

        assert_eq!(report.error_count(), 2);
        assert!(!report.is_healthy(false));
        let indices: Vec<_> = report
            .in_section(Section::Timeline)
            .map(|i| i.index)
            .collect();
        assert_eq!(indices, vec![2, 0]);

        let value = serde_json::to_value(report.issues()).unwrap();
        assert_eq!(value[0]["index"], 2);
        assert_eq!(value[0]["severity"], "error");
    }

    #[test]
    fn year_marker_conventions_are_warnings() {
        let mut marker = checkpoint("2024", ItemSize::Large);
        marker.should_draw_line = true;
        marker.image = Some("/timeline/x.png".to_string());

        let mut content = Content::builtin();
        content.timeline = vec![TimelineNode::from(marker)].into();

        let report = check(&content, &Config::default());

        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 2);
        assert!(report.is_healthy(false));
        assert!(!report.is_healthy(true));
    }

    #[test]
    fn flags_malformed_gradients_and_blur_paths() {
        let mut content = Content::builtin();
        content.projects[0].gradient[1] = "orange".to_string();
        content.projects[1].blur_image = "/projects/aatt-small.png".to_string();

        let report = check(&content, &Config::default());

        let messages: Vec<_> = report
            .in_section(Section::Projects)
            .map(|i| (i.index, i.message.as_str()))
            .collect();
        assert_eq!(
            messages,
            vec![
                (
                    0,
                    "'AI Agents Red Team Testing' gradient colour 'orange' is not a hex colour"
                ),
                (
                    1,
                    "'Australia Age Assurance Technology Trial' blur image is \
                     '/projects/aatt-small.png', expected '/projects/blur/aatt-blur.png'"
                ),
            ]
        );
    }

    #[test]
    fn blur_check_can_be_disabled() {
        let mut content = Content::builtin();
        content.projects[1].blur_image = "/elsewhere.png".to_string();
        let mut config = Config::default();
        config.check_blur_images = false;

        assert!(check(&content, &config).issues().is_empty());
    }

    #[test]
    fn duplicate_anchors_and_blank_lines_are_warnings() {
        let mut content = Content::builtin();
        let duplicate = content.menu_links[1].clone();
        content.menu_links.push(duplicate);
        content.typed_strings.push("  ".to_string());

        let report = check(&content, &Config::default());

        assert_eq!(report.in_section(Section::Menu).count(), 1);
        assert_eq!(report.in_section(Section::TypedStrings).count(), 1);
        assert_eq!(report.warning_count(), 2);
    }
}
