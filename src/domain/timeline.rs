use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Which side of the timeline spine a checkpoint renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// Rendered to the left of the spine.
    #[serde(rename = "leftSide", alias = "left")]
    Left,
    /// Rendered to the right of the spine.
    #[serde(rename = "rightSide", alias = "right")]
    Right,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// The visual weight of a checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemSize {
    /// A detail event.
    Small,
    /// A year marker or section header.
    Large,
}

impl fmt::Display for ItemSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Small => f.write_str("small"),
            Self::Large => f.write_str("large"),
        }
    }
}

/// A discrete dated event on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    /// Display title. Must be non-empty.
    pub title: String,
    /// Optional descriptive text shown under the title.
    pub subtitle: Option<String>,
    /// Whether this is a year marker or a detail event.
    pub size: ItemSize,
    /// Thumbnail image path.
    pub image: Option<String>,
    /// Image shown in the slide-out panel.
    pub slide_image: Option<String>,
    /// Whether a connecting line is drawn from this node to the next.
    pub should_draw_line: bool,
    /// Which side of the spine the node renders on.
    pub alignment: Alignment,
}

impl Checkpoint {
    /// Returns `true` if this checkpoint is a year marker.
    #[must_use]
    pub fn is_year_marker(&self) -> bool {
        self.size == ItemSize::Large
    }

    /// Returns `true` if either image is set.
    #[must_use]
    pub const fn has_media(&self) -> bool {
        self.image.is_some() || self.slide_image.is_some()
    }
}

/// A single node of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimelineNode {
    /// A dated event or year marker.
    Checkpoint(Checkpoint),
    /// The visual path rejoins.
    Converge,
    /// The visual path splits.
    Diverge,
}

impl TimelineNode {
    /// Returns the checkpoint, if this node is one.
    #[must_use]
    pub const fn as_checkpoint(&self) -> Option<&Checkpoint> {
        match self {
            Self::Checkpoint(checkpoint) => Some(checkpoint),
            Self::Converge | Self::Diverge => None,
        }
    }

    /// The rendering side of the node.
    ///
    /// Branch nodes carry no side; the renderer's layout decides where they go.
    #[must_use]
    pub const fn side(&self) -> Option<Alignment> {
        match self {
            Self::Checkpoint(checkpoint) => Some(checkpoint.alignment),
            Self::Converge | Self::Diverge => None,
        }
    }

    /// The discriminant as it appears in serialized content.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Checkpoint(_) => "checkpoint",
            Self::Converge => "converge",
            Self::Diverge => "diverge",
        }
    }
}

impl From<Checkpoint> for TimelineNode {
    fn from(checkpoint: Checkpoint) -> Self {
        Self::Checkpoint(checkpoint)
    }
}

/// Errors raised by timeline validation and grouping.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A required field is absent or empty.
    #[error("timeline node {index} is missing required field '{field}'")]
    MissingField {
        /// Zero-based position of the offending node.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A detail event appears before any year marker.
    #[error("timeline event '{title}' at index {index} precedes any year marker")]
    OrphanedEvent {
        /// Zero-based position of the offending node.
        index: usize,
        /// Title of the orphaned event.
        title: String,
    },
}

/// A node paired with its position and rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// The node itself.
    pub node: &'a TimelineNode,
    /// Zero-based position in the sequence.
    pub index: usize,
    /// The resolved side, `None` for branch nodes.
    pub side: Option<Alignment>,
}

/// A year marker together with the events that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup<'a> {
    /// The large checkpoint that opens the group.
    pub marker: &'a Checkpoint,
    /// Position of the marker in the sequence.
    pub marker_index: usize,
    /// Detail events up to the next marker, in source order.
    pub events: Vec<&'a Checkpoint>,
}

impl YearGroup<'_> {
    /// The marker's title, usually a year.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.marker.title
    }
}

/// Checks that every node carries the fields its variant requires.
///
/// # Errors
///
/// Returns [`Error::MissingField`] for the first checkpoint whose title is
/// empty or whitespace.
pub fn validate(nodes: &[TimelineNode]) -> Result<(), Error> {
    let blank = nodes.iter().position(|node| {
        node.as_checkpoint()
            .is_some_and(|checkpoint| checkpoint.title.trim().is_empty())
    });

    match blank {
        Some(index) => {
            tracing::debug!("timeline node {index} has an empty title");
            Err(Error::MissingField {
                index,
                field: "title",
            })
        }
        None => Ok(()),
    }
}

/// Walks the sequence in order, pairing each node with its index and side.
pub fn iterate(nodes: &[TimelineNode]) -> impl Iterator<Item = Entry<'_>> + Clone {
    nodes.iter().enumerate().map(|(index, node)| Entry {
        node,
        index,
        side: node.side(),
    })
}

/// Splits the sequence into year groups at each large checkpoint.
///
/// Branch nodes are not assigned to any group.
///
/// # Errors
///
/// Returns [`Error::OrphanedEvent`] if a small checkpoint appears before the
/// first year marker.
pub fn group_by_year(nodes: &[TimelineNode]) -> Result<Vec<YearGroup<'_>>, Error> {
    let mut groups: Vec<YearGroup<'_>> = Vec::new();

    for (index, checkpoint) in nodes
        .iter()
        .enumerate()
        .filter_map(|(index, node)| node.as_checkpoint().map(|c| (index, c)))
    {
        match checkpoint.size {
            ItemSize::Large => groups.push(YearGroup {
                marker: checkpoint,
                marker_index: index,
                events: Vec::new(),
            }),
            ItemSize::Small => {
                let Some(group) = groups.last_mut() else {
                    return Err(Error::OrphanedEvent {
                        index,
                        title: checkpoint.title.clone(),
                    });
                };
                group.events.push(checkpoint);
            }
        }
    }

    tracing::trace!("grouped timeline into {} years", groups.len());
    Ok(groups)
}

/// An ordered sequence of timeline nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline(Vec<TimelineNode>);

impl Timeline {
    /// Creates a timeline from nodes in authoring order.
    #[must_use]
    pub const fn new(nodes: Vec<TimelineNode>) -> Self {
        Self(nodes)
    }

    /// See [`validate`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if a checkpoint has an empty title.
    pub fn validate(&self) -> Result<(), Error> {
        validate(&self.0)
    }

    /// See [`iterate`].
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + Clone {
        iterate(&self.0)
    }

    /// See [`group_by_year`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrphanedEvent`] if an event precedes every year marker.
    pub fn group_by_year(&self) -> Result<Vec<YearGroup<'_>>, Error> {
        group_by_year(&self.0)
    }
}

impl Deref for Timeline {
    type Target = [TimelineNode];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<TimelineNode>> for Timeline {
    fn from(nodes: Vec<TimelineNode>) -> Self {
        Self(nodes)
    }
}

impl FromIterator<TimelineNode> for Timeline {
    fn from_iter<I: IntoIterator<Item = TimelineNode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn year(title: &str) -> TimelineNode {
        Checkpoint {
            title: title.to_string(),
            subtitle: None,
            size: ItemSize::Large,
            image: None,
            slide_image: None,
            should_draw_line: false,
            alignment: Alignment::Left,
        }
        .into()
    }

    fn event(title: &str, alignment: Alignment) -> TimelineNode {
        Checkpoint {
            title: title.to_string(),
            subtitle: Some(format!("about {title}")),
            size: ItemSize::Small,
            image: Some("/timeline/a.png".to_string()),
            slide_image: None,
            should_draw_line: true,
            alignment,
        }
        .into()
    }

    #[test]
    fn validate_accepts_well_formed_sequence() {
        let nodes = vec![
            year("2024"),
            event("Joined", Alignment::Left),
            TimelineNode::Diverge,
            event("Left", Alignment::Right),
            TimelineNode::Converge,
        ];
        assert_eq!(validate(&nodes), Ok(()));
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "whitespace")]
    fn validate_rejects_blank_title(title: &str) {
        let nodes = vec![year("2024"), event(title, Alignment::Left)];
        assert_eq!(
            validate(&nodes),
            Err(Error::MissingField {
                index: 1,
                field: "title"
            })
        );
    }

    #[test]
    fn validate_reports_first_violation() {
        let nodes = vec![year(""), event("", Alignment::Left)];
        let err = validate(&nodes).unwrap_err();
        assert_eq!(
            err,
            Error::MissingField {
                index: 0,
                field: "title"
            }
        );
        assert_eq!(
            err.to_string(),
            "timeline node 0 is missing required field 'title'"
        );
    }

    #[test]
    fn validate_accepts_empty_sequence() {
        assert!(validate(&[]).is_ok());
    }

    #[test]
    fn iterate_preserves_order_and_resolves_sides() {
        let nodes = vec![
            year("2024"),
            event("a", Alignment::Right),
            TimelineNode::Converge,
        ];

        let entries: Vec<_> = iterate(&nodes).collect();

        assert_eq!(entries.len(), nodes.len());
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert!(std::ptr::eq(entry.node, &nodes[i]));
        }
        assert_eq!(entries[0].side, Some(Alignment::Left));
        assert_eq!(entries[1].side, Some(Alignment::Right));
        assert_eq!(entries[2].side, None);
    }

    #[test]
    fn iterate_is_restartable() {
        let nodes = vec![year("2024"), event("a", Alignment::Left)];
        let walk = iterate(&nodes);

        let first: Vec<_> = walk.clone().collect();
        let second: Vec<_> = walk.collect();

        assert_eq!(first, second);
    }

    #[test]
    fn group_by_year_assigns_events_to_preceding_marker() {
        let nodes = vec![
            year("2024"),
            event("a", Alignment::Left),
            event("b", Alignment::Left),
            year("2023"),
            year("2022"),
            event("c", Alignment::Left),
        ];

        let groups = group_by_year(&nodes).unwrap();

        let summary: Vec<_> = groups
            .iter()
            .map(|g| {
                (
                    g.year(),
                    g.events.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("2024", vec!["a", "b"]),
                ("2023", vec![]),
                ("2022", vec!["c"]),
            ]
        );
        assert_eq!(groups[2].marker_index, 4);
    }

    #[test]
    fn group_by_year_skips_branch_nodes() {
        let nodes = vec![
            TimelineNode::Diverge,
            year("2024"),
            event("a", Alignment::Left),
            TimelineNode::Converge,
            event("b", Alignment::Right),
        ];

        let groups = group_by_year(&nodes).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].events.len(), 2);
        assert_eq!(groups[0].marker_index, 1);
    }

    #[test]
    fn group_by_year_rejects_orphaned_event() {
        let nodes = vec![event("early", Alignment::Left), year("2024")];

        let err = group_by_year(&nodes).unwrap_err();

        assert_eq!(
            err,
            Error::OrphanedEvent {
                index: 0,
                title: "early".to_string()
            }
        );
    }

    #[test]
    fn final_node_may_draw_a_line() {
        let nodes = vec![year("2024"), event("last", Alignment::Left)];
        let timeline = Timeline::new(nodes);

        assert!(timeline.validate().is_ok());
        assert!(timeline.group_by_year().is_ok());
    }

    #[test_case(ItemSize::Small, "small"; "small")]
    #[test_case(ItemSize::Large, "large"; "large")]
    fn item_size_displays_as_serialized(size: ItemSize, expected: &str) {
        assert_eq!(size.to_string(), expected);
        assert_eq!(serde_json::to_value(size).unwrap(), expected);
    }

    #[test]
    fn deserializes_tagged_nodes() {
        let yaml = r"
- type: checkpoint
  title: '2024'
  size: large
  shouldDrawLine: false
  alignment: leftSide
- type: diverge
- type: checkpoint
  title: Joined
  size: small
  subtitle: As a consultant
  slideImage: /timeline/join.png
  shouldDrawLine: true
  alignment: right
- type: converge
";
        let timeline: Timeline = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline[1], TimelineNode::Diverge);
        assert_eq!(timeline[3], TimelineNode::Converge);
        let joined = timeline[2].as_checkpoint().unwrap();
        assert_eq!(joined.alignment, Alignment::Right);
        assert_eq!(joined.image, None);
        assert_eq!(joined.slide_image.as_deref(), Some("/timeline/join.png"));
    }

    #[test]
    fn serializes_optional_fields_as_null() {
        let value = serde_json::to_value(year("2024")).unwrap();

        assert_eq!(value["type"], "checkpoint");
        assert_eq!(value["alignment"], "leftSide");
        assert_eq!(value["shouldDrawLine"], false);
        assert!(value["subtitle"].is_null());
        assert!(value.as_object().unwrap().contains_key("slideImage"));
    }
}
