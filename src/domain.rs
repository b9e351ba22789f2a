//! Domain models for portfolio content.
//!
//! This module contains the content types consumed by the presentation layer,
//! the timeline traversal contract, and the content health checks.

/// Timeline nodes and their traversal.
pub mod timeline;
pub use timeline::{
    Alignment, Checkpoint, Error as TimelineError, ItemSize, Timeline, TimelineNode,
};

/// Project cards.
pub mod project;
pub use project::Project;

mod skills;
pub use skills::Skills;

mod site;
pub use site::{MenuLink, Metadata, SocialLinks};

mod config;
pub use config::Config;

/// Content health checks.
pub mod check;
pub use check::{Issue, Report, Severity};
