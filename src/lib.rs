//! Portfolio Content
//!
//! The declarative content of a personal portfolio website: metadata,
//! navigation, projects, skills and a career timeline, validated and exported
//! for a presentation layer.

pub mod domain;
pub use domain::{
    Alignment, Checkpoint, Config, ItemSize, MenuLink, Metadata, Project, Skills, SocialLinks,
    Timeline, TimelineError, TimelineNode,
};

pub mod content;
pub use content::Content;

/// Loading and saving content files.
pub mod storage;
pub use storage::{Format, LoadError, load_content};

pub mod media;
