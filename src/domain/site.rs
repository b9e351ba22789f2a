use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Page head and SEO metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Document title.
    pub title: String,
    /// Meta description.
    pub description: String,
    /// Canonical site URL.
    pub site_url: String,
}

/// A navigation entry pointing at a section anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLink {
    /// Label shown in the menu.
    pub name: String,
    /// Anchor id of the target section.
    #[serde(rename = "ref")]
    pub anchor: String,
}

/// Social profile URLs keyed by platform, in authoring order.
pub type SocialLinks = IndexMap<String, String>;
