//! The portfolio's authored content.
//!
//! Every export is immutable and initialized at most once per process.
//! [`Content`] bundles them into a single owned value for checking and export.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::domain::{
    Alignment, Checkpoint, ItemSize, MenuLink, Metadata, Project, Skills, SocialLinks, Timeline,
    TimelineNode,
};

/// Page head and SEO metadata.
pub static METADATA: LazyLock<Metadata> = LazyLock::new(|| Metadata {
    title: "Portfolio | Taylor Tang".to_string(),
    description: "ML Engineer building AI systems that bridge cutting-edge research with \
                  real-world impact"
        .to_string(),
    site_url: "https://taylortang.dev/".to_string(),
});

/// Navigation entries in menu order.
pub static MENULINKS: LazyLock<Vec<MenuLink>> = LazyLock::new(|| {
    [
        ("Home", "home"),
        ("Works", "works"),
        ("Skills", "skills"),
        ("Timeline", "timeline"),
        ("Contact", "contact"),
    ]
    .into_iter()
    .map(|(name, anchor)| MenuLink {
        name: name.to_string(),
        anchor: anchor.to_string(),
    })
    .collect()
});

/// Lines cycled by the hero section's typing animation.
pub const TYPED_STRINGS: &[&str] = &[
    "I build AI systems that solve real problems",
    "I develop computer vision solutions",
    "I create intelligent automation pipelines",
    "I bridge research with production ML",
];

/// Contact address.
pub const EMAIL: &str = "tay.tang@outlook.com";

/// Social profiles keyed by platform.
pub static SOCIAL_LINKS: LazyLock<SocialLinks> = LazyLock::new(|| {
    SocialLinks::from([
        (
            "linkedin".to_string(),
            "https://www.linkedin.com/in/taylor-tang/".to_string(),
        ),
        (
            "github".to_string(),
            "https://github.com/TangChao729".to_string(),
        ),
    ])
});

/// Analytics tracking id.
pub const GTAG: &str = "UA-163844688-1";

fn project(
    name: &str,
    slug: &str,
    description: &str,
    gradient: [&str; 2],
    tech: &[&str],
) -> Project {
    Project {
        name: name.to_string(),
        image: format!("/projects/{slug}.png"),
        blur_image: format!("/projects/blur/{slug}-blur.png"),
        description: description.to_string(),
        gradient: gradient.map(str::to_string),
        url: "#".to_string(),
        tech: tech.iter().map(ToString::to_string).collect(),
    }
}

/// Project cards in gallery order.
pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![
        project(
            "AI Agents Red Team Testing",
            "red-teaming-test",
            "Led red team testing of commercial AI agentic framework, executing 5,000+ test \
             cases across 15 attack vectors.",
            ["#FF6B6B", "#EE5A24"],
            &["python", "promptfoo", "claude", "openai"],
        ),
        project(
            "Australia Age Assurance Technology Trial",
            "aatt",
            "Built testing platform for Australia Age Assurance Trial, facilitating testing \
             with 1,100+ participants.",
            ["#0052D4", "#4364F7"],
            &["react", "typescript", "face-rec", "postgresql", "aws"],
        ),
        project(
            "Feral Animal Detection System",
            "feral-ai",
            "Detected feral animals using thermal drone footage to support wildlife \
             management.",
            ["#667eea", "#764ba2"],
            &["pytorch", "yolo", "cvat", "drone", "clearml"],
        ),
        project(
            "AI-Powered Game Industry Intelligence",
            "game_pulse",
            "Automated intelligence system processing steam & reddit data, reducing manual \
             research time by 80%.",
            ["#00C9FF", "#92FE9D"],
            &["react", "python", "openai", "claude", "vectordb"],
        ),
        project(
            "Road Safety Monitoring System",
            "roadscan",
            "Urban management assistant analyzing road footage for potholes & cracks for \
             quicker, targeted repairs.",
            ["#FC466B", "#3F5EFB"],
            &["pytorch", "yolo", "gcp"],
        ),
        project(
            "National Bushfire Analysis Using Satellite Imagery",
            "bushfire",
            "Published paper at IEEE eScience 2024, using satellite imagery & computer vision \
             to detect bushfires.",
            ["#fa709a", "#fee140"],
            &["pytorch", "nvidia", "satellite", "gcp"],
        ),
    ]
});

/// Skill tags grouped by category, in display order.
pub static SKILLS: LazyLock<Skills> = LazyLock::new(|| {
    let categories: [(&str, &[&str]); 4] = [
        ("Programming", &["python", "javascript", "typescript", "git"]),
        ("Computer Vision", &["pytorch", "yolo", "huggingface"]),
        ("Large Language Models", &["ollama", "claude", "clip"]),
        ("Cloud Computing", &["aws", "gcp", "azure"]),
    ];
    categories
        .into_iter()
        .map(|(name, skills)| (name, skills.iter().copied()))
        .collect()
});

fn year(title: &str) -> TimelineNode {
    TimelineNode::Checkpoint(Checkpoint {
        title: title.to_string(),
        subtitle: None,
        size: ItemSize::Large,
        image: None,
        slide_image: None,
        should_draw_line: false,
        alignment: Alignment::Left,
    })
}

fn event(title: &str, subtitle: &str, image: &str, slide_image: &str) -> TimelineNode {
    TimelineNode::Checkpoint(Checkpoint {
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        size: ItemSize::Small,
        image: Some(format!("/timeline/{image}")),
        slide_image: Some(format!("/timeline/{slide_image}")),
        should_draw_line: true,
        alignment: Alignment::Left,
    })
}

/// Career timeline, most recent first.
pub static TIMELINE: LazyLock<Timeline> = LazyLock::new(|| {
    Timeline::new(vec![
        year("2024"),
        event(
            "Joined KJR",
            "As a Machine Learning Consultant",
            "9_kjr.png",
            "9_join_kjr.PNG",
        ),
        event(
            "Awards & Achievements",
            "My hall of fame",
            "4_uom.jpg",
            "6_hall_of_fame.jpg",
        ),
        event(
            "Published first research paper ",
            "At IEEE eScience 2024",
            "4_uom.jpg",
            "7_eScience.jpeg",
        ),
        event(
            "Graduated with Distinction",
            "From The University of Melbourne",
            "4_uom.jpg",
            "6_graduation.jpg",
        ),
        event(
            "Started internship at Vision HQ",
            "Developed computer vision system for road safety monitoring",
            "8_vision_hq.jpeg",
            "8_road_scan.png",
        ),
        year("2023"),
        event(
            "Dean's Award",
            "Recipient of the Dean's Award for academic excellence",
            "4_uom.jpg",
            "5_dean.JPG",
        ),
        event(
            "Master of IT (AI Major)",
            "Enrolled at The University of Melbourne",
            "4_uom.jpg",
            "4_uom_welcome.jpg",
        ),
        year("2022"),
        event(
            "Learning to code",
            "Self-supervised coding study on Coursera.",
            "3_coursera.png",
            "3_pong2.png",
        ),
        year("2021"),
        event(
            "Quit Project Manager job",
            "To pursue my passion for programming",
            "2_tnt.png",
            "2_pm.JPG",
        ),
        year("2016"),
        event(
            "Dive Instructor",
            "Worked as a dive instructor at Tangalooma Island Resort",
            "1_tangalooma.webp",
            "1_dive_instructor.jpg",
        ),
    ])
});

/// All portfolio content as one owned value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    /// Page head and SEO metadata.
    pub metadata: Metadata,
    /// Navigation entries.
    pub menu_links: Vec<MenuLink>,
    /// Typing animation lines.
    pub typed_strings: Vec<String>,
    /// Contact address.
    pub email: String,
    /// Social profiles.
    pub social_links: SocialLinks,
    /// Project cards.
    pub projects: Vec<Project>,
    /// Skills taxonomy.
    pub skills: Skills,
    /// Career timeline.
    pub timeline: Timeline,
    /// Analytics tracking id.
    pub gtag: String,
}

impl Content {
    /// Returns a copy of the built-in content.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            metadata: METADATA.clone(),
            menu_links: MENULINKS.clone(),
            typed_strings: TYPED_STRINGS.iter().map(ToString::to_string).collect(),
            email: EMAIL.to_string(),
            social_links: SOCIAL_LINKS.clone(),
            projects: PROJECTS.clone(),
            skills: SKILLS.clone(),
            timeline: TIMELINE.clone(),
            gtag: GTAG.to_string(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}
