use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional page sections are rendered.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file hides all optional sections.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Team grid on the home page.
    #[serde(default)]
    pub team_section: bool,
    /// Product video section with the lightbox player.
    #[serde(default)]
    pub video_section: bool,
    /// "Latest from the blog" teaser on the home page.
    #[serde(default)]
    pub blog_teaser: bool,
    #[serde(default)]
    pub testimonials: bool,
}
