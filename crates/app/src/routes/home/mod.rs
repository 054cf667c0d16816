mod blog;
mod hero;
mod search_teaser;
mod showcase;
mod team;
mod testimonials;
mod video;

use dioxus::prelude::*;
use shared_types::FeatureFlags;

use blog::BlogTeaser;
use hero::Hero;
use search_teaser::SearchTeaser;
use showcase::{Features, Services};
use team::Team;
use testimonials::Testimonials;
use video::VideoSection;

/// Landing page. Optional sections follow the feature flags from config.
#[component]
pub fn Home() -> Element {
    let flags: FeatureFlags = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }
        Hero {}
        SearchTeaser {}
        Services {}
        Features {}
        if flags.video_section {
            VideoSection {}
        }
        if flags.testimonials {
            Testimonials {}
        }
        if flags.blog_teaser {
            BlogTeaser {}
        }
        if flags.team_section {
            Team {}
        }
    }
}
