pub mod contact;
pub mod home;
pub mod judgment;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod register;

use contact::Contact;
use dioxus::prelude::*;
use home::Home;
use judgment::JudgmentDetail;
use layout::SiteLayout;
use login::Login;
use not_found::NotFound;
use register::Register;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/judgments/:id")]
        JudgmentDetail { id: String },
        #[route("/contact")]
        Contact {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/:..route")]
        NotFound { route: Vec<String> },
}
