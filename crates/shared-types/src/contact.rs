use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Topics offered on the contact form.
pub const CONTACT_TOPICS: &[&str] = &[
    "Product demo",
    "Pricing",
    "Institutional subscription",
    "Technical support",
    "Other",
];

/// Contact form submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ContactRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Please choose a topic"))
    )]
    pub topic: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 10, message = "Message must be at least 10 characters"))
    )]
    pub message: String,
}
