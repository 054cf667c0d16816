//! Judgment detail view: the fetch lifecycle and the record-to-sections mapping.

mod fetch;
mod sections;

pub use fetch::{failure_message, FetchState, FetchTicket, FetchTracker};
pub use sections::{
    body_sections, case_title, has_content, header_fields, scroll_script, trailing_sections,
    BodySection, SectionNav, SectionView, TrailingSection, BODY_SECTIONS, NOT_AVAILABLE,
};
