//! Components and view-state machines for the CaseFinder site.
//!
//! Pure state lives in [`selection`], [`detail`] and [`scoped`]; the Dioxus
//! components in [`components`] are thin views over it.

pub mod components;
pub mod detail;
pub mod scoped;
pub mod selection;

pub use components::*;
