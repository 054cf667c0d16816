// Building blocks
pub mod alert;
pub mod button;
pub mod card;
pub mod input;
pub mod modal;
pub mod skeleton;

// Dropdown family: shared pieces first, then the three shells
pub mod dropdown;
pub mod multi_select;
pub mod results_filter;
pub mod searchable_select;

// Judgment detail
pub mod section_tabs;

pub use alert::*;
pub use button::*;
pub use card::*;
pub use dropdown::{
    DropdownEmpty, DropdownFrame, DropdownOption, DropdownPanel, DropdownSearch, DropdownStatus,
};
pub use input::*;
pub use modal::*;
pub use multi_select::*;
pub use results_filter::*;
pub use searchable_select::*;
pub use section_tabs::*;
pub use skeleton::*;
