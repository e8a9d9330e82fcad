//! UI Components
//!
//! Leptos views over the sheet store.

mod catalog_select;
mod dots;
mod identity;
mod pool_section;
mod priority_section;
mod selection_list;

pub use identity::IdentitySection;
pub use pool_section::PoolSection;
pub use priority_section::PrioritySection;
pub use selection_list::SelectionList;
