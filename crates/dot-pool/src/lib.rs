//! Dot Pool
//!
//! Point-buy allocation for dot-rated traits: score tracks, fixed-budget
//! pools, priority-driven category groups and the repeating rows they hold.
//! Nothing in here touches the DOM; views render these types.

mod error;
mod pool;
mod priority;
mod rows;
mod track;

pub use error::{ClickRejected, RowError};
pub use pool::{PointPool, Slot};
pub use priority::{Category, Priority, PriorityGroup, PriorityTable, Trait};
pub use rows::{Row, RowId, RowList};
pub use track::{Click, DotTrack};
