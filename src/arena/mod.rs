//! Session layer: selections, the bot toggle, round play and reports.

pub mod report;
pub mod session;

pub use report::{BreakdownRow, RoundReport};
pub use session::{Arena, ArenaError};
