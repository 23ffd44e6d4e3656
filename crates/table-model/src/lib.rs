//! Standcard Table Model
//!
//! Defines the core data contracts for standings cards:
//! - **Record:** One standings row (team plus four score columns)
//! - **Layout:** Declarative pixel geometry of a card template
//! - **Job:** Everything one render request needs, consumed once
//! - **Command:** The `/reg_table` request that starts a render
//!
//! Records are immutable once read; missing fields resolve to defaults
//! instead of failing.

pub mod command;
pub mod job;
pub mod layout;
pub mod record;

pub use command::*;
pub use job::*;
pub use layout::*;
pub use record::*;
