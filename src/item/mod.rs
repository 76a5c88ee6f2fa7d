//! Inventory record subsystem.
//!
//! # Data Flow
//! ```text
//! inbound JSON body
//!     → serde (syntactic validation: field presence, text vs. integer)
//!     → types.rs (calendar-date validation + canonical normalization)
//!     → forwarded verbatim to the upstream store
//! ```
//!
//! # Design Decisions
//! - Date fields stay textual end to end; parsing only proves they name a
//!   real calendar date and rewrites them zero-padded
//! - Field names on the wire are identical inbound and outbound

pub mod types;

pub use types::{DateError, FridgeItem, DATE_FORMAT};
