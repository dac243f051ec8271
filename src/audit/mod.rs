//! Audit logging
//!
//! Records every mutation of the entry collection and the budget map in an
//! append-only JSONL file next to the data directory.
//!
//! - `AuditEntry`: one record with timestamp, operation, entity and the
//!   before/after values
//! - `AuditLogger`: appends records and reads them back

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation, ALL_ENTITIES};
pub use logger::AuditLogger;
