//! Solar Panel Fault Knowledge Base
//!
//! Static catalog mapping each fault class to a structured repair and
//! prevention record. Lookups are total: unrecognized names resolve to a
//! fixed default record instead of failing.

mod catalog;
mod record;

pub use catalog::{catalog, list_fault_types, lookup};
pub use record::{FaultRecord, Severity};
