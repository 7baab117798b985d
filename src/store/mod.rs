//! Session state for the expense tracker
//!
//! The record store owns the expense list and the goals. It lives only as long
//! as the session that created it; nothing here is written to disk.

pub mod records;

pub use records::RecordStore;
