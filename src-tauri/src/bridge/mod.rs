//! Bridge Layer
//!
//! Receives encoded view commands and pushes task snapshots back.

mod host;
mod publisher;

pub use host::{HandleOutcome, TodoHost};
pub use publisher::SnapshotPublisher;
