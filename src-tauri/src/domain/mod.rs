//! Domain Layer
//!
//! Host-side task rules. No Tauri types in here.

mod error;
mod task_list;

pub use error::{DomainError, DomainResult};
pub use task_list::TaskList;
