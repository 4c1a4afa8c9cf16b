//! Task module
//!
//! This module contains the task model and the file-backed task store.

mod model;
mod store;

pub use model::*;
pub use store::{SortKey, TaskStore};
