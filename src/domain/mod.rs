//! Domain Layer
//!
//! Contains the task entity and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod task;

pub use error::{DomainError, DomainResult};
pub use task::Task;
