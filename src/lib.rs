//! Taskpad
//!
//! A task list synchronized with a remote HTTP store.
//!
//! Layered architecture:
//! - domain: Task entity, validation, and error taxonomy
//! - store: persistence abstraction (remote HTTP store, in-memory store)
//! - controller: local state ownership and sync discipline

pub mod controller;
pub mod domain;
pub mod store;

pub use controller::TaskListController;
pub use domain::{DomainError, DomainResult, Task};
pub use store::{HttpTaskStore, InMemoryTaskStore, TaskStore, DEFAULT_BASE_URL};
