//! Store Layer
//!
//! Task persistence abstractions and implementations. The remote HTTP store
//! is the production backend; the in-memory store backs tests and demos.

mod error;
mod http;
mod memory;
mod traits;


pub use error::{StoreError, StoreResult};
pub use http::{HttpTaskStore, DEFAULT_BASE_URL};
pub use memory::InMemoryTaskStore;
pub use traits::TaskStore;
