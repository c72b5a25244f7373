//! Authentication and profile backend
//!
//! The store talks to the backend only through [`AuthBackend`]; the
//! in-memory implementation keeps accounts for the lifetime of the process.

mod memory;
mod traits;

pub use memory::InMemoryBackend;
pub use traits::{AuthBackend, BackendError};

#[cfg(test)]
pub use traits::MockAuthBackend;
