//! Shim module to abstract over std and loom primitives.
//!
//! The queue takes its lock from here, so the same code runs on `std::sync`
//! in production and under loom's model checker when the `loom` feature is on.

#[cfg(not(feature = "loom"))]
pub mod sync {
    pub use std::sync::{Mutex, MutexGuard};
}

#[cfg(feature = "loom")]
pub mod sync {
    pub use loom::sync::{Mutex, MutexGuard};
}
