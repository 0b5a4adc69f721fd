//! Problem data model.
//!
//! An [`Instance`] holds the immutable problem data (capacities,
//! weights, profits, and an optional reference solution); an
//! [`Assignment`] is the mutable search state mapping objects to
//! knapsacks.

mod assignment;
mod instance;

pub use assignment::Assignment;
pub use instance::{Instance, ModelError};
