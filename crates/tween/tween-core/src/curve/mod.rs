//! Easing curve registry: thirty named curves plus a linear fallback.

pub mod functions;
pub mod registry;
pub mod types;

pub use registry::*;
pub use types::*;
