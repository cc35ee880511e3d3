//! Error handling for scheme generation

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;
