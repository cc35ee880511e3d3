//! Public error surface for the coregen workspace
//!
//! Every crate in the workspace reports failures through the single
//! [`Error`] type defined here, so a generation session can collect
//! per-scheme failures of any origin into one report.

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
