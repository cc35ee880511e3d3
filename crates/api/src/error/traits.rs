//! Error handling traits

use super::types::{Error, Result};
use std::io;

/// Extension trait attaching generation context to I/O results
pub trait ResultExt<T>: Sized {
    /// Convert an I/O failure into [`Error::Io`] described by `context`
    fn io_context<F, C>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> ResultExt<T> for core::result::Result<T, io::Error> {
    fn io_context<F, C>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|source| Error::Io {
            context: context().into(),
            source,
        })
    }
}
