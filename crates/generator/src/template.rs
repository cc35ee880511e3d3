//! Copying templates and substituting their placeholders

use crate::fs::FileSystem;
use crate::tokens::{find_placeholder, TokenMap};
use coregen_api::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Instantiates templates from one template directory
///
/// Destination directories must already exist.
pub struct TemplateInstantiator<'a> {
    fs: &'a dyn FileSystem,
    template_dir: &'a Path,
}

impl<'a> TemplateInstantiator<'a> {
    pub fn new(fs: &'a dyn FileSystem, template_dir: &'a Path) -> Self {
        Self { fs, template_dir }
    }

    pub fn template_dir(&self) -> &Path {
        self.template_dir
    }

    /// Full path of a template, failing if it is absent
    pub fn template_path(&self, template: &str) -> Result<PathBuf> {
        let path = self.template_dir.join(template);
        if self.fs.is_file(&path) {
            Ok(path)
        } else {
            Err(Error::MissingTemplate { path })
        }
    }

    /// Copy a template verbatim
    pub fn copy(&self, template: &str, destination: &Path) -> Result<()> {
        let source = self.template_path(template)?;
        self.fs.copy(&source, destination).map_err(|source| Error::Io {
            context: format!("copying {template} to {}", destination.display()),
            source,
        })?;
        debug!(template, destination = %destination.display(), "copied");
        Ok(())
    }

    /// Copy a template, then rewrite every token of `tokens` in place
    ///
    /// A failure after the copy leaves the unsubstituted copy behind and is
    /// reported as [`Error::PartialWrite`].
    pub fn instantiate(&self, template: &str, destination: &Path, tokens: &TokenMap) -> Result<()> {
        self.copy(template, destination)?;

        let partial = |source: std::io::Error| Error::PartialWrite {
            path: destination.to_path_buf(),
            source,
        };
        let text = self.fs.read_to_string(destination).map_err(partial)?;
        let rendered = tokens.apply(&text);
        self.fs.write(destination, &rendered).map_err(partial)?;

        if let Some(token) = find_placeholder(&rendered) {
            return Err(Error::UnresolvedPlaceholder {
                token: token.to_owned(),
                path: destination.to_path_buf(),
            });
        }
        debug!(template, destination = %destination.display(), tokens = tokens.len(), "instantiated");
        Ok(())
    }
}
