//! Generator configuration
//!
//! Defaults reproduce the layout of the Java distribution: templates in the
//! working directory, output under `core/` as a Maven project.

use coregen_api::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where templates are read from and where generated trees go
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory holding the templates and shared sources
    pub template_dir: PathBuf,

    /// Root of the generated project; receives the build file
    pub output_root: PathBuf,

    /// Main source package, relative to `output_root`
    pub main_package: PathBuf,

    /// Test source package, relative to `output_root`
    pub test_package: PathBuf,

    /// Selection input read in test mode
    pub test_input: PathBuf,

    /// Build step run in `output_root` after a test-mode session
    pub build_command: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("."),
            output_root: PathBuf::from("core"),
            main_package: ["src", "main", "java", "org", "miracl", "core"].iter().collect(),
            test_package: ["src", "test", "java", "org", "miracl", "core"].iter().collect(),
            test_input: PathBuf::from("test.txt"),
            build_command: vec!["mvn".into(), "clean".into(), "install".into()],
        }
    }
}

// Builder methods for easy customization
impl GeneratorConfig {
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = dir.into();
        self
    }

    pub fn with_output_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_root = dir.into();
        self
    }

    pub fn with_test_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.test_input = path.into();
        self
    }

    pub fn with_build_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build_command = command.into_iter().map(Into::into).collect();
        self
    }
}

impl GeneratorConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Directory receiving shared main sources
    pub fn main_root(&self) -> PathBuf {
        self.output_root.join(&self.main_package)
    }

    /// Directory receiving shared tests
    pub fn test_root(&self) -> PathBuf {
        self.output_root.join(&self.test_package)
    }

    /// Main source directory of one scheme
    pub fn scheme_main_dir(&self, name: &str) -> PathBuf {
        self.main_root().join(name)
    }

    /// Test source directory of one scheme
    pub fn scheme_test_dir(&self, name: &str) -> PathBuf {
        self.test_root().join(name)
    }
}
