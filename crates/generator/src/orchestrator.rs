//! Whole-run orchestration: shared tree, selection session, closing files

use coregen_api::{Error, Result, ResultExt};
use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::driver::{run_session, SelectionSource, SessionReport};
use crate::fs::FileSystem;
use crate::generate::Generator;
use crate::layout::{matches_pattern, BUILD_FILE, SHARED_FILES, SHARED_TEST_FILES};
use crate::template::TemplateInstantiator;

pub struct Orchestrator<'a> {
    config: &'a GeneratorConfig,
    fs: &'a dyn FileSystem,
}

impl<'a> Orchestrator<'a> {
    pub fn new(config: &'a GeneratorConfig, fs: &'a dyn FileSystem) -> Self {
        Self { config, fs }
    }

    /// Create the output tree and copy the build file and shared sources
    pub fn prepare(&self) -> Result<()> {
        let main_root = self.config.main_root();
        self.fs
            .create_dir_all(&main_root)
            .io_context(|| format!("creating {}", main_root.display()))?;

        let instantiator = self.instantiator();
        instantiator.copy(BUILD_FILE, &self.config.output_root.join(BUILD_FILE))?;

        let available = self
            .fs
            .list_files(&self.config.template_dir)
            .io_context(|| format!("listing {}", self.config.template_dir.display()))?;
        for pattern in SHARED_FILES {
            let matched: Vec<&String> = available
                .iter()
                .filter(|name| matches_pattern(name, pattern))
                .collect();
            if matched.is_empty() {
                return Err(Error::MissingTemplate {
                    path: self.config.template_dir.join(pattern),
                });
            }
            for name in matched {
                instantiator.copy(name, &main_root.join(name))?;
            }
        }
        info!(root = %self.config.output_root.display(), "prepared output tree");
        Ok(())
    }

    /// Copy the scheme-independent tests into the test root
    pub fn finish(&self) -> Result<()> {
        let test_root = self.config.test_root();
        self.fs
            .create_dir_all(&test_root)
            .io_context(|| format!("creating {}", test_root.display()))?;

        let instantiator = self.instantiator();
        for name in SHARED_TEST_FILES {
            instantiator.copy(name, &test_root.join(name))?;
            debug!(file = name, "copied shared test");
        }
        Ok(())
    }

    /// Prepare, run one selection session, then finish
    ///
    /// Only a failure of the shared tree is returned as an error. Scheme
    /// failures and a failure of [`finish`](Self::finish) are recorded in
    /// the report, so schemes already written are still reported.
    pub fn run<S>(&self, source: &mut S) -> Result<SessionReport>
    where
        S: SelectionSource + ?Sized,
    {
        self.prepare()?;
        let mut report = run_session(&self.generator(), source);
        if let Err(error) = self.finish() {
            warn!(%error, "copying shared tests failed");
            report.closing_error = Some(error);
        }

        info!(
            selected = report.selection.len(),
            generated = report.succeeded().count(),
            failed = report.failed().count(),
            "session finished"
        );
        Ok(report)
    }

    fn generator(&self) -> Generator<'a> {
        Generator::new(self.config, self.fs)
    }

    fn instantiator(&self) -> TemplateInstantiator<'a> {
        TemplateInstantiator::new(self.fs, &self.config.template_dir)
    }
}
