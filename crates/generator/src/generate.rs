//! Curve and RSA generators
//!
//! A generator derives a scheme's constants, resolves its features, creates
//! its two directories and instantiates every template the scheme needs.

use crate::config::GeneratorConfig;
use crate::derive::{derive_curve, derive_rsa};
use crate::features::select_features;
use crate::fs::FileSystem;
use crate::layout::{self, TemplateFile, Tree, JAVA_COMMENTS};
use crate::template::TemplateInstantiator;
use crate::tokens::{curve_tokens, rsa_tokens, TokenMap};
use coregen_api::{Error, Result, ResultExt};
use coregen_params::{Scheme, SchemeKind};
use std::path::PathBuf;
use tracing::info;

/// Files written for one scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScheme {
    pub name: &'static str,
    pub kind: SchemeKind,
    pub files: Vec<PathBuf>,
}

/// Shared context of the generator functions
pub struct Generator<'a> {
    config: &'a GeneratorConfig,
    fs: &'a dyn FileSystem,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a GeneratorConfig, fs: &'a dyn FileSystem) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.config
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs
    }

    pub fn instantiator(&self) -> TemplateInstantiator<'a> {
        TemplateInstantiator::new(self.fs, &self.config.template_dir)
    }

    /// Create the main and test directories of a scheme
    fn scheme_dirs(&self, name: &str) -> Result<(PathBuf, PathBuf)> {
        let main = self.config.scheme_main_dir(name);
        let test = self.config.scheme_test_dir(name);
        for dir in [&main, &test] {
            self.fs
                .create_dir_all(dir)
                .io_context(|| format!("creating {}", dir.display()))?;
        }
        Ok((main, test))
    }

    /// Instantiate `files` for the scheme `name`, appending written paths
    fn emit(
        &self,
        name: &str,
        files: &[TemplateFile],
        tokens: &TokenMap,
        dirs: &(PathBuf, PathBuf),
        written: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let instantiator = self.instantiator();
        for file in files {
            let dir = match file.tree {
                Tree::Main => &dirs.0,
                Tree::Test => &dirs.1,
            };
            let destination = dir.join(file.output);
            let template = file.template_name(name);
            if file.substitute {
                instantiator.instantiate(&template, &destination, tokens)?;
            } else {
                instantiator.copy(&template, &destination)?;
            }
            written.push(destination);
        }
        Ok(())
    }
}

/// Signature shared by every generator
pub type GeneratorFn = fn(&Generator<'_>, &Scheme) -> Result<GeneratedScheme>;

/// Generate an elliptic curve, with its pairing modules if it has any
pub fn generate_curve(generator: &Generator<'_>, scheme: &Scheme) -> Result<GeneratedScheme> {
    let Scheme::Curve(spec) = *scheme else {
        return Err(Error::SchemeMismatch {
            name: scheme.name(),
            generator: "curve",
        });
    };

    let params = derive_curve(spec)?;
    let features = select_features(spec);
    let tokens = curve_tokens(spec, &params, &features, JAVA_COMMENTS)?;

    let dirs = generator.scheme_dirs(spec.name)?;
    let mut written = Vec::new();
    generator.emit(spec.name, layout::CURVE_FILES, &tokens, &dirs, &mut written)?;
    for set in features.modules() {
        generator.emit(spec.name, layout::module_files(*set), &tokens, &dirs, &mut written)?;
    }

    info!(
        curve = spec.name,
        bytes = params.modulus_bytes,
        shift = params.shift,
        tower = params.qnr.tower().as_token(),
        pairing = spec.pairing.as_token(),
        files = written.len(),
        "generated curve"
    );
    Ok(GeneratedScheme {
        name: spec.name,
        kind: scheme.kind(),
        files: written,
    })
}

/// Generate an RSA modulus size
pub fn generate_rsa(generator: &Generator<'_>, scheme: &Scheme) -> Result<GeneratedScheme> {
    let Scheme::Rsa(spec) = *scheme else {
        return Err(Error::SchemeMismatch {
            name: scheme.name(),
            generator: "RSA",
        });
    };

    let params = derive_rsa(spec)?;
    let tokens = rsa_tokens(spec, &params)?;

    let dirs = generator.scheme_dirs(spec.name)?;
    let mut written = Vec::new();
    generator.emit(spec.name, layout::RSA_FILES, &tokens, &dirs, &mut written)?;

    info!(
        rsa = spec.name,
        modulus_bits = params.modulus_bytes * 8,
        files = written.len(),
        "generated RSA"
    );
    Ok(GeneratedScheme {
        name: spec.name,
        kind: SchemeKind::Rsa,
        files: written,
    })
}
