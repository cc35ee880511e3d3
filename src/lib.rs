//! # coregen
//!
//! Generates per-scheme source trees for elliptic curves, pairing-friendly
//! curves and RSA from a fixed parameter catalog and a directory of templates.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`coregen-api`]: Error and result types
//! - [`coregen-params`]: The curve and RSA parameter catalog
//! - [`coregen-generator`]: Derivation, feature selection and template instantiation
//!
//! ## Usage
//!
//! ```no_run
//! use coregen::prelude::*;
//!
//! let config = GeneratorConfig::default().with_template_dir("java");
//! let fs = LocalFs;
//! let mut selection = vec![1u32, 26, 0].into_iter();
//! let report = Orchestrator::new(&config, &fs).run(&mut selection)?;
//! assert!(report.is_success());
//! # Ok::<(), coregen::api::Error>(())
//! ```

pub use coregen_api as api;
pub use coregen_generator as generator;
pub use coregen_params as params;

/// Common imports for coregen users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Catalog
    pub use crate::params::{lookup, CatalogEntry, Scheme, SchemeKind, CATALOG};

    // Engine
    pub use crate::generator::{
        FileSystem, GeneratorConfig, LocalFs, MemoryFs, Orchestrator, SelectionReader,
        SessionReport,
    };
}
