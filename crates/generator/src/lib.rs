//! Parameter derivation and template instantiation for coregen
//!
//! The engine turns catalog entries into source trees. For each selected
//! scheme it derives the numeric constants the templates need, decides which
//! optional modules and code regions apply, and instantiates every template
//! into the scheme's main and test directories.
//!
//! All disk access goes through [`fs::FileSystem`], so a whole session can be
//! run against [`fs::MemoryFs`].

pub mod config;
pub mod derive;
pub mod dispatcher;
pub mod driver;
pub mod features;
pub mod fs;
pub mod generate;
pub mod layout;
pub mod orchestrator;
pub mod template;
pub mod tokens;

pub use config::GeneratorConfig;
pub use derive::{derive_curve, derive_rsa, CurveParams, RsaParams};
pub use dispatcher::{dispatch, Registration, REGISTRY};
pub use driver::{
    run_session, Outcome, SelectionDriver, SelectionReader, SelectionSet, SelectionSource,
    SessionReport,
};
pub use features::{select_features, Features, ModuleSet, Region, RegionState};
pub use fs::{FileSystem, LocalFs, MemoryFs};
pub use generate::{generate_curve, generate_rsa, GeneratedScheme, Generator, GeneratorFn};
pub use orchestrator::Orchestrator;
pub use template::TemplateInstantiator;
pub use tokens::TokenMap;
