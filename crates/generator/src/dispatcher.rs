//! Selector to generator dispatch

use std::collections::BTreeMap;

use coregen_api::{Error, Result};
use coregen_params::{CatalogEntry, Scheme, CATALOG, CATALOG_SIZE};
use once_cell::sync::Lazy;

use crate::generate::{generate_curve, generate_rsa, GeneratedScheme, Generator, GeneratorFn};

/// A catalog entry bound to the generator that produces it
#[derive(Clone, Copy)]
pub struct Registration {
    pub entry: &'static CatalogEntry,
    pub generate: GeneratorFn,
}

impl Registration {
    pub fn run(&self, generator: &Generator<'_>) -> Result<GeneratedScheme> {
        (self.generate)(generator, &self.entry.scheme)
    }
}

/// Global registry keyed by selector
pub static REGISTRY: Lazy<BTreeMap<u32, Registration>> = Lazy::new(|| {
    let mut m = BTreeMap::new();
    for entry in CATALOG.iter() {
        let generate: GeneratorFn = match entry.scheme {
            Scheme::Curve(_) => generate_curve,
            Scheme::Rsa(_) => generate_rsa,
        };
        insert(&mut m, entry, generate);
    }
    m
});

/// Helper function for registering a generator
pub fn insert(
    map: &mut BTreeMap<u32, Registration>,
    entry: &'static CatalogEntry,
    generate: GeneratorFn,
) {
    map.insert(entry.id, Registration { entry, generate });
}

/// Registration for `id`; selectors outside the catalog are rejected
pub fn dispatch(id: u32) -> Result<&'static Registration> {
    REGISTRY.get(&id).ok_or_else(|| Error::UnknownScheme {
        id,
        max: CATALOG_SIZE,
    })
}
