//! Generator plugin contract and registry.

use indexmap::IndexMap;
use sago_app::TypeEntry;
use thiserror::Error;

use crate::error::DslError;
use crate::fragment::SignatureFragment;

/// Failure raised by a generator while processing one type.
///
/// Faults are isolated to the failing type × generator pair; the pipeline
/// reports them and keeps going.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct GeneratorError(String);

impl GeneratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        Self(format!("invalid pattern payload ({err})"))
    }
}

/// A pluggable unit that recognizes one dynamic-member-creation pattern and
/// emits declaration fragments for matching types.
///
/// Generators are stateless with respect to the pipeline: `emit` may be
/// called for any number of types in any order and must not retain state
/// between invocations.
pub trait Generator: Send + Sync {
    /// Unique name within the registry, used by include/exclude filters.
    fn name(&self) -> &'static str;

    /// Whether this generator recognizes its pattern on the given type.
    fn applies(&self, entry: &TypeEntry) -> bool;

    /// Produce declaration fragments for the given type. May be empty.
    fn emit(&self, entry: &TypeEntry) -> Result<Vec<SignatureFragment>, GeneratorError>;
}

/// The set of available generators, keyed by name.
///
/// Populated once at process start from the statically known generator
/// implementations; iteration follows registration order.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: IndexMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator. A later registration under the same name
    /// replaces the earlier one.
    pub fn register(&mut self, generator: impl Generator + 'static) {
        self.generators
            .insert(generator.name().to_string(), Box::new(generator));
    }

    /// Registered generator names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    /// Compute the generator set for this run.
    ///
    /// Supplying both an include and an exclude list is a user error. Every
    /// include/exclude name that matches no registered generator is
    /// reported; any error aborts the run before generation starts.
    pub fn select(
        &self,
        include: &[String],
        exclude: &[String],
    ) -> Result<Vec<&dyn Generator>, Vec<DslError>> {
        if !include.is_empty() && !exclude.is_empty() {
            return Err(vec![DslError::ConflictingFilters]);
        }

        let filter = if !include.is_empty() { include } else { exclude };
        let unknown: Vec<DslError> = filter
            .iter()
            .filter(|name| !self.generators.contains_key(*name))
            .map(|name| DslError::UnknownGenerator(name.clone()))
            .collect();
        if !unknown.is_empty() {
            return Err(unknown);
        }

        let selected = self
            .generators
            .iter()
            .filter(|(name, _)| {
                if !include.is_empty() {
                    include.contains(*name)
                } else {
                    !exclude.contains(*name)
                }
            })
            .map(|(_, generator)| generator.as_ref())
            .collect();
        Ok(selected)
    }
}
