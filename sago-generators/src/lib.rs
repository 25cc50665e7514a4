//! Built-in DSL generators for sago.
//!
//! Each generator recognizes one dynamic-member-creation pattern reported
//! in the reflection snapshot and emits the matching declaration fragments.

mod sidekiq_worker;
mod smart_properties;
mod state_machine;

pub use sidekiq_worker::SidekiqWorker;
pub use smart_properties::SmartProperties;
pub use state_machine::StateMachine;

use sago_dsl::GeneratorRegistry;

/// Registry preloaded with every built-in generator.
pub fn builtin_registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register(SidekiqWorker);
    registry.register(SmartProperties);
    registry.register(StateMachine);
    registry
}
