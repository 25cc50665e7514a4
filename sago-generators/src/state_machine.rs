//! Generator for state-machine DSLs that define predicate and event
//! methods from declared states and transitions.

use sago_app::TypeEntry;
use sago_dsl::{Generator, GeneratorError, MethodSignature, SignatureFragment};
use serde::Deserialize;

/// Pattern key in the reflection snapshot.
const PATTERN: &str = "state_machine";

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    states: Vec<String>,
    #[serde(default)]
    events: Vec<String>,
}

/// Emits a `<state>?` predicate per state and a `<event>!` method per event.
pub struct StateMachine;

impl Generator for StateMachine {
    fn name(&self) -> &'static str {
        "StateMachine"
    }

    fn applies(&self, entry: &TypeEntry) -> bool {
        entry.dsl.contains_key(PATTERN)
    }

    fn emit(&self, entry: &TypeEntry) -> Result<Vec<SignatureFragment>, GeneratorError> {
        let Some(value) = entry.dsl.get(PATTERN) else {
            return Ok(Vec::new());
        };
        let payload: Payload = serde_json::from_value(value.clone())?;

        let mut fragments = Vec::new();
        for state in &payload.states {
            fragments.push(SignatureFragment::new(
                entry.name.clone(),
                MethodSignature::instance(format!("{state}?"), vec![], "T::Boolean"),
            ));
        }
        for event in &payload.events {
            fragments.push(SignatureFragment::new(
                entry.name.clone(),
                MethodSignature::instance(format!("{event}!"), vec![], "T::Boolean"),
            ));
        }
        Ok(fragments)
    }
}
