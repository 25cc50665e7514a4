//! Generator for background-job base classes that define class-level
//! enqueueing methods from the worker's `perform` arguments.

use sago_app::TypeEntry;
use sago_dsl::{Generator, GeneratorError, MethodSignature, Param, SignatureFragment};
use serde::Deserialize;

/// Pattern key in the reflection snapshot.
const PATTERN: &str = "sidekiq_worker";

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    perform_args: Vec<PerformArg>,
}

#[derive(Debug, Deserialize)]
struct PerformArg {
    name: String,
    #[serde(default, rename = "type")]
    sorbet_type: Option<String>,
}

impl PerformArg {
    fn param(&self) -> Param {
        match &self.sorbet_type {
            Some(sorbet_type) => Param::new(self.name.clone(), sorbet_type.clone()),
            None => Param::untyped(self.name.clone()),
        }
    }
}

/// Emits `perform_async`, `perform_at`, and `perform_in` for worker classes.
pub struct SidekiqWorker;

impl Generator for SidekiqWorker {
    fn name(&self) -> &'static str {
        "SidekiqWorker"
    }

    fn applies(&self, entry: &TypeEntry) -> bool {
        entry.dsl.contains_key(PATTERN)
    }

    fn emit(&self, entry: &TypeEntry) -> Result<Vec<SignatureFragment>, GeneratorError> {
        let Some(value) = entry.dsl.get(PATTERN) else {
            return Ok(Vec::new());
        };
        let payload: Payload = serde_json::from_value(value.clone())?;
        let args: Vec<Param> = payload.perform_args.iter().map(PerformArg::param).collect();

        let with_interval = |interval_type: &str| {
            let mut params = vec![Param::new("interval", interval_type)];
            params.extend(args.iter().cloned());
            params
        };

        Ok(vec![
            SignatureFragment::new(
                entry.name.clone(),
                MethodSignature::class_level("perform_async", args.clone(), "String"),
            ),
            SignatureFragment::new(
                entry.name.clone(),
                MethodSignature::class_level(
                    "perform_at",
                    with_interval("T.any(DateTime, Time)"),
                    "String",
                ),
            ),
            SignatureFragment::new(
                entry.name.clone(),
                MethodSignature::class_level("perform_in", with_interval("Numeric"), "String"),
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use sago_app::Application;

    use super::*;

    fn job() -> TypeEntry {
        let app = Application::from_json(
            r#"{
                "version": 1,
                "types": [{
                    "name": "Job",
                    "dsl": {
                        "sidekiq_worker": {
                            "perform_args": [{"name": "foo"}, {"name": "bar"}]
                        }
                    }
                }]
            }"#,
            "reflection.json",
        )
        .unwrap();
        app.types[0].clone()
    }

    #[test]
    fn test_emits_the_three_enqueueing_methods() {
        let fragments = SidekiqWorker.emit(&job()).unwrap();
        let names: Vec<&str> = fragments
            .iter()
            .map(|f| f.signature.name.as_str())
            .collect();
        assert_eq!(names, ["perform_async", "perform_at", "perform_in"]);
    }

    #[test]
    fn test_interval_parameter_comes_first() {
        let fragments = SidekiqWorker.emit(&job()).unwrap();
        assert_eq!(
            fragments[1].signature.render(0),
            "sig { params(interval: T.any(DateTime, Time), foo: T.untyped, bar: T.untyped).returns(String) }\n\
             def self.perform_at(interval, foo, bar); end"
        );
        assert_eq!(
            fragments[2].signature.render(0),
            "sig { params(interval: Numeric, foo: T.untyped, bar: T.untyped).returns(String) }\n\
             def self.perform_in(interval, foo, bar); end"
        );
    }

    #[test]
    fn test_typed_perform_args_are_respected() {
        let app = Application::from_json(
            r#"{
                "version": 1,
                "types": [{
                    "name": "MailerJob",
                    "dsl": {
                        "sidekiq_worker": {
                            "perform_args": [{"name": "user_id", "type": "Integer"}]
                        }
                    }
                }]
            }"#,
            "reflection.json",
        )
        .unwrap();
        let fragments = SidekiqWorker.emit(&app.types[0]).unwrap();
        assert_eq!(fragments[0].signature.params[0].sorbet_type, "Integer");
    }

    #[test]
    fn test_worker_without_args_still_enqueues() {
        let app = Application::from_json(
            r#"{"version": 1, "types": [{"name": "PingJob", "dsl": {"sidekiq_worker": {}}}]}"#,
            "reflection.json",
        )
        .unwrap();
        let fragments = SidekiqWorker.emit(&app.types[0]).unwrap();
        assert_eq!(
            fragments[0].signature.render(0),
            "sig { returns(String) }\ndef self.perform_async; end"
        );
    }
}
