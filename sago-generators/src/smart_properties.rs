//! Generator for property DSLs that define typed attribute accessors.

use sago_app::TypeEntry;
use sago_dsl::{Generator, GeneratorError, MethodSignature, Param, SignatureFragment};
use serde::Deserialize;

/// Pattern key in the reflection snapshot.
const PATTERN: &str = "smart_properties";

#[derive(Debug, Deserialize)]
struct Payload {
    properties: Vec<Property>,
}

#[derive(Debug, Deserialize)]
struct Property {
    name: String,
    #[serde(default)]
    accepts: Option<String>,
    #[serde(default)]
    required: bool,
}

impl Property {
    fn sorbet_type(&self) -> String {
        match &self.accepts {
            None => "T.untyped".to_string(),
            Some(accepts) if self.required => format!("::{}", accepts),
            Some(accepts) => format!("T.nilable(::{})", accepts),
        }
    }
}

/// Emits a getter/setter pair for every declared property.
pub struct SmartProperties;

impl Generator for SmartProperties {
    fn name(&self) -> &'static str {
        "SmartProperties"
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
        for property in &payload.properties {
            let sorbet_type = property.sorbet_type();
            fragments.push(SignatureFragment::new(
                entry.name.clone(),
                MethodSignature::instance(property.name.clone(), vec![], sorbet_type.clone()),
            ));
            fragments.push(SignatureFragment::new(
                entry.name.clone(),
                MethodSignature::instance(
                    format!("{}=", property.name),
                    vec![Param::new(property.name.clone(), sorbet_type.clone())],
                    sorbet_type,
                ),
            ));
        }
        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use sago_app::Application;

    use super::*;

    fn post() -> TypeEntry {
        let app = Application::from_json(
            r#"{
                "version": 1,
                "types": [{
                    "name": "Post",
                    "dsl": {
                        "smart_properties": {
                            "properties": [
                                {"name": "title", "accepts": "String"},
                                {"name": "body", "accepts": "String", "required": true},
                                {"name": "extra"}
                            ]
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
    fn test_applies_to_pattern_key_only() {
        let generator = SmartProperties;
        assert!(generator.applies(&post()));

        let app = Application::from_json(
            r#"{"version": 1, "types": [{"name": "User"}]}"#,
            "reflection.json",
        )
        .unwrap();
        assert!(!generator.applies(&app.types[0]));
    }

    #[test]
    fn test_emits_accessor_pairs_in_declaration_order() {
        let fragments = SmartProperties.emit(&post()).unwrap();
        let names: Vec<&str> = fragments
            .iter()
            .map(|f| f.signature.name.as_str())
            .collect();
        assert_eq!(names, ["title", "title=", "body", "body=", "extra", "extra="]);
    }

    #[test]
    fn test_type_mapping() {
        let fragments = SmartProperties.emit(&post()).unwrap();
        assert_eq!(fragments[0].signature.returns, "T.nilable(::String)");
        assert_eq!(fragments[2].signature.returns, "::String");
        assert_eq!(fragments[4].signature.returns, "T.untyped");
    }

    #[test]
    fn test_malformed_payload_is_a_fault() {
        let app = Application::from_json(
            r#"{"version": 1, "types": [{"name": "Post", "dsl": {"smart_properties": {"properties": 3}}}]}"#,
            "reflection.json",
        )
        .unwrap();
        assert!(SmartProperties.emit(&app.types[0]).is_err());
    }
}
