//! Schema validation over workspace YAML files

use miette::Diagnostic;
use thiserror::Error;

use crate::schema::registry::{SchemaKind, SchemaRegistry};

/// One or more schema violations in a single file
#[derive(Debug, Error, Diagnostic)]
#[error("{filename} does not match the {kind} schema")]
#[diagnostic(
    code(sartor::schema::violations),
    help("{}", violations.join("\n"))
)]
pub struct SchemaViolations {
    filename: String,
    kind: SchemaKind,
    violations: Vec<String>,
}

impl SchemaViolations {
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[String] {
        &self.violations
    }
}

/// Why a file could not be checked at all
#[derive(Debug, Error, Diagnostic)]
pub enum ValidatorError {
    #[error("No schema registered for {0}")]
    NoSchema(SchemaKind),

    #[error("Schema for {kind} is not valid: {message}")]
    BadSchema { kind: SchemaKind, message: String },

    #[error("{filename} is not valid YAML: {message}")]
    NotYaml { filename: String, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Violations(#[from] SchemaViolations),
}

/// Validates workspace files against the registry's schemas
pub struct Validator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> Validator<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Check `content` against the schema for `kind`, collecting every
    /// violation rather than stopping at the first
    pub fn iter_errors(
        &self,
        content: &str,
        filename: &str,
        kind: SchemaKind,
    ) -> Result<(), ValidatorError> {
        let schema_str = self
            .registry
            .get(kind)
            .ok_or(ValidatorError::NoSchema(kind))?;

        let schema: serde_json::Value =
            serde_json::from_str(schema_str).map_err(|e| ValidatorError::BadSchema {
                kind,
                message: e.to_string(),
            })?;

        let yaml: serde_yml::Value =
            serde_yml::from_str(content).map_err(|e| ValidatorError::NotYaml {
                filename: filename.to_string(),
                message: e.to_string(),
            })?;
        let instance =
            serde_json::to_value(yaml).map_err(|e| ValidatorError::NotYaml {
                filename: filename.to_string(),
                message: e.to_string(),
            })?;

        let compiled =
            jsonschema::validator_for(&schema).map_err(|e| ValidatorError::BadSchema {
                kind,
                message: e.to_string(),
            })?;

        let violations: Vec<String> = compiled
            .iter_errors(&instance)
            .map(|err| {
                let path = err.instance_path.to_string();
                if path.is_empty() {
                    err.to_string()
                } else {
                    format!("{}: {}", path, err)
                }
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaViolations {
                filename: filename.to_string(),
                kind,
                violations,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_PROFILE: &str = r#"
id: MSR-01JF8AC9V2M3N4P5Q6R7S8T9E0
name: Work suit fit
height_cm: 182.0
chest_cm: 100.0
waist_cm: 86.0
created: 2026-01-12T09:30:00Z
author: alex
"#;

    #[test]
    fn test_valid_profile_passes() {
        let registry = SchemaRegistry::new();
        let validator = Validator::new(&registry);
        validator
            .iter_errors(GOOD_PROFILE, "MSR-test.sartor.yaml", SchemaKind::Profile)
            .unwrap();
    }

    #[test]
    fn test_missing_required_field_collected() {
        let registry = SchemaRegistry::new();
        let validator = Validator::new(&registry);

        let content = GOOD_PROFILE.replace("height_cm: 182.0\n", "");
        let err = validator
            .iter_errors(&content, "MSR-test.sartor.yaml", SchemaKind::Profile)
            .unwrap_err();

        match err {
            ValidatorError::Violations(v) => {
                assert_eq!(v.violation_count(), 1);
                assert!(v.violations()[0].contains("height_cm"));
            }
            other => panic!("expected Violations, got {:?}", other),
        }
    }

    #[test]
    fn test_every_violation_reported_not_just_first() {
        let registry = SchemaRegistry::new();
        let validator = Validator::new(&registry);

        let content = "id: MSR-01JF8AC9V2M3N4P5Q6R7S8T9E0\nname: Incomplete\n";
        let err = validator
            .iter_errors(content, "MSR-test.sartor.yaml", SchemaKind::Profile)
            .unwrap_err();

        match err {
            ValidatorError::Violations(v) => {
                assert!(v.violation_count() >= 3);
            }
            other => panic!("expected Violations, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_yaml_reported_as_not_yaml() {
        let registry = SchemaRegistry::new();
        let validator = Validator::new(&registry);
        let err = validator
            .iter_errors("id: [broken", "bad.sartor.yaml", SchemaKind::Profile)
            .unwrap_err();
        assert!(matches!(err, ValidatorError::NotYaml { .. }));
    }
}
