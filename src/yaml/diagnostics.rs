//! YAML error diagnostics with source labels

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors from reading workspace YAML files
#[derive(Debug, Error, Diagnostic)]
pub enum YamlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] Box<YamlSyntaxError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A YAML syntax or shape error with the offending location highlighted
#[derive(Debug, Error, Diagnostic)]
#[error("Failed to parse {filename}")]
#[diagnostic(code(sartor::yaml::syntax))]
pub struct YamlSyntaxError {
    filename: String,

    message: String,

    #[source_code]
    src: NamedSource<String>,

    #[label("{message}")]
    span: Option<SourceSpan>,
}

impl YamlSyntaxError {
    /// Build a labeled syntax error from a serde_yml failure
    pub fn from_serde_error(err: &serde_yml::Error, content: &str, filename: &str) -> Self {
        let span = err.location().and_then(|loc| {
            if content.is_empty() {
                return None;
            }
            let offset = loc.index().min(content.len() - 1);
            Some(SourceSpan::from((offset, 1)))
        });

        Self {
            filename: filename.to_string(),
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }

    /// The underlying parser message
    pub fn message(&self) -> &str {
        &self.message
    }
}
