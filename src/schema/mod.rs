//! Schema module - validation and templating for workspace files

pub mod registry;
pub mod template;
pub mod validator;

pub use registry::{SchemaKind, SchemaRegistry};
pub use template::{TemplateContext, TemplateError, TemplateGenerator};
pub use validator::{SchemaViolations, Validator, ValidatorError};
