//! Output formatting utilities

use crate::cli::OutputFormat;

/// Determine the effective output format based on context
///
/// Auto resolves to a table for list output and YAML for single records.
pub fn effective_format(format: OutputFormat, is_list: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_list {
                OutputFormat::Table
            } else {
                OutputFormat::Yaml
            }
        }
        other => other,
    }
}
