//! Output formatting functions.

use dynotable_core::TableDescription;

use crate::cli::OutputFormat;

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// Format a table description for display.
pub fn format_description(description: &TableDescription) -> String {
    let mut output = format!(
        "{}\n  Status: {}",
        description.table_name, description.table_status
    );
    for gsi in &description.global_secondary_indexes {
        output.push_str(&format!("\n  GSI {}: {}", gsi.index_name, gsi.index_status));
    }
    output
}

/// Format table names for display.
pub fn format_table_names(names: &[String]) -> String {
    if names.is_empty() {
        return "No tables found.".to_string();
    }
    let mut output = format!("TABLES ({})\n", names.len());
    output.push_str(&"-".repeat(40));
    for name in names {
        output.push_str(&format!("\n{}", name));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynotable_core::{IndexDescription, IndexStatus, TableStatus};

    #[test]
    fn test_format_description_with_gsi() {
        let mut description = TableDescription::new("foo.Table", TableStatus::Creating);
        description.global_secondary_indexes.push(IndexDescription {
            index_name: "GSI1".to_string(),
            index_status: IndexStatus::Creating,
        });

        assert_eq!(
            format_description(&description),
            "foo.Table\n  Status: CREATING\n  GSI GSI1: CREATING"
        );
    }

    #[test]
    fn test_format_table_names() {
        assert_eq!(format_table_names(&[]), "No tables found.");

        let output = format_table_names(&["Bar".to_string(), "Table".to_string()]);
        assert!(output.starts_with("TABLES (2)\n"));
        assert!(output.ends_with("\nBar\nTable"));
    }

    #[test]
    fn test_format_output_json_is_compact() {
        let description = TableDescription::new("foo.Table", TableStatus::Active);
        assert_eq!(
            format_output(&description, OutputFormat::Json),
            r#"{"TableName":"foo.Table","TableStatus":"ACTIVE"}"#
        );
    }
}
