//! Registry export for documentation and tooling

use crate::registry::ErrorDescriptor;
use serde::Serialize;

/// Flattened entry as exported
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    code: u32,
    state: &'a str,
    class: &'a str,
    subsystem: &'a str,
}

impl<'a> From<&'a ErrorDescriptor> for ExportRow<'a> {
    fn from(descriptor: &'a ErrorDescriptor) -> Self {
        Self {
            name: descriptor.name(),
            code: descriptor.code(),
            state: descriptor.state().code(),
            class: descriptor.state().class(),
            subsystem: descriptor.subsystem().as_str(),
        }
    }
}

/// Pretty JSON array in the order given
pub fn to_json<'a>(
    entries: impl IntoIterator<Item = &'a ErrorDescriptor>,
) -> Result<String, serde_json::Error> {
    let rows: Vec<ExportRow> = entries.into_iter().map(ExportRow::from).collect();
    serde_json::to_string_pretty(&rows)
}

/// Markdown table in the order given
pub fn to_markdown<'a>(entries: impl IntoIterator<Item = &'a ErrorDescriptor>) -> String {
    let mut output = String::from("| Name | Code | SQLSTATE | Class | Subsystem |\n");
    output.push_str("|------|------|----------|-------|-----------|\n");

    for descriptor in entries {
        let row = ExportRow::from(descriptor);
        output.push_str(&format!(
            "| `{}` | {} | {} | {} | {} |\n",
            row.name, row.code, row.state, row.class, row.subsystem
        ));
    }

    output
}
