use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.table_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_rows(&items)),
        Value::Object(map) => {
            // A response wrapping a single list (`{"users": [...]}`) renders as that list.
            if map.len() == 1
                && let Some(Value::Array(items)) = map.values().next()
            {
                return Ok(render_rows(items));
            }
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["field", "value"], &rows, table_options()))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, table_options());
    }

    // Columns keep first-seen field order; serde_json preserves it.
    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{render, value_to_cell};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Company {
        id: i64,
        name: &'static str,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Company { id: 1, name: "Acme" };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["name"], "Acme");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec![Company { id: 1, name: "Acme" }, Company { id: 2, name: "Globex" }];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_columns_keep_field_order() {
        let value = vec![Company { id: 1, name: "Acme" }];
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        assert!(header.find("id") < header.find("name"));
    }

    #[derive(Serialize)]
    struct PlanRow {
        status: &'static str,
        activity: &'static str,
        id: i64,
    }

    #[test]
    fn table_columns_follow_struct_order_not_alphabet() {
        let value = vec![PlanRow {
            status: "Pendiente",
            activity: "Inventario",
            id: 7,
        }];
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        let header: Vec<&str> = out.lines().next().expect("header line").split_whitespace().collect();
        assert_eq!(header, ["status", "activity", "id"]);
    }

    #[test]
    fn wrapped_list_renders_as_rows() {
        let out = render(&json!({ "companies": [{"id": 1, "name": "Acme"}] }), OutputFormat::Table)
            .expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("name")));
        assert!(out.contains("Acme"));
    }

    #[test]
    fn empty_list_has_placeholder() {
        let out = render(&Vec::<Company>::new(), OutputFormat::Table).expect("render");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn string_arrays_join_into_one_cell() {
        assert_eq!(value_to_cell(&json!(["edit", "delete"])), "edit, delete");
        assert_eq!(value_to_cell(&json!(null)), "-");
    }
}
