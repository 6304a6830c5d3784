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
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, table_options()))
        }
    }
}

/// Columns follow the field order of the first row; later rows may add more.
fn render_array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, table_options());
    }

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
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(n) if n.is_f64() => n
            .as_f64()
            .map_or_else(|| n.to_string(), |f| format!("{f:.1}")),
        Value::Number(n) => n.to_string(),
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

    use super::{render, table::render_entity_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Day {
        date: &'static str,
        label: &'static str,
        predicted_traffic_count: f64,
    }

    fn days() -> Vec<Day> {
        vec![
            Day {
                date: "2026-12-25",
                label: "Christmas Day",
                predicted_traffic_count: 42_500.25,
            },
            Day {
                date: "2026-12-28",
                label: "",
                predicted_traffic_count: 18_000.0,
            },
        ]
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&days(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[0]["label"], "Christmas Day");
        assert_eq!(parsed[1]["predicted_traffic_count"], 18_000.0);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&days(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        assert!(serde_json::from_str::<serde_json::Value>(&out).is_ok());
    }

    #[test]
    fn table_columns_keep_field_order() {
        let out = render(&days(), OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        let date = header.find("date").expect("date column");
        let label = header.find("label").expect("label column");
        let traffic = header.find("predicted_traffic_count").expect("traffic column");
        assert!(date < label && label < traffic);
        assert!(out.contains("42500.2") || out.contains("42500.3"));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&days().remove(0), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("Christmas Day"));
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["date", "label", "traffic"];
        let rows = vec![
            vec!["2026-12-24".to_string(), String::new(), "15000".to_string()],
            vec![
                "2026-12-25".to_string(),
                "Christmas Day".to_string(),
                "42500".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("label"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("15000"));
    }
}
