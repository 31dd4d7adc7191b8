/// Output formatting: name tables, summary tables, JSON documents.
use std::io::{self, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};

use crate::component::{ComponentError, Summary};
use crate::types::ErrorOutput;

/// Header of the bare (script-friendly) component listing.
const BARE_HEADER: &str = "COMPONENT";

/// Write a sorted one-column component name table.
///
/// Names are sorted ascending by byte order, independent of input order.
///
/// # Errors
///
/// Returns an error when the sink write fails.
pub fn write_names(out: &mut dyn Write, names: &[String]) -> io::Result<()> {
    let mut sorted = names.to_vec();
    sorted.sort();

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["component"]);
    for name in &sorted {
        table.add_row([name.as_str()]);
    }
    writeln!(out, "{table}")
}

/// Write the bare component listing: a `COMPONENT` header, an `=` underline
/// matching the header length, then one sorted name per line.
///
/// An empty set produces exactly the two header lines and nothing else.
///
/// # Errors
///
/// Returns an error when the sink write fails.
pub fn write_names_bare(out: &mut dyn Write, names: &[String]) -> io::Result<()> {
    let mut sorted = names.to_vec();
    sorted.sort();

    writeln!(out, "{BARE_HEADER}")?;
    writeln!(out, "{}", "=".repeat(BARE_HEADER.len()))?;
    for name in &sorted {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

/// Write the five-column summary table, rows sorted ascending by the
/// component column.
///
/// # Errors
///
/// Returns an error when the sink write fails.
pub fn write_summaries_wide(out: &mut dyn Write, summaries: &[Summary]) -> io::Result<()> {
    let mut rows: Vec<&Summary> = summaries.iter().collect();
    rows.sort_by(|a, b| a.component_name.cmp(&b.component_name));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["component", "type", "apiversion", "kind", "name"]);
    for s in rows {
        table.add_row([
            s.component_name.as_str(),
            s.component_type.as_str(),
            s.api_version.as_str(),
            s.kind.as_str(),
            s.name.as_str(),
        ]);
    }
    writeln!(out, "{table}")
}

/// Write summaries as a single compact JSON document, in the given order.
///
/// The caller's order is preserved; an empty slice serializes as `[]`.
///
/// # Errors
///
/// Returns an error when serialization or the sink write fails.
pub fn write_summaries_json(out: &mut dyn Write, summaries: &[Summary]) -> Result<(), ComponentError> {
    serde_json::to_writer(&mut *out, summaries)?;
    writeln!(out)?;
    Ok(())
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, as_json: bool) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    if as_json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
        if let Some(candidates) = &err.error.candidates {
            let _ = writeln!(out, "  Did you mean:");
            for c in candidates {
                let _ = writeln!(out, "    {c}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(component: &str, name: &str) -> Summary {
        Summary {
            component_name: component.to_owned(),
            component_type: "json".to_owned(),
            api_version: "apps/v1".to_owned(),
            kind: "Deployment".to_owned(),
            name: name.to_owned(),
        }
    }

    fn render(names: &[&str]) -> String {
        let owned: Vec<String> = names.iter().map(|n| (*n).to_owned()).collect();
        let mut buf = Vec::new();
        write_names_bare(&mut buf, &owned).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bare_prints_sorted() {
        assert_eq!(render(&["b", "a"]), "COMPONENT\n=========\na\nb\n");
    }

    #[test]
    fn test_bare_is_order_independent() {
        assert_eq!(render(&["a", "b"]), render(&["b", "a"]));
    }

    #[test]
    fn test_bare_empty_set_prints_header_only() {
        assert_eq!(render(&[]), "COMPONENT\n=========\n");
    }

    #[test]
    fn test_names_table_sorts_rows() {
        let names = vec!["beta".to_owned(), "alpha".to_owned()];
        let mut buf = Vec::new();
        write_names(&mut buf, &names).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.contains("component"));
        assert!(rendered.find("alpha").unwrap() < rendered.find("beta").unwrap());
    }

    #[test]
    fn test_wide_table_sorts_by_component_column() {
        let summaries = vec![summary("web", "web-deploy"), summary("db", "db-deploy")];
        let mut buf = Vec::new();
        write_summaries_wide(&mut buf, &summaries).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.contains("apiversion"));
        assert!(rendered.find("db-deploy").unwrap() < rendered.find("web-deploy").unwrap());
    }

    #[test]
    fn test_json_preserves_given_order() {
        let summaries = vec![summary("web", "web-deploy"), summary("db", "db-deploy")];
        let mut buf = Vec::new();
        write_summaries_json(&mut buf, &summaries).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        assert!(rendered.ends_with('\n'));
        assert!(rendered.find("web-deploy").unwrap() < rendered.find("db-deploy").unwrap());
    }

    #[test]
    fn test_json_empty_set_is_empty_document() {
        let mut buf = Vec::new();
        write_summaries_json(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }

    #[test]
    fn test_json_field_names() {
        let summaries = vec![summary("db", "db-deploy")];
        let mut buf = Vec::new();
        write_summaries_json(&mut buf, &summaries).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        for field in ["ComponentName", "Type", "APIVersion", "Kind", "Name"] {
            assert!(rendered.contains(field), "missing field {field}");
        }
    }
}
