//! CSV serialization and file writing

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Quote a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn format_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<String>>()
        .join(",")
}

/// Serialize a header plus rows into one CSV document.
pub fn format_csv(header: &[String], rows: &[Vec<String>]) -> String {
    let mut output = String::new();

    output.push_str(&format_row(header));
    output.push('\n');

    for row in rows {
        output.push_str(&format_row(row));
        output.push('\n');
    }

    output
}

/// Write a CSV file, creating parent directories as needed.
pub fn write_csv(path: &Path, header: &[String], rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, format_csv(header, rows))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fields(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_fields_unquoted() {
        assert_eq!(format_row(&fields(&["a", "b", "c"])), "a,b,c");
    }

    #[test]
    fn test_empty_fields_stay_in_place() {
        assert_eq!(format_row(&fields(&["a", "", "c", ""])), "a,,c,");
    }

    #[test]
    fn test_comma_triggers_quoting() {
        assert_eq!(
            format_row(&fields(&["10,20 30,40", "b"])),
            "\"10,20 30,40\",b"
        );
    }

    #[test]
    fn test_quotes_are_doubled() {
        assert_eq!(
            format_row(&fields(&["der \"Alte\" Markt"])),
            "\"der \"\"Alte\"\" Markt\""
        );
    }

    #[test]
    fn test_newline_triggers_quoting() {
        assert_eq!(format_row(&fields(&["two\nlines"])), "\"two\nlines\"");
    }

    #[test]
    fn test_format_csv_header_then_rows() {
        let header = fields(&["tag_name", "tagged_string"]);
        let rows = vec![fields(&["person", "Anna"]), fields(&["place", "Rome"])];

        assert_eq!(
            format_csv(&header, &rows),
            "tag_name,tagged_string\nperson,Anna\nplace,Rome\n"
        );
    }

    #[test]
    fn test_write_csv_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("export.csv");

        write_csv(&path, &fields(&["a"]), &[fields(&["1"])]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "a\n1\n");
    }
}
