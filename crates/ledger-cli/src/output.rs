//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{Attribute, Cell, ContentArrangement, Table, presets};
use serde::Serialize;

/// Shown whenever the stored session can no longer be used.
pub const SESSION_EXPIRED: &str = "Session expired, run `ledger auth login`";

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a progress note to stderr.
pub fn progress(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print rows as aligned columns under a bold header.
pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        println!("{}", "No records".dimmed());
        return;
    }
    println!("{}", build_table(headers, rows));
}

fn build_table(headers: &[&str], rows: &[Vec<String>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    for row in rows {
        table.add_row(row);
    }
    table
}

/// Print a command failure. An ended session gets the login hint.
pub fn report(err: &anyhow::Error) {
    let expired = err.chain().any(|cause| {
        cause
            .downcast_ref::<ledger_core::Error>()
            .is_some_and(ledger_core::Error::is_unauthenticated)
    });

    if expired {
        error(SESSION_EXPIRED);
    } else {
        error(&format!("{:#}", err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_of(line: &str, cell: &str) -> usize {
        let byte = line.find(cell).unwrap();
        line[..byte].chars().count()
    }

    #[test]
    fn columns_align_on_characters_not_bytes() {
        let rows = vec![
            vec!["₹ 5.00".to_string(), "rent".to_string()],
            vec!["1".to_string(), "fuel".to_string()],
        ];
        let rendered = build_table(&["AMOUNT", "NOTE"], &rows).to_string();
        let lines: Vec<&str> = rendered.lines().filter(|l| !l.trim().is_empty()).collect();

        assert_eq!(lines.len(), 3);
        let column = column_of(lines[0], "NOTE");
        assert_eq!(column_of(lines[1], "rent"), column);
        assert_eq!(column_of(lines[2], "fuel"), column);
    }
}
