use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Print `data` as JSON (if `--json`) or call `display_fn` for human-readable output.
pub fn print_output<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    display_fn: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if opts.json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        display_fn(data);
    }
    Ok(())
}

/// A column of a listing: header text and cell alignment
pub struct Column {
    pub header: &'static str,
    pub align: CellAlignment,
}

impl Column {
    pub const fn left(header: &'static str) -> Self {
        Column {
            header,
            align: CellAlignment::Left,
        }
    }

    pub const fn right(header: &'static str) -> Self {
        Column {
            header,
            align: CellAlignment::Right,
        }
    }
}

/// Render `rows` as borderless columns separated by two spaces, trailing blanks removed
pub fn render_table(columns: &[Column], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(columns.iter().map(|column| column.header));
    for row in rows {
        table.add_row(row.clone());
    }

    let last = columns.len().saturating_sub(1);
    for (i, column) in columns.iter().enumerate() {
        if let Some(target) = table.column_mut(i) {
            target.set_cell_alignment(column.align);
            target.set_padding((u16::from(i != 0), u16::from(i != last)));
        }
    }

    let mut rendered = String::new();
    for line in table.to_string().lines() {
        rendered.push_str(line.trim_end());
        rendered.push('\n');
    }
    rendered
}
