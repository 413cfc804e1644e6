use crate::core::presenter::RowRenderer;
use crate::domain::config::PreviewStyle;
use crate::domain::report::{ReportRow, COLUMNS};
use std::io::{self, Write};
use tabled::settings::object::{Columns, Segment};
use tabled::settings::{Alignment, Modify, Style, Width};
use tabled::{Table, Tabled};

/// Pick the renderer once, from the configured style and whether stdout is a terminal.
pub fn select_renderer(
    style: PreviewStyle,
    column_widths: &[usize],
    stdout_is_terminal: bool,
) -> Box<dyn RowRenderer> {
    match style {
        PreviewStyle::Table => Box::new(TableRenderer::new(column_widths.to_vec())),
        PreviewStyle::Plain => Box::new(PlainRenderer),
        PreviewStyle::Auto if stdout_is_terminal => {
            Box::new(TableRenderer::new(column_widths.to_vec()))
        }
        PreviewStyle::Auto => Box::new(PlainRenderer),
    }
}

/// Boxed grid with centered cells and per-column wrap widths
pub struct TableRenderer {
    column_widths: Vec<usize>,
}

impl TableRenderer {
    pub fn new(column_widths: Vec<usize>) -> Self {
        Self { column_widths }
    }
}

impl RowRenderer for TableRenderer {
    fn render(&self, rows: &[ReportRow], out: &mut dyn Write) -> io::Result<()> {
        let mut table = Table::new(rows.iter().map(PreviewTableRow::from));
        table
            .with(Style::modern())
            .with(Modify::new(Segment::all()).with(Alignment::center()));

        for (index, width) in self.column_widths.iter().enumerate().take(COLUMNS.len()) {
            if *width > 0 {
                table.with(Modify::new(Columns::single(index)).with(Width::wrap(*width)));
            }
        }

        writeln!(out, "{}", table)
    }

    fn name(&self) -> &'static str {
        "table"
    }
}

/// Whitespace-aligned text, header line first
pub struct PlainRenderer;

impl RowRenderer for PlainRenderer {
    fn render(&self, rows: &[ReportRow], out: &mut dyn Write) -> io::Result<()> {
        let cells: Vec<[String; 8]> = rows.iter().map(ReportRow::cells).collect();

        let mut widths = COLUMNS.map(|column| column.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_aligned(out, COLUMNS.iter().copied(), &widths)?;
        for row in &cells {
            write_aligned(out, row.iter().map(String::as_str), &widths)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

fn write_aligned<'a>(
    out: &mut dyn Write,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> io::Result<()> {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{}", line.trim_end())
}

/// Table row for the console preview
#[derive(Tabled)]
struct PreviewTableRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Pool")]
    pool: String,
    #[tabled(rename = "ShareSMB")]
    sharesmb: String,
    #[tabled(rename = "Sharesmb Name")]
    sharesmb_name: String,
    #[tabled(rename = "Sharenfs")]
    sharenfs: String,
    #[tabled(rename = "Shareftp")]
    shareftp: String,
    #[tabled(rename = "Space data")]
    space_data: String,
    #[tabled(rename = "space_total")]
    space_total: String,
}

impl From<&ReportRow> for PreviewTableRow {
    fn from(row: &ReportRow) -> Self {
        let [name, pool, sharesmb, sharesmb_name, sharenfs, shareftp, space_data, space_total] =
            row.cells();
        Self {
            name,
            pool,
            sharesmb,
            sharesmb_name,
            sharenfs,
            shareftp,
            space_data,
            space_total,
        }
    }
}
