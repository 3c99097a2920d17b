//! XLSX writer: bold grey header row, auto-sized columns.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};

use crate::error::{ExportError, Result};
use crate::table::{Cell, ExportTable};

/// Widest a column is auto-sized to, in characters.
pub const MAX_COLUMN_WIDTH: usize = 50;

const HEADER_FILL: u32 = 0xD9D9D9;

/// Width of column `index`: the longest header or cell text plus two,
/// capped at [`MAX_COLUMN_WIDTH`].
pub fn column_width(table: &ExportTable, index: usize) -> usize {
    let header = table
        .headers
        .get(index)
        .map_or(0, |header| header.chars().count());
    let longest = table
        .rows
        .iter()
        .filter_map(|row| row.get(index))
        .map(|cell| cell.to_string().chars().count())
        .max()
        .unwrap_or(0);
    (header.max(longest) + 2).min(MAX_COLUMN_WIDTH)
}

/// Writes `table` to an XLSX file at `path`.
pub fn write_xlsx(table: &ExportTable, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(table)?;
    workbook.save(path)?;
    tracing::info!(
        path = %path.display(),
        rows = table.rows.len(),
        "exported spreadsheet"
    );
    Ok(())
}

/// Renders `table` to XLSX bytes.
pub fn to_xlsx_bytes(table: &ExportTable) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_border(FormatBorder::Thin)
}

fn build_workbook(table: &ExportTable) -> Result<Workbook> {
    let too_large = || ExportError::TooLarge {
        rows: table.rows.len(),
        columns: table.headers.len(),
    };
    // Header occupies row 0.
    u32::try_from(table.rows.len() + 1).map_err(|_| too_large())?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet().set_name(&table.sheet_name)?;
    let header = header_format();

    for (index, name) in table.headers.iter().enumerate() {
        let col = u16::try_from(index).map_err(|_| too_large())?;
        worksheet.write_string_with_format(0, col, name, &header)?;
        worksheet.set_column_width(col, column_width(table, index) as f64)?;
    }
    for (row_index, row) in table.rows.iter().enumerate() {
        let row_num = (row_index + 1) as u32;
        for (index, cell) in row.iter().enumerate() {
            let col = u16::try_from(index).map_err(|_| too_large())?;
            write_cell(worksheet, row_num, col, cell)?;
        }
    }
    Ok(workbook)
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<()> {
    match cell {
        Cell::Text(text) => {
            worksheet.write_string(row, col, text)?;
        }
        Cell::Number(value) => {
            worksheet.write_number(row, col, *value)?;
        }
        Cell::Empty => {}
    }
    Ok(())
}
