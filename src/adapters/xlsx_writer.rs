//! Excel workbook output

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::domain::model::{exact_f64, Cell, NormalizedRecord, COLUMNS};
use crate::utils::error::Result;

/// Excel rejects longer cell strings.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Builds a single-sheet workbook: a bold header row, then one row per record.
pub fn render(records: &[NormalizedRecord], sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, name) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
    }

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, cell) in record.cells().iter().enumerate() {
            write_cell(worksheet, row, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_cell(ws: &mut Worksheet, row: u32, col: u16, cell: &Cell<'_>) -> Result<()> {
    match cell {
        Cell::Text(s) if s.is_empty() => { /* Leave cell empty */ }
        Cell::Text(s) => {
            ws.write_string(row, col, clamp_text(s, row, col))?;
        }
        Cell::Number(n) => match exact_f64(n) {
            Some(f) => {
                ws.write_number(row, col, f)?;
            }
            // Too wide for a float; keep every digit as text
            None => {
                ws.write_string(row, col, n.to_string())?;
            }
        },
    }
    Ok(())
}

/// Cuts text to [`MAX_CELL_CHARS`] characters.
fn clamp_text(text: &str, row: u32, col: u16) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => {
            tracing::warn!(
                "Truncating {} cell in row {} to {} characters",
                COLUMNS[col as usize],
                row,
                MAX_CELL_CHARS
            );
            &text[..end]
        }
        None => text,
    }
}
