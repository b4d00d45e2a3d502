//! XLSX workbook writer for selected-record tables.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::ExportError;
use crate::sanitize::clean_text;

use super::table::{Cell, TableRow};

/// Write one worksheet: a header row followed by one row per record.
///
/// Text cells run through the control-character cleaner again on write, so
/// the workbook stays valid even for rows assembled outside the selectors.
/// An empty `rows` slice still produces a workbook with the header row.
pub fn write_report<T: TableRow>(rows: &[T], path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in T::headers().iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let row_num = (index + 1) as u32;
        for (col, cell) in row.cells().into_iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col as u16, clean_text(&text).as_str())?;
                }
                Cell::Count(count) => {
                    worksheet.write_number(row_num, col as u16, count as f64)?;
                }
            }
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    workbook.save(path)?;

    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        "Workbook written"
    );

    Ok(())
}
