// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::{SheetExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet, XlsxError,
};
use serde_json::Value;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const HEADER_BG: u32 = 0x2F75B5;
const BAND_BG: [u32; 2] = [0xEAF3FB, 0xFFFFFF];

impl From<XlsxError> for AppError {
    fn from(e: XlsxError) -> Self {
        AppError::Export(format!("XLSX: {e}"))
    }
}

/// One workbook, one worksheet per sheet: bold header, banded rows,
/// columns sized to their widest cell.
pub(crate) fn export_xlsx(sheets: &[SheetExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(worksheet_name(&sheet.name))?;
        fill_worksheet(worksheet, sheet)?;
    }

    if sheets.is_empty() {
        workbook.add_worksheet().write(0, 0, "No data available")?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn fill_worksheet(worksheet: &mut Worksheet, sheet: &SheetExport) -> AppResult<()> {
    let table = sheet.text_table();
    let Some((headers, body)) = table.split_first() else {
        return Ok(());
    };

    if headers.is_empty() {
        worksheet.write(0, 0, "No data available")?;
        return Ok(());
    }

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(HEADER_BG))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, header.as_str(), &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (i, (raw, texts)) in sheet.rows.iter().zip(body).enumerate() {
        let band = Format::new()
            .set_background_color(Color::RGB(BAND_BG[i % 2]))
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, text) in texts.iter().enumerate() {
            let row = (i + 1) as u32;
            match raw.get(col) {
                // numbers stay numeric so the sheet can sum them
                Some(Value::Number(n)) if n.as_f64().is_some() => {
                    let fmt = band.clone().set_align(FormatAlign::Right);
                    worksheet.write_with_format(row, col as u16, n.as_f64().unwrap_or_default(), &fmt)?;
                }
                _ => {
                    worksheet.write_with_format(row, col as u16, text.as_str(), &band)?;
                }
            }
            widths[col] = widths[col].max(text.width());
        }
    }

    for (col, w) in widths.iter().enumerate() {
        worksheet.set_column_width(col as u16, *w as f64 + 2.0)?;
    }
    Ok(())
}

/// Excel limits worksheet names to 31 characters and forbids `[]:*?/\`.
fn worksheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if "[]:*?/\\".contains(c) { '_' } else { c })
        .take(31)
        .collect();
    if cleaned.is_empty() {
        "Sheet".to_string()
    } else {
        cleaned
    }
}
