//! Converter from the first-generation workbook layout.
//!
//! The old sheets carry localized names and headers, a 17-column income
//! table without `month`/`day`, and payment/penalty tables without
//! `month`/`timestamp`. Converted rows go through the regular table
//! adapters; rows whose key already exists in the target are skipped, so
//! running the conversion twice changes nothing.

use crate::core::names::NameLogic;
use crate::core::request::NameList;
use crate::db::store::SheetStore;
use crate::errors::AppResult;
use crate::sheet::cell::{self, Row};
use crate::sheet::schema::{self, TableSchema};
use crate::sheet::Table;
use crate::utils::date;
use serde_json::Value;
use tracing::warn;

/// Rows converted / skipped per target sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub entries: Vec<(&'static str, usize, usize)>,
}

impl ConversionReport {
    pub fn converted(&self) -> usize {
        self.entries.iter().map(|(_, c, _)| c).sum()
    }
}

fn month_cell(date_cell: &Value) -> Value {
    Value::String(date::month_of(&cell::text(date_cell)).unwrap_or_default())
}

/// `[id, date, timestamp, operator, anketa, shift, 9 × source, gross, net]`
pub fn convert_income_row(row: &[Value]) -> Option<Row> {
    if row.len() < schema::LEGACY_INCOME_WIDTH {
        return None;
    }
    let mut out: Row = vec![
        row[0].clone(),
        row[1].clone(),
        month_cell(&row[1]),
        row[2].clone(),
        row[3].clone(),
        row[4].clone(),
        row[5].clone(),
        Value::String(String::new()),
    ];
    out.extend_from_slice(&row[6..17]);
    Some(out)
}

/// `[id, operator, Аванс|Зарплата, amount, date]`
pub fn convert_payment_row(row: &[Value]) -> Option<Row> {
    if row.len() < schema::LEGACY_PAYMENT_WIDTH {
        return None;
    }
    let kind = if cell::text(&row[2]) == schema::LEGACY_ADVANCE_LABEL {
        "advance"
    } else {
        "salary"
    };
    Some(vec![
        row[0].clone(),
        row[4].clone(),
        month_cell(&row[4]),
        Value::String(String::new()),
        row[1].clone(),
        Value::String(kind.to_string()),
        row[3].clone(),
    ])
}

/// `[id, operator, amount, reason, date]`
pub fn convert_penalty_row(row: &[Value]) -> Option<Row> {
    if row.len() < schema::LEGACY_PENALTY_WIDTH {
        return None;
    }
    Some(vec![
        row[0].clone(),
        row[4].clone(),
        month_cell(&row[4]),
        Value::String(String::new()),
        row[1].clone(),
        row[2].clone(),
        row[3].clone(),
    ])
}

fn convert_keyed<S: SheetStore + ?Sized>(
    store: &mut S,
    legacy: &str,
    target: &'static TableSchema,
    convert: fn(&[Value]) -> Option<Row>,
) -> AppResult<(usize, usize)> {
    let rows = store.read_rows(legacy)?;
    let mut converted = 0;
    let mut skipped = 0;

    let mut table = Table::new(store, target);
    for (i, row) in rows.iter().enumerate().skip(1) {
        let Some(new_row) = convert(row) else {
            warn!(sheet = legacy, row = i, "legacy row too short, skipped");
            skipped += 1;
            continue;
        };
        let key = cell::text(&new_row[0]);
        if table.contains_key(&key)? {
            skipped += 1;
            continue;
        }
        table.append(new_row)?;
        converted += 1;
    }
    Ok((converted, skipped))
}

fn convert_names<S: SheetStore + ?Sized>(
    store: &mut S,
    legacy: &str,
    list: NameList,
) -> AppResult<(usize, usize)> {
    let rows = store.read_rows(legacy)?;
    let mut converted = 0;
    let mut skipped = 0;

    for row in rows.iter().skip(1) {
        match row.first() {
            Some(c) if !cell::is_blank(c) => {
                if NameLogic::add(store, list, &cell::text(c))? {
                    converted += 1;
                } else {
                    skipped += 1;
                }
            }
            _ => skipped += 1,
        }
    }
    Ok((converted, skipped))
}

pub struct LegacyLogic;

impl LegacyLogic {
    /// Copy every first-generation sheet that exists into its current
    /// counterpart. Legacy sheets are left untouched.
    pub fn convert<S: SheetStore + ?Sized>(store: &mut S) -> AppResult<ConversionReport> {
        let mut report = ConversionReport::default();

        let keyed: [(&str, &'static TableSchema, fn(&[Value]) -> Option<Row>); 3] = [
            (schema::LEGACY_INCOME, &schema::INCOME, convert_income_row),
            (schema::LEGACY_PAYMENTS, &schema::PAYMENTS, convert_payment_row),
            (schema::LEGACY_PENALTIES, &schema::PENALTIES, convert_penalty_row),
        ];
        for (legacy, target, convert) in keyed {
            if store.has_sheet(legacy)? {
                let (c, s) = convert_keyed(store, legacy, target, convert)?;
                report.entries.push((target.name, c, s));
            }
        }

        let names = [
            (schema::LEGACY_OPERATORS, NameList::Operators),
            (schema::LEGACY_ANKETY, NameList::Ankety),
            (schema::LEGACY_ADMINS, NameList::Admins),
        ];
        for (legacy, list) in names {
            if store.has_sheet(legacy)? {
                let (c, s) = convert_names(store, legacy, list)?;
                report.entries.push((list.schema().name, c, s));
            }
        }

        store.log(
            "convert_legacy",
            "",
            &format!("{} legacy rows converted", report.converted()),
        )?;
        Ok(report)
    }
}
