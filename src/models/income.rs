use crate::models::lenient;
use crate::sheet::cell::{self, Row, RowError};
use crate::sheet::schema::{self, TableSchema};
use crate::sheet::Record;
use crate::utils::date;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gross / percent / operator share of one payment source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceBreakdown {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub gross: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub percent: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub operator_share: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sources {
    #[serde(default)]
    pub onlyfans: SourceBreakdown,
    #[serde(default)]
    pub crypto: SourceBreakdown,
    #[serde(default)]
    pub paypal: SourceBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Total {
    #[serde(default, deserialize_with = "lenient::amount")]
    pub gross: f64,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub operator_share: f64,
}

/// One shift's income entry  ⇔ one `Income_Raw` row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String, // ⇔ date_iso
    #[serde(default, deserialize_with = "lenient::text")]
    pub month: String, // ⇔ month ("YYYY-MM")
    #[serde(default, deserialize_with = "lenient::text")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub operator: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub anketa: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub shift: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub day: String,
    #[serde(default)]
    pub sources: Sources,
    #[serde(default)]
    pub total: Total,
}

impl Income {
    /// Fill `month` from `date` and stamp `timestamp` when the caller left
    /// them empty.
    pub fn fill_derived(&mut self) {
        if self.month.is_empty()
            && let Some(m) = date::month_of(&self.date)
        {
            self.month = m;
        }
        if self.timestamp.is_empty() {
            self.timestamp = date::now_rfc3339();
        }
    }
}

fn breakdown_cells(b: &SourceBreakdown) -> [Value; 3] {
    [cell::num(b.gross), cell::num(b.percent), cell::num(b.operator_share)]
}

fn breakdown_from(row: &[Value], at: usize, name: &'static [&'static str; 3]) -> Result<SourceBreakdown, RowError> {
    Ok(SourceBreakdown {
        gross: cell::number(&row[at], name[0])?,
        percent: cell::number(&row[at + 1], name[1])?,
        operator_share: cell::number(&row[at + 2], name[2])?,
    })
}

impl Record for Income {
    const SCHEMA: &'static TableSchema = &schema::INCOME;

    fn key(&self) -> &str {
        &self.id
    }

    fn to_row(&self) -> Row {
        let mut row: Row = vec![
            Value::String(self.id.clone()),
            Value::String(self.date.clone()),
            Value::String(self.month.clone()),
            Value::String(self.timestamp.clone()),
            Value::String(self.operator.clone()),
            Value::String(self.anketa.clone()),
            Value::String(self.shift.clone()),
            Value::String(self.day.clone()),
        ];
        row.extend(breakdown_cells(&self.sources.onlyfans));
        row.extend(breakdown_cells(&self.sources.crypto));
        row.extend(breakdown_cells(&self.sources.paypal));
        row.push(cell::num(self.total.gross));
        row.push(cell::num(self.total.operator_share));
        row
    }

    fn from_row(row: &[Value]) -> Result<Self, RowError> {
        cell::require_width(row, Self::SCHEMA.width())?;

        Ok(Income {
            id: cell::text(&row[0]),
            date: cell::text(&row[1]),
            month: cell::text(&row[2]),
            timestamp: cell::text(&row[3]),
            operator: cell::text(&row[4]),
            anketa: cell::text(&row[5]),
            shift: cell::text(&row[6]),
            day: cell::text(&row[7]),
            sources: Sources {
                onlyfans: breakdown_from(row, 8, &["onlyfans_gross", "onlyfans_percent", "onlyfans_net"])?,
                crypto: breakdown_from(row, 11, &["crypto_gross", "crypto_percent", "crypto_net"])?,
                paypal: breakdown_from(row, 14, &["paypal_gross", "paypal_percent", "paypal_net"])?,
            },
            total: Total {
                gross: cell::number(&row[17], "gross_total")?,
                operator_share: cell::number(&row[18], "net_total")?,
            },
        })
    }
}
