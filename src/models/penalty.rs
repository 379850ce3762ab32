use crate::models::lenient;
use crate::sheet::Record;
use crate::sheet::cell::{self, Row, RowError};
use crate::sheet::schema::{self, TableSchema};
use crate::utils::date;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ⇔ one `Penalties_Raw` row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Penalty {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub month: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub operator: String,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reason: String,
}

impl Penalty {
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

impl Record for Penalty {
    const SCHEMA: &'static TableSchema = &schema::PENALTIES;

    fn key(&self) -> &str {
        &self.id
    }

    fn to_row(&self) -> Row {
        vec![
            Value::String(self.id.clone()),
            Value::String(self.date.clone()),
            Value::String(self.month.clone()),
            Value::String(self.timestamp.clone()),
            Value::String(self.operator.clone()),
            cell::num(self.amount),
            Value::String(self.reason.clone()),
        ]
    }

    fn from_row(row: &[Value]) -> Result<Self, RowError> {
        cell::require_width(row, Self::SCHEMA.width())?;

        Ok(Penalty {
            id: cell::text(&row[0]),
            date: cell::text(&row[1]),
            month: cell::text(&row[2]),
            timestamp: cell::text(&row[3]),
            operator: cell::text(&row[4]),
            amount: cell::number(&row[5], "amount")?,
            reason: cell::text(&row[6]),
        })
    }
}
