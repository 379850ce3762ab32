use crate::models::lenient;
use crate::sheet::Record;
use crate::sheet::cell::{self, Row, RowError};
use crate::sheet::schema::{self, TableSchema};
use crate::utils::date;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Kind of payout: an advance or the regular salary.
/// Anything other than `advance` counts as salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum PaymentType {
    Advance,
    #[default]
    Salary,
}

impl PaymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Advance => "advance",
            PaymentType::Salary => "salary",
        }
    }
}

impl From<String> for PaymentType {
    fn from(s: String) -> Self {
        if s == "advance" {
            PaymentType::Advance
        } else {
            PaymentType::Salary
        }
    }
}

/// Any scalar is accepted; null, numbers and unknown words are salary.
impl<'de> Deserialize<'de> for PaymentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::text(deserializer).map(PaymentType::from)
    }
}

impl From<PaymentType> for String {
    fn from(t: PaymentType) -> Self {
        t.as_str().to_string()
    }
}

/// ⇔ one `Advances_Raw` row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
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
    #[serde(default, rename = "type")]
    pub kind: PaymentType,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub amount: f64,
}

impl Payment {
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

impl Record for Payment {
    const SCHEMA: &'static TableSchema = &schema::PAYMENTS;

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
            Value::String(self.kind.as_str().to_string()),
            cell::num(self.amount),
        ]
    }

    fn from_row(row: &[Value]) -> Result<Self, RowError> {
        cell::require_width(row, Self::SCHEMA.width())?;

        Ok(Payment {
            id: cell::text(&row[0]),
            date: cell::text(&row[1]),
            month: cell::text(&row[2]),
            timestamp: cell::text(&row[3]),
            operator: cell::text(&row[4]),
            kind: PaymentType::from(cell::text(&row[5])),
            amount: cell::number(&row[6], "amount")?,
        })
    }
}
