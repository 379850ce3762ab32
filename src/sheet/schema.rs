//! Fixed sheet layouts of the workbook.

/// Name, header row and fallback list of one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub headers: &'static [&'static str],
    /// Returned by name sheets while they hold no names.
    pub defaults: &'static [&'static str],
}

impl TableSchema {
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn header_row(&self) -> crate::sheet::cell::Row {
        self.headers
            .iter()
            .map(|h| serde_json::Value::String(h.to_string()))
            .collect()
    }
}

pub const INCOME: TableSchema = TableSchema {
    name: "Income_Raw",
    headers: &[
        "id",
        "date_iso",
        "month",
        "timestamp",
        "operator",
        "anketa",
        "shift",
        "day",
        "onlyfans_gross",
        "onlyfans_percent",
        "onlyfans_net",
        "crypto_gross",
        "crypto_percent",
        "crypto_net",
        "paypal_gross",
        "paypal_percent",
        "paypal_net",
        "gross_total",
        "net_total",
    ],
    defaults: &[],
};

pub const PAYMENTS: TableSchema = TableSchema {
    name: "Advances_Raw",
    headers: &[
        "id",
        "date_iso",
        "month",
        "timestamp",
        "operator",
        "type",
        "amount",
    ],
    defaults: &[],
};

pub const PENALTIES: TableSchema = TableSchema {
    name: "Penalties_Raw",
    headers: &[
        "id",
        "date_iso",
        "month",
        "timestamp",
        "operator",
        "amount",
        "reason",
    ],
    defaults: &[],
};

pub const OPERATORS: TableSchema = TableSchema {
    name: "Operators",
    headers: &["Name"],
    defaults: &["Operator 1", "Operator 2", "Operator 3"],
};

pub const ANKETY: TableSchema = TableSchema {
    name: "Ankety",
    headers: &["Name"],
    defaults: &[
        "Succuba", "Mommy", "Nola", "Lust", "Mermaid", "Stacy", "Fitness", "Caitlyn",
    ],
};

pub const ADMINS: TableSchema = TableSchema {
    name: "Admins",
    headers: &["Name"],
    defaults: &["Admin 1", "Admin 2"],
};

pub const ALL: [&TableSchema; 6] = [&INCOME, &PAYMENTS, &PENALTIES, &OPERATORS, &ANKETY, &ADMINS];

pub fn by_name(name: &str) -> Option<&'static TableSchema> {
    ALL.iter().copied().find(|s| s.name == name)
}

// Sheets written by the first generation of the gateway (localized headers,
// no month/timestamp columns on payments and penalties).
pub const LEGACY_INCOME: &str = "Доходы";
pub const LEGACY_PAYMENTS: &str = "Авансы и Зарплата";
pub const LEGACY_PENALTIES: &str = "Штрафы";
pub const LEGACY_OPERATORS: &str = "Операторы";
pub const LEGACY_ANKETY: &str = "Анкеты";
pub const LEGACY_ADMINS: &str = "Администраторы";

pub const LEGACY_INCOME_WIDTH: usize = 17;
pub const LEGACY_PAYMENT_WIDTH: usize = 5;
pub const LEGACY_PENALTY_WIDTH: usize = 5;
pub const LEGACY_ADVANCE_LABEL: &str = "Аванс";
