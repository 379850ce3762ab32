use crate::db::store::SheetStore;
use crate::errors::AppResult;
use crate::models::Income;
use crate::sheet::{Record, Scan, Table};
use serde::{Deserialize, Serialize};

/// How `updateIncome` rewrites an existing entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Delete the last row with the id, then append the new version.
    /// Row order follows recency; appends when the id is unknown.
    #[default]
    Reappend,
    /// Overwrite the first row with the id where it stands; no-op when
    /// the id is unknown.
    InPlace,
}

pub struct IncomeLogic;

impl IncomeLogic {
    pub fn add<S: SheetStore + ?Sized>(store: &mut S, mut income: Income) -> AppResult<()> {
        income.fill_derived();
        Table::new(store, Income::SCHEMA).append(income.to_row())?;

        store.log(
            "add",
            Income::SCHEMA.name,
            &format!("Income {} ({} / {})", income.id, income.operator, income.anketa),
        )?;
        Ok(())
    }

    pub fn update<S: SheetStore + ?Sized>(
        store: &mut S,
        mut income: Income,
        policy: UpdatePolicy,
    ) -> AppResult<()> {
        income.fill_derived();

        let changed = {
            let mut table = Table::new(store, Income::SCHEMA);
            match policy {
                UpdatePolicy::Reappend => {
                    table.delete_by_key(income.key())?;
                    table.append(income.to_row())?;
                    true
                }
                UpdatePolicy::InPlace => table.overwrite_by_key(income.key(), income.to_row())?,
            }
        };

        if changed {
            store.log(
                "edit",
                Income::SCHEMA.name,
                &format!("Income {} updated", income.id),
            )?;
        }
        Ok(())
    }

    pub fn delete<S: SheetStore + ?Sized>(store: &mut S, id: &str) -> AppResult<bool> {
        let removed = Table::new(store, Income::SCHEMA).delete_by_key(id)?;
        if removed {
            store.log("del", Income::SCHEMA.name, &format!("Income {id} deleted"))?;
        }
        Ok(removed)
    }

    pub fn list<S: SheetStore + ?Sized>(store: &mut S) -> AppResult<Scan<Income>> {
        Table::new(store, Income::SCHEMA).read_records()
    }
}
