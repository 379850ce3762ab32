use crate::core::request::NameList;
use crate::db::store::SheetStore;
use crate::errors::AppResult;
use crate::sheet::Table;
use crate::sheet::schema::{self, TableSchema};
use serde_json::Value;

impl NameList {
    pub fn schema(&self) -> &'static TableSchema {
        match self {
            NameList::Operators => &schema::OPERATORS,
            NameList::Ankety => &schema::ANKETY,
            NameList::Admins => &schema::ADMINS,
        }
    }
}

/// Operators, ankety and admins: one-column sheets keyed by name.
pub struct NameLogic;

impl NameLogic {
    /// Append `name` unless an identical name is already there.
    /// Returns whether a row was written.
    pub fn add<S: SheetStore + ?Sized>(store: &mut S, list: NameList, name: &str) -> AppResult<bool> {
        let schema = list.schema();
        let added = {
            let mut table = Table::new(store, schema);
            if table.contains_key(name)? {
                false
            } else {
                table.append(vec![Value::String(name.to_string())])?;
                true
            }
        };

        if added {
            store.log("add", schema.name, name)?;
        }
        Ok(added)
    }

    pub fn delete<S: SheetStore + ?Sized>(store: &mut S, list: NameList, name: &str) -> AppResult<bool> {
        let schema = list.schema();
        let removed = Table::new(store, schema).delete_by_key(name)?;
        if removed {
            store.log("del", schema.name, name)?;
        }
        Ok(removed)
    }

    /// Current names, or the built-in fallback list while the sheet is empty.
    pub fn list<S: SheetStore + ?Sized>(store: &mut S, list: NameList) -> AppResult<Vec<String>> {
        Table::new(store, list.schema()).names()
    }
}
