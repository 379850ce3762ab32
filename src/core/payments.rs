use crate::db::store::SheetStore;
use crate::errors::AppResult;
use crate::models::{Payment, Penalty};
use crate::sheet::{Record, Table};

/// Advances and salary payouts.
pub struct PaymentLogic;

impl PaymentLogic {
    pub fn add<S: SheetStore + ?Sized>(store: &mut S, mut payment: Payment) -> AppResult<()> {
        payment.fill_derived();
        Table::new(store, Payment::SCHEMA).append(payment.to_row())?;

        store.log(
            "add",
            Payment::SCHEMA.name,
            &format!(
                "{} {} for {}: {}",
                payment.kind.as_str(),
                payment.id,
                payment.operator,
                payment.amount
            ),
        )?;
        Ok(())
    }

    pub fn delete<S: SheetStore + ?Sized>(store: &mut S, id: &str) -> AppResult<bool> {
        let removed = Table::new(store, Payment::SCHEMA).delete_by_key(id)?;
        if removed {
            store.log("del", Payment::SCHEMA.name, &format!("Payment {id} deleted"))?;
        }
        Ok(removed)
    }
}

pub struct PenaltyLogic;

impl PenaltyLogic {
    pub fn add<S: SheetStore + ?Sized>(store: &mut S, mut penalty: Penalty) -> AppResult<()> {
        penalty.fill_derived();
        Table::new(store, Penalty::SCHEMA).append(penalty.to_row())?;

        store.log(
            "add",
            Penalty::SCHEMA.name,
            &format!(
                "Penalty {} for {}: {} ({})",
                penalty.id, penalty.operator, penalty.amount, penalty.reason
            ),
        )?;
        Ok(())
    }

    pub fn delete<S: SheetStore + ?Sized>(store: &mut S, id: &str) -> AppResult<bool> {
        let removed = Table::new(store, Penalty::SCHEMA).delete_by_key(id)?;
        if removed {
            store.log("del", Penalty::SCHEMA.name, &format!("Penalty {id} deleted"))?;
        }
        Ok(removed)
    }
}
