//! Record Store Gateway: one request body in, one response envelope out.

use crate::core::income::{IncomeLogic, UpdatePolicy};
use crate::core::names::NameLogic;
use crate::core::payments::{PaymentLogic, PenaltyLogic};
use crate::core::request::{Action, Command, Envelope, NameList};
use crate::core::response::{AllData, Response};
use crate::db::store::SheetStore;
use crate::errors::AppResult;
use tracing::{debug, error};

pub struct Gateway<S: SheetStore> {
    store: S,
    policy: UpdatePolicy,
}

impl<S: SheetStore> Gateway<S> {
    pub fn new(store: S, policy: UpdatePolicy) -> Self {
        Self { store, policy }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Handle a raw request body. Never fails: every problem becomes an
    /// error envelope.
    pub fn handle_body(&mut self, body: &str) -> Response {
        let envelope: Envelope = match serde_json::from_str(body) {
            Ok(env) => env,
            Err(e) => {
                error!(error = %e, "malformed request body");
                return Response::failure(e);
            }
        };
        self.handle(envelope)
    }

    pub fn handle(&mut self, envelope: Envelope) -> Response {
        let action = match envelope.action.as_deref().map(str::parse::<Action>) {
            Some(Ok(action)) => action,
            Some(Err(_)) | None => {
                debug!(action = ?envelope.action, "unknown action");
                return Response::unknown_action();
            }
        };

        let command = match Command::parse(action, envelope.data) {
            Ok(cmd) => cmd,
            Err(e) => {
                error!(%action, error = %e, "invalid payload");
                return Response::failure(e);
            }
        };

        match self.execute(command) {
            Ok(resp) => resp,
            Err(e) => {
                error!(%action, error = %e, "request failed");
                Response::failure(e)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> AppResult<Response> {
        let store = &mut self.store;

        match command {
            Command::AddIncome(income) => IncomeLogic::add(store, income)?,
            Command::UpdateIncome(income) => IncomeLogic::update(store, income, self.policy)?,
            Command::DeleteIncome(r) => {
                IncomeLogic::delete(store, &r.id)?;
            }
            Command::GetAllData => return Ok(Response::with_data(self.all_data()?)),
            Command::AddPayment(payment) => PaymentLogic::add(store, payment)?,
            Command::DeletePayment(r) => {
                PaymentLogic::delete(store, &r.id)?;
            }
            Command::AddPenalty(penalty) => PenaltyLogic::add(store, penalty)?,
            Command::DeletePenalty(r) => {
                PenaltyLogic::delete(store, &r.id)?;
            }
            Command::AddName(list, r) => {
                NameLogic::add(store, list, &r.name)?;
            }
            Command::DeleteName(list, r) => {
                NameLogic::delete(store, list, &r.name)?;
            }
        }

        Ok(Response::success())
    }

    /// Incomes and the three name lists. Payments and penalties are not
    /// part of the aggregate read.
    pub fn all_data(&mut self) -> AppResult<AllData> {
        let incomes = IncomeLogic::list(&mut self.store)?;

        Ok(AllData {
            incomes: incomes.records,
            skipped_rows: incomes.skipped,
            operators: NameLogic::list(&mut self.store, NameList::Operators)?,
            ankety: NameLogic::list(&mut self.store, NameList::Ankety)?,
            admins: NameLogic::list(&mut self.store, NameList::Admins)?,
        })
    }
}
