//! Incoming request envelope and its typed form.

use crate::models::{Income, Payment, Penalty};
use crate::models::lenient;
use serde::Deserialize;
use serde::de;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Raw `{action, data}` body as posted by the client.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Every action name the gateway understands (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddIncome,
    UpdateIncome,
    DeleteIncome,
    GetAllData,
    AddPayment,
    DeletePayment,
    AddPenalty,
    DeletePenalty,
    AddOperator,
    DeleteOperator,
    AddAnketa,
    DeleteAnketa,
    AddAdmin,
    DeleteAdmin,
}

impl Action {
    pub const ALL: [Action; 14] = [
        Action::AddIncome,
        Action::UpdateIncome,
        Action::DeleteIncome,
        Action::GetAllData,
        Action::AddPayment,
        Action::DeletePayment,
        Action::AddPenalty,
        Action::DeletePenalty,
        Action::AddOperator,
        Action::DeleteOperator,
        Action::AddAnketa,
        Action::DeleteAnketa,
        Action::AddAdmin,
        Action::DeleteAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::AddIncome => "addIncome",
            Action::UpdateIncome => "updateIncome",
            Action::DeleteIncome => "deleteIncome",
            Action::GetAllData => "getAllData",
            Action::AddPayment => "addPayment",
            Action::DeletePayment => "deletePayment",
            Action::AddPenalty => "addPenalty",
            Action::DeletePenalty => "deletePenalty",
            Action::AddOperator => "addOperator",
            Action::DeleteOperator => "deleteOperator",
            Action::AddAnketa => "addAnketa",
            Action::DeleteAnketa => "deleteAnketa",
            Action::AddAdmin => "addAdmin",
            Action::DeleteAdmin => "deleteAdmin",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .iter()
            .copied()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}

/// `{id}` payload of the delete-by-id actions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IdRef {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
}

/// `{name}` payload of the name-list actions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NameRef {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
}

/// Which name sheet a name action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameList {
    Operators,
    Ankety,
    Admins,
}

/// An action together with its typed payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddIncome(Income),
    UpdateIncome(Income),
    DeleteIncome(IdRef),
    GetAllData,
    AddPayment(Payment),
    DeletePayment(IdRef),
    AddPenalty(Penalty),
    DeletePenalty(IdRef),
    AddName(NameList, NameRef),
    DeleteName(NameList, NameRef),
}

impl Command {
    /// Decode the payload that belongs to `action`. Every action except
    /// `getAllData` needs a `data` object; a missing or null one is an error.
    pub fn parse(action: Action, data: Value) -> Result<Self, serde_json::Error> {
        if action == Action::GetAllData {
            return Ok(Command::GetAllData);
        }
        if data.is_null() {
            return Err(de::Error::custom(format!("{action}: missing data")));
        }

        Ok(match action {
            Action::AddIncome => Command::AddIncome(serde_json::from_value(data)?),
            Action::UpdateIncome => Command::UpdateIncome(serde_json::from_value(data)?),
            Action::DeleteIncome => Command::DeleteIncome(serde_json::from_value(data)?),
            Action::GetAllData => Command::GetAllData,
            Action::AddPayment => Command::AddPayment(serde_json::from_value(data)?),
            Action::DeletePayment => Command::DeletePayment(serde_json::from_value(data)?),
            Action::AddPenalty => Command::AddPenalty(serde_json::from_value(data)?),
            Action::DeletePenalty => Command::DeletePenalty(serde_json::from_value(data)?),
            Action::AddOperator => {
                Command::AddName(NameList::Operators, serde_json::from_value(data)?)
            }
            Action::DeleteOperator => {
                Command::DeleteName(NameList::Operators, serde_json::from_value(data)?)
            }
            Action::AddAnketa => Command::AddName(NameList::Ankety, serde_json::from_value(data)?),
            Action::DeleteAnketa => {
                Command::DeleteName(NameList::Ankety, serde_json::from_value(data)?)
            }
            Action::AddAdmin => Command::AddName(NameList::Admins, serde_json::from_value(data)?),
            Action::DeleteAdmin => {
                Command::DeleteName(NameList::Admins, serde_json::from_value(data)?)
            }
        })
    }
}
