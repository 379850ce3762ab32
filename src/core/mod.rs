pub mod backup;
pub mod gateway;
pub mod import;
pub mod income;
pub mod legacy;
pub mod log;
pub mod names;
pub mod payments;
pub mod request;
pub mod response;

pub use gateway::Gateway;
pub use income::UpdatePolicy;
pub use request::{Action, Command, Envelope, NameList};
pub use response::{AllData, Response, Status};
