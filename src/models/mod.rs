pub mod income;
pub mod lenient;
pub mod payment;
pub mod penalty;

pub use income::{Income, SourceBreakdown, Sources, Total};
pub use payment::{Payment, PaymentType};
pub use penalty::Penalty;
