pub mod credentials;
pub mod desk;
pub mod log_calc;
pub mod person;

pub use crate::domain::model::{LogOutcome, LoginOutcome, PersonKind, RejectReason};
pub use crate::domain::ports::{TracingObserver, ValidationObserver};
pub use crate::utils::error::Result;
