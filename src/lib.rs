pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::LessonConfig;
pub use crate::core::{
    credentials::CredentialCheck,
    desk::{Desk, Event, Response},
    log_calc::compute,
    person::PersonRecord,
};
pub use domain::model::OutputFormat;
pub use utils::error::{LessonError, Result};
