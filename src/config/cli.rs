use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_config_non_empty, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "lesson-kit")]
#[command(about = "Classroom log calculator, person record and login check")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Compute the natural logarithm of a number
    Log {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },
    /// Build a person record, apply changes and print it
    Person {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        age: Option<i32>,
        #[arg(long)]
        set_name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        set_age: Option<String>,
    },
    /// Check a username and password
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Read commands from stdin, one per line
    Repl,
    /// Replay the encapsulation walkthrough
    Demo,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_config_non_empty("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_with_negative_input() {
        let config = CliConfig::try_parse_from(["lesson-kit", "log", "-5"]).unwrap();
        assert!(matches!(config.command, Command::Log { ref input } if input == "-5"));
    }

    #[test]
    fn test_parse_person_with_global_flags() {
        let config = CliConfig::try_parse_from([
            "lesson-kit",
            "person",
            "--name",
            "Jane",
            "--age",
            "25",
            "--set-age",
            "-1",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(config.format, Some(OutputFormat::Json));
        match config.command {
            Command::Person { name, age, set_age, .. } => {
                assert_eq!(name, "Jane");
                assert_eq!(age, Some(25));
                assert_eq!(set_age.as_deref(), Some("-1"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_empty_config_path_is_invalid() {
        let config =
            CliConfig::try_parse_from(["lesson-kit", "--config", "", "repl"]).unwrap();
        assert!(config.validate().is_err());
    }
}
