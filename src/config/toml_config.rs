use crate::core::person::{PersonRecord, AGE_REJECTED, NAME_REJECTED};
use crate::domain::model::OutputFormat;
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{
    validate_config_non_empty, validate_non_empty, validate_non_negative, validate_one_of, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonConfig {
    pub credentials: Option<CredentialsConfig>,
    pub person: Option<PersonSeed>,
    pub output: Option<OutputConfig>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Initial person for an interactive session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSeed {
    pub name: String,
    pub age: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

const VALID_FORMATS: [&str; 2] = ["text", "json"];

impl LessonConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LessonError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LessonError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(credentials) = &self.credentials {
            validate_config_non_empty("credentials.username", &credentials.username)?;
            validate_config_non_empty("credentials.password", &credentials.password)?;
        }

        if let Some(person) = &self.person {
            validate_non_empty("person.name", &person.name, NAME_REJECTED)?;
            if let Some(age) = person.age {
                validate_non_negative("person.age", age, AGE_REJECTED)?;
            }
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &VALID_FORMATS)?;
        }

        Ok(())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(OutputFormat::parse)
    }

    /// The session person, defaulting to the classic "John Doe, 30".
    pub fn seed_person(&self) -> Result<PersonRecord> {
        match &self.person {
            Some(seed) => {
                let age = seed
                    .age
                    .map(|age| {
                        i32::try_from(age)
                            .map_err(|_| LessonError::constraint("person.age", age, "Age is too large."))
                    })
                    .transpose()?;
                PersonRecord::try_new(seed.name.clone(), age)
            }
            None => Ok(PersonRecord::new("John Doe", 30)),
        }
    }
}

impl Validate for LessonConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[credentials]
username = "instructor"
password = "s3cret"

[person]
name = "Jane Smith"
age = 25

[output]
format = "json"
"#;
        let config = LessonConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(
            config.seed_person().unwrap(),
            PersonRecord::new("Jane Smith", 25)
        );
        assert_eq!(config.credentials.unwrap().username, "instructor");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LessonConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_format(), None);
        assert_eq!(config.seed_person().unwrap(), PersonRecord::new("John Doe", 30));
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("LESSON_KIT_TEST_PASSWORD", "from-env");
        let config = LessonConfig::from_toml_str(
            r#"
[credentials]
username = "instructor"
password = "${LESSON_KIT_TEST_PASSWORD}"
"#,
        )
        .unwrap();
        assert_eq!(config.credentials.unwrap().password, "from-env");
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad_format = LessonConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_age =
            LessonConfig::from_toml_str("[person]\nname = \"Ann\"\nage = -2\n").unwrap();
        assert!(bad_age.validate().is_err());

        let blank_user = LessonConfig::from_toml_str(
            "[credentials]\nusername = \"  \"\npassword = \"x\"\n",
        )
        .unwrap();
        assert!(blank_user.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = LessonConfig::from_toml_str("[person\nname = 1").unwrap_err();
        assert!(matches!(err, LessonError::TomlError(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[person]\nname = \"Ann\"").unwrap();
        let config = LessonConfig::from_file(file.path()).unwrap();
        assert_eq!(config.seed_person().unwrap(), PersonRecord::named("Ann"));
    }
}
