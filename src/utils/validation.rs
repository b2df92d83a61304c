use crate::utils::error::{LessonError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects the empty string only; whitespace counts as content.
pub fn validate_non_empty(field_name: &str, value: &str, reason: &str) -> Result<()> {
    if value.is_empty() {
        return Err(LessonError::constraint(field_name, value, reason));
    }
    Ok(())
}

pub fn validate_non_negative(field_name: &str, value: i64, reason: &str) -> Result<()> {
    if value < 0 {
        return Err(LessonError::constraint(field_name, value, reason));
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64, reason: &str) -> Result<()> {
    if value <= 0.0 {
        return Err(LessonError::constraint(field_name, value, reason));
    }
    Ok(())
}

pub fn validate_config_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        assert!(validate_non_empty("name", "Jane", "empty").is_ok());
        assert!(validate_non_empty("name", " ", "empty").is_ok());
        assert!(validate_non_empty("name", "", "empty").is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative("age", 0, "negative").is_ok());
        assert!(validate_non_negative("age", -1, "negative").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("number", 0.5, "not positive").is_ok());
        assert!(validate_positive("number", 0.0, "not positive").is_err());
        assert!(validate_positive("number", -0.0, "not positive").is_err());
    }

    #[test]
    fn test_validate_config_values() {
        assert!(validate_config_non_empty("credentials.username", "   ").is_err());
        assert!(validate_one_of("output.format", "json", &["text", "json"]).is_ok());
        assert!(validate_one_of("output.format", "xml", &["text", "json"]).is_err());
    }
}
