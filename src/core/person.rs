use crate::domain::model::PersonKind;
use crate::domain::ports::ValidationObserver;
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::validate_non_empty;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub const NAME_REJECTED: &str = "Name cannot be null or empty.";
pub const AGE_REJECTED: &str = "Age cannot be negative.";

/// A person with a name and, optionally, an age.
///
/// Setters never fail loudly: a rejected value is discarded, the previous
/// value stays, and the rejection is handed to the observer (if any) and
/// reported back to the caller.
#[derive(Clone, Serialize, Deserialize)]
pub struct PersonRecord {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(skip)]
    observer: Option<Arc<dyn ValidationObserver>>,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age: Some(age),
            observer: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: None,
            observer: None,
        }
    }

    /// Like `new`, but applies the same rules as the setters.
    pub fn try_new(name: impl Into<String>, age: Option<i32>) -> Result<Self> {
        let name = name.into();
        validate_non_empty("name", &name, NAME_REJECTED)?;
        let age = age.map(checked_age).transpose()?;
        Ok(Self {
            name,
            age,
            observer: None,
        })
    }

    pub fn with_observer(mut self, observer: impl ValidationObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn kind(&self) -> PersonKind {
        match self.age {
            Some(_) => PersonKind::NameAndAge,
            None => PersonKind::NameOnly,
        }
    }

    pub fn set_name(&mut self, candidate: impl Into<String>) -> bool {
        let result = self.try_set_name(candidate);
        self.report(result)
    }

    /// Accepts any age ≥ 0. A name-only record gains an age.
    pub fn set_age(&mut self, candidate: i32) -> bool {
        let result = self.try_set_age(candidate);
        self.report(result)
    }

    pub fn try_set_name(&mut self, candidate: impl Into<String>) -> Result<()> {
        let candidate = candidate.into();
        validate_non_empty("name", &candidate, NAME_REJECTED)?;
        tracing::debug!("Name changed from '{}' to '{}'", self.name, candidate);
        self.name = candidate;
        Ok(())
    }

    pub fn try_set_age(&mut self, candidate: i32) -> Result<()> {
        let age = checked_age(candidate)?;
        tracing::debug!("Age changed from {:?} to {}", self.age, age);
        self.age = Some(age);
        Ok(())
    }

    pub fn display(&self) -> String {
        match self.age {
            Some(age) => format!("Name: {}\nAge: {}", self.name, age),
            None => format!("Name: {}", self.name),
        }
    }

    fn report(&self, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                if let Some(observer) = &self.observer {
                    observer.on_rejected(&e);
                }
                false
            }
        }
    }
}

fn checked_age(candidate: i32) -> Result<u32> {
    u32::try_from(candidate).map_err(|_| LessonError::constraint("age", candidate, AGE_REJECTED))
}

impl fmt::Debug for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonRecord")
            .field("name", &self.name)
            .field("age", &self.age)
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

impl PartialEq for PersonRecord {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.age == other.age
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_display_name_and_age() {
        let person = PersonRecord::new("Jane", 25);
        assert_eq!(person.display(), "Name: Jane\nAge: 25");
        assert_eq!(person.kind(), PersonKind::NameAndAge);
    }

    #[test]
    fn test_display_name_only() {
        let person = PersonRecord::named("Jane");
        assert_eq!(person.display(), "Name: Jane");
        assert_eq!(person.kind(), PersonKind::NameOnly);
    }

    #[test]
    fn test_negative_age_keeps_previous_value() {
        let mut person = PersonRecord::new("John Doe", 30);
        assert!(!person.set_age(-1));
        assert_eq!(person.age(), Some(30));
        assert_eq!(person.display(), "Name: John Doe\nAge: 30");
    }

    #[test]
    fn test_empty_name_keeps_previous_value() {
        let mut person = PersonRecord::new("John Doe", 30);
        assert!(!person.set_name(""));
        assert_eq!(person.name(), "John Doe");
    }

    #[test]
    fn test_set_age_upgrades_name_only_record() {
        let mut person = PersonRecord::named("Jane");
        assert!(person.set_age(0));
        assert_eq!(person.kind(), PersonKind::NameAndAge);
    }

    #[test]
    fn test_observer_receives_rejections() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut person = PersonRecord::new("John Doe", 30).with_observer(move |e: &LessonError| {
            sink.lock().unwrap().push(e.user_friendly_message());
        });

        assert!(person.set_name("Jane Smith"));
        assert!(!person.set_name(""));
        assert!(!person.set_age(-4));

        assert_eq!(
            *seen.lock().unwrap(),
            vec![NAME_REJECTED.to_string(), AGE_REJECTED.to_string()]
        );
    }

    #[test]
    fn test_try_new_validates() {
        assert!(PersonRecord::try_new("", Some(3)).is_err());
        assert!(PersonRecord::try_new("Ann", Some(-3)).is_err());
        assert_eq!(
            PersonRecord::try_new("Ann", None).unwrap(),
            PersonRecord::named("Ann")
        );
    }

    #[test]
    fn test_serialize_skips_observer() {
        let person = PersonRecord::new("Jane", 25).with_observer(|_: &LessonError| {});
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Jane", "age": 25}));
    }
}
