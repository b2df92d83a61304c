use crate::config::toml_config::{CredentialsConfig, LessonConfig};
use crate::core::credentials::CredentialCheck;
use crate::core::log_calc;
use crate::core::person::{PersonRecord, AGE_REJECTED, NAME_REJECTED};
use crate::domain::model::OutputFormat;
use crate::domain::ports::TracingObserver;
use crate::utils::error::{LessonError, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::str::FromStr;

pub const HELP_TEXT: &str = "Commands:
  log <number>             natural logarithm of a number
  name <text>              change the person's name
  age <whole number>       change the person's age
  show                     print the person
  login <user> <password>  check credentials
  help                     this list
  quit                     leave";

const AGE_FORMAT_REJECTED: &str = "Invalid input. Please enter a whole number.";

/// One user action, the equivalent of a button click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Log { input: String },
    SetName { candidate: String },
    SetAge { candidate: String },
    Show,
    Login { username: String, password: String },
    Help,
    Quit,
}

impl FromStr for Event {
    type Err = LessonError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let event = match command.to_ascii_lowercase().as_str() {
            "log" => Event::Log {
                input: rest.to_string(),
            },
            "name" => Event::SetName {
                candidate: rest.to_string(),
            },
            "age" => Event::SetAge {
                candidate: rest.to_string(),
            },
            "show" => Event::Show,
            "login" => {
                // the password is everything after the username, spaces included
                let (username, password) = rest
                    .split_once(char::is_whitespace)
                    .map(|(username, password)| (username, password.trim_start()))
                    .unwrap_or((rest, ""));
                Event::Login {
                    username: username.to_string(),
                    password: password.to_string(),
                }
            }
            "help" | "?" => Event::Help,
            "quit" | "exit" => Event::Quit,
            _ => {
                return Err(LessonError::invalid_format(
                    "command",
                    command,
                    format!("Unknown command '{}'. Type 'help' for a list of commands.", command),
                ))
            }
        };

        Ok(event)
    }
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Log { .. } => "log",
            Event::SetName { .. } => "name",
            Event::SetAge { .. } => "age",
            Event::Show => "show",
            Event::Login { .. } => "login",
            Event::Help => "help",
            Event::Quit => "quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Log,
    Person,
    Login,
    Help,
    Quit,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub kind: ResponseKind,
    pub ok: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Response {
    fn new(kind: ResponseKind, ok: bool, message: impl Into<String>) -> Self {
        Self {
            kind,
            ok,
            message: message.into(),
            value: None,
        }
    }

    pub fn from_error(error: &LessonError) -> Self {
        Self::new(ResponseKind::Error, false, error.user_friendly_message())
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.message.clone()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

/// Routes events to the three components, one at a time.
///
/// The credential check is only built when the first login arrives.
#[derive(Debug)]
pub struct Desk {
    credentials: Option<CredentialCheck>,
    credentials_config: Option<CredentialsConfig>,
    person: PersonRecord,
}

impl Desk {
    pub fn new(credentials: CredentialCheck, person: PersonRecord) -> Self {
        Self {
            credentials: Some(credentials),
            credentials_config: None,
            person: person.with_observer(TracingObserver),
        }
    }

    pub fn with_credentials_config(
        credentials_config: Option<CredentialsConfig>,
        person: PersonRecord,
    ) -> Self {
        Self {
            credentials: None,
            credentials_config,
            person: person.with_observer(TracingObserver),
        }
    }

    pub fn from_config(config: &LessonConfig) -> Result<Self> {
        let person = config.seed_person()?;
        Ok(Self::with_credentials_config(config.credentials.clone(), person))
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn person(&self) -> &PersonRecord {
        &self.person
    }

    pub fn handle(&mut self, event: Event) -> Response {
        tracing::debug!("Handling '{}' event", event.name());
        match event {
            Event::Log { input } => {
                let outcome = log_calc::compute(&input);
                let mut response =
                    Response::new(ResponseKind::Log, outcome.is_value(), outcome.message());
                response.value = outcome.value();
                response
            }
            Event::SetName { candidate } => {
                if self.person.set_name(candidate) {
                    Response::new(ResponseKind::Person, true, self.person.display())
                } else {
                    Response::new(ResponseKind::Person, false, NAME_REJECTED)
                }
            }
            Event::SetAge { candidate } => match candidate.trim().parse::<i32>() {
                Ok(age) => {
                    if self.person.set_age(age) {
                        Response::new(ResponseKind::Person, true, self.person.display())
                    } else {
                        Response::new(ResponseKind::Person, false, AGE_REJECTED)
                    }
                }
                Err(_) => Response::from_error(&LessonError::invalid_format(
                    "age",
                    &candidate,
                    AGE_FORMAT_REJECTED,
                )),
            },
            Event::Show => Response::new(ResponseKind::Person, true, self.person.display()),
            Event::Login { username, password } => {
                let config = &self.credentials_config;
                let credentials = self
                    .credentials
                    .get_or_insert_with(|| CredentialCheck::from_config(config.as_ref()));
                let outcome = credentials.login(&username, &password);
                Response::new(ResponseKind::Login, outcome.is_granted(), outcome.message())
            }
            Event::Help => Response::new(ResponseKind::Help, true, HELP_TEXT),
            Event::Quit => Response::new(ResponseKind::Quit, true, "Bye."),
        }
    }

    /// Parses and handles one line. Unknown commands become error responses.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match line.parse::<Event>() {
            Ok(event) => self.handle(event),
            Err(e) => Response::from_error(&e),
        }
    }

    /// Processes lines until `quit` or end of input; returns how many were handled.
    pub fn run_session<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        format: OutputFormat,
    ) -> Result<usize> {
        let mut handled = 0;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = self.handle_line(&line);
            handled += 1;
            writeln!(output, "{}", response.render(format)?)?;

            if response.kind == ResponseKind::Quit {
                break;
            }
        }

        output.flush()?;
        tracing::info!("Session finished after {} events", handled);
        Ok(handled)
    }
}

/// The walkthrough from the encapsulation lesson: show, rename, re-age, show.
pub fn demo_events() -> Vec<Event> {
    vec![
        Event::Show,
        Event::SetName {
            candidate: "Jane Smith".to_string(),
        },
        Event::SetAge {
            candidate: "25".to_string(),
        },
        Event::Show,
    ]
}
