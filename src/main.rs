use anyhow::Context;
use clap::Parser;
use lesson_kit::core::desk::demo_events;
use lesson_kit::utils::error::ErrorSeverity;
use lesson_kit::utils::{logger, validation::Validate};
use lesson_kit::{
    CliConfig, Command, Desk, Event, LessonConfig, LessonError, OutputFormat,
    PersonRecord, Response,
};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    match run(config) {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            let Some(lesson_error) = e.downcast_ref::<LessonError>() else {
                return Err(e);
            };

            tracing::error!(
                "❌ {:#} (Category: {:?}, Severity: {:?})",
                e,
                lesson_error.category(),
                lesson_error.severity()
            );
            tracing::error!("💡 Suggestion: {}", lesson_error.recovery_suggestion());
            eprintln!("❌ {}", lesson_error.user_friendly_message());

            let exit_code = match lesson_error.severity() {
                ErrorSeverity::Low => 1,
                ErrorSeverity::High => 2,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

/// Returns whether every response was successful.
fn run(config: CliConfig) -> anyhow::Result<bool> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            LessonConfig::from_file(path)
                .with_context(|| format!("loading config file '{}'", path))?
        }
        None => LessonConfig::default(),
    };
    file_config.validate()?;

    let format = config
        .format
        .or_else(|| file_config.output_format())
        .unwrap_or_default();

    match config.command {
        Command::Log { input } => {
            let mut desk = Desk::from_config(&file_config)?;
            emit(&[desk.handle(Event::Log { input })], format)
        }
        Command::Person {
            name,
            age,
            set_name,
            set_age,
        } => {
            let person = PersonRecord::try_new(name, age)?;
            let mut desk = Desk::with_credentials_config(file_config.credentials.clone(), person);

            let mut events = Vec::new();
            if let Some(candidate) = set_name {
                events.push(Event::SetName { candidate });
            }
            if let Some(candidate) = set_age {
                events.push(Event::SetAge { candidate });
            }
            events.push(Event::Show);

            let responses: Vec<Response> = events.into_iter().map(|e| desk.handle(e)).collect();
            emit(&responses, format)
        }
        Command::Login { username, password } => {
            let mut desk = Desk::from_config(&file_config)?;
            emit(&[desk.handle(Event::Login { username, password })], format)
        }
        Command::Repl => {
            let mut desk = Desk::from_config(&file_config)?;
            if format == OutputFormat::Text {
                eprintln!("Type 'help' for a list of commands, 'quit' to leave.");
            }
            let stdin = io::stdin();
            desk.run_session(stdin.lock(), io::stdout().lock(), format)?;
            Ok(true)
        }
        Command::Demo => {
            let mut desk = Desk::from_config(&file_config)?;
            let responses: Vec<Response> =
                demo_events().into_iter().map(|e| desk.handle(e)).collect();
            emit(&responses, format)
        }
    }
}

fn emit(responses: &[Response], format: OutputFormat) -> anyhow::Result<bool> {
    let mut out = io::stdout().lock();
    for response in responses {
        writeln!(out, "{}", response.render(format)?)?;
    }
    out.flush().context("flushing stdout")?;
    Ok(responses.iter().all(|r| r.ok))
}
