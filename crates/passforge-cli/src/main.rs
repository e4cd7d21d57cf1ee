mod interactive;
mod logging;
mod report;
mod settings;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use passforge_core::{ComponentCounts, CoreError, PolicyValidator};
use passforge_generate::{GenerationError, OsEntropy, SecurePasswordGenerator};
use thiserror::Error;
use uuid::Uuid;

use interactive::{Prompter, SessionOutcome};
use report::{VerdictReport, render_requirements, render_violations};
use settings::{DEFAULT_SETTINGS_FILE, Settings, SettingsError, load_settings, write_default_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("password requirements not met ({0} violation(s))")]
    PolicyRejected(usize),
    #[error("maximum attempts reached ({0})")]
    AttemptsExhausted(u32),
}

#[derive(Parser, Debug)]
#[command(name = "passforge", version, about = "Secure password generator")]
struct Cli {
    /// Path to the settings file.
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    /// Log filter, overriding the configured level.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the password policy.
    Requirements,
    /// Check counts against the policy.
    Validate(ValidateArgs),
    /// Validate counts and print generated passwords.
    Generate(GenerateArgs),
    /// Prompt for counts until the policy is met (default).
    Interactive,
    /// Write a default settings file.
    InitConfig,
}

#[derive(Args, Debug, Clone, Copy)]
struct CountArgs {
    /// Number of lowercase letters.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    lowercase: i64,
    /// Number of uppercase letters.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    uppercase: i64,
    /// Number of symbols from !#$%^&+=*().
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    symbols: i64,
    /// Number of digits.
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    numbers: i64,
}

impl CountArgs {
    fn counts(self) -> Result<ComponentCounts, CoreError> {
        ComponentCounts::new(self.lowercase, self.uppercase, self.symbols, self.numbers)
    }
}

#[derive(Args, Debug)]
struct ValidateArgs {
    #[command(flatten)]
    counts: CountArgs,
    /// Emit the verdict as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    counts: CountArgs,
    /// How many passwords to print.
    #[arg(long, default_value_t = 1)]
    count: u32,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    if let Some(Command::InitConfig) = cli.command {
        write_default_settings(&cli.config)?;
        println!("wrote {}", cli.config.display());
        return Ok(());
    }

    let mut settings = load_settings(&cli.config)?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    logging::init_logging(&settings.logging).map_err(CliError::Logging)?;

    let session_id = Uuid::new_v4().to_string();
    tracing::info!(event = "session_started", session_id = %session_id, config = %cli.config.display());

    let validator = PolicyValidator::new();
    let result = match cli.command.unwrap_or(Command::Interactive) {
        Command::Requirements => {
            print!("{}", render_requirements(validator.policy()));
            Ok(())
        }
        Command::Validate(args) => run_validate(&validator, args),
        Command::Generate(args) => run_generate(&validator, args),
        Command::Interactive => run_interactive(&validator, &settings),
        Command::InitConfig => Ok(()),
    };

    match &result {
        Ok(()) => tracing::info!(event = "session_finished", session_id = %session_id, status = "success"),
        Err(err) => tracing::warn!(event = "session_finished", session_id = %session_id, status = "failed", error = %err),
    }

    result
}

fn run_validate(validator: &PolicyValidator, args: ValidateArgs) -> Result<(), CliError> {
    let counts = args.counts.counts()?;
    let verdict = validator.validate(&counts);
    tracing::info!(event = "counts_validated", valid = verdict.is_valid(), total = counts.total());

    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &VerdictReport::new(&counts, &verdict))?;
        writeln!(stdout)?;
    } else if verdict.is_valid() {
        writeln!(stdout, "ok: {} characters", counts.total())?;
    } else {
        write!(stdout, "{}", render_violations(&verdict))?;
    }

    if verdict.is_valid() {
        Ok(())
    } else {
        Err(CliError::PolicyRejected(verdict.violations().len()))
    }
}

fn run_generate(validator: &PolicyValidator, args: GenerateArgs) -> Result<(), CliError> {
    let counts = args.counts.counts()?;
    let verdict = validator.validate(&counts);
    if !verdict.is_valid() {
        eprint!("{}", render_violations(&verdict));
        return Err(CliError::PolicyRejected(verdict.violations().len()));
    }

    let mut generator = SecurePasswordGenerator::new(OsEntropy::default());
    let mut stdout = io::stdout().lock();
    for _ in 0..args.count {
        let password = generator.generate(&counts)?;
        writeln!(stdout, "{}", password.as_str())?;
    }
    tracing::info!(event = "passwords_generated", count = args.count, length = counts.total());
    Ok(())
}

fn run_interactive(validator: &PolicyValidator, settings: &Settings) -> Result<(), CliError> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut prompter = Prompter::new(stdin, stdout, settings.prompt.clone());
    let mut generator = SecurePasswordGenerator::new(OsEntropy::default());

    match prompter.run(validator, &mut generator)? {
        SessionOutcome::Generated(_) | SessionOutcome::Cancelled => Ok(()),
        SessionOutcome::AttemptsExhausted(attempts) => Err(CliError::AttemptsExhausted(attempts)),
    }
}
