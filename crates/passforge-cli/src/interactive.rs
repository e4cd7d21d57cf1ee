//! Prompt loop that collects counts, re-asks on bad input and retries on
//! policy failures.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use passforge_core::{ComponentCounts, PolicyValidator};
use passforge_generate::{EntropySource, Password, SecurePasswordGenerator};

use crate::CliError;
use crate::report::{
    render_configuration, render_password, render_requirements, render_success,
    render_violations,
};
use crate::settings::PromptSettings;

const CANCEL_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// How an interactive session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    Generated(Password),
    Cancelled,
    AttemptsExhausted(u32),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    settings: PromptSettings,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, settings: PromptSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Ask for one count until an in-range integer is entered.
    ///
    /// Returns `None` when the user cancels or input is closed.
    pub fn read_count(&mut self, component: &str) -> Result<Option<u32>, CliError> {
        let PromptSettings {
            min_count,
            max_count,
            allow_cancel,
            ..
        } = self.settings;

        loop {
            write!(self.output, "How many {component}? ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!(event = "input_closed", component);
                return Ok(None);
            }

            let entry = line.trim();
            if entry.is_empty() {
                writeln!(self.output, "Please enter a number ({min_count}-{max_count}).")?;
                continue;
            }

            if allow_cancel && CANCEL_WORDS.contains(&entry.to_lowercase().as_str()) {
                info!(event = "prompt_cancelled", component);
                return Ok(None);
            }

            match entry.parse::<i64>() {
                Ok(value) if value < i64::from(min_count) => {
                    writeln!(self.output, "Minimum: {min_count}")?;
                }
                Ok(value) if value > i64::from(max_count) => {
                    writeln!(self.output, "Maximum: {max_count}")?;
                }
                Ok(value) => {
                    info!(event = "count_entered", component, count = value);
                    // bounded by min_count..=max_count
                    return Ok(u32::try_from(value).ok());
                }
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid input. Enter a whole number ({min_count}-{max_count})."
                    )?;
                    warn!(event = "invalid_count_input", component, input_len = entry.len());
                }
            }
        }
    }

    fn read_counts(&mut self) -> Result<Option<ComponentCounts>, CliError> {
        let Some(lowercase) = self.read_count("lowercase letters")? else {
            return Ok(None);
        };
        let Some(uppercase) = self.read_count("uppercase letters")? else {
            return Ok(None);
        };
        let Some(symbols) = self.read_count("symbols")? else {
            return Ok(None);
        };
        let Some(numbers) = self.read_count("numbers")? else {
            return Ok(None);
        };
        Ok(Some(ComponentCounts {
            lowercase,
            uppercase,
            symbols,
            numbers,
        }))
    }

    /// Run the full session: prompt, validate, and generate once the policy
    /// is satisfied, for at most `max_attempts` rounds.
    pub fn run<S: EntropySource>(
        &mut self,
        validator: &PolicyValidator,
        generator: &mut SecurePasswordGenerator<S>,
    ) -> Result<SessionOutcome, CliError> {
        let max_attempts = self.settings.max_attempts;
        writeln!(self.output, "Secure Password Generator\n")?;
        write!(self.output, "{}", render_requirements(validator.policy()))?;

        for attempt in 1..=max_attempts {
            let Some(counts) = self.read_counts()? else {
                writeln!(self.output, "\nPassword generation cancelled!")?;
                return Ok(SessionOutcome::Cancelled);
            };

            write!(self.output, "\n{}", render_configuration(&counts))?;

            let verdict = validator.validate(&counts);
            info!(
                event = "counts_validated",
                attempt,
                valid = verdict.is_valid(),
                violations = verdict.violations().len()
            );

            if verdict.is_valid() {
                write!(self.output, "\n{}", render_success(&counts))?;
                let password = generator.generate(&counts)?;
                write!(self.output, "\n{}", render_password(&password))?;
                return Ok(SessionOutcome::Generated(password));
            }

            write!(self.output, "\n{}", render_violations(&verdict))?;
            if attempt < max_attempts {
                writeln!(
                    self.output,
                    "\nLet's try again... (Attempt {}/{max_attempts})\n",
                    attempt + 1
                )?;
            } else {
                writeln!(self.output, "\nMaximum attempts reached.")?;
                writeln!(self.output, "Restart the program to try again.")?;
            }
        }

        Ok(SessionOutcome::AttemptsExhausted(max_attempts))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
