//! Terminal implementation of the [`UserPrompt`] port, backed by dialoguer.

use std::io::ErrorKind;

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};

use code_daily_core::application::{ApplicationError, ports::UserPrompt};
use code_daily_core::error::{CoreError, CoreResult};

/// Reads answers from the controlling terminal.
///
/// Esc, `q` and Ctrl-C all end the session through
/// [`ApplicationError::PromptCancelled`].
#[derive(Debug, Clone, Copy)]
pub struct TerminalPrompt {
    colorful: bool,
}

impl TerminalPrompt {
    pub fn new(colorful: bool) -> Self {
        Self { colorful }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }
}

impl UserPrompt for TerminalPrompt {
    fn select(&self, question: &str, choices: &[&str], default: usize) -> CoreResult<usize> {
        let theme = self.theme();
        let picked = Select::with_theme(theme.as_ref())
            .with_prompt(question)
            .items(choices)
            .default(default)
            .interact_opt();
        answered(picked)
    }

    fn confirm(&self, question: &str, default: bool) -> CoreResult<bool> {
        let theme = self.theme();
        let answer = Confirm::with_theme(theme.as_ref())
            .with_prompt(question)
            .default(default)
            .interact_opt();
        answered(answer)
    }

    fn input(&self, question: &str) -> CoreResult<String> {
        let theme = self.theme();
        let text = Input::<String>::with_theme(theme.as_ref())
            .with_prompt(question)
            .interact_text();
        answered(text.map(Some))
    }

    fn secret(&self, question: &str) -> CoreResult<String> {
        let theme = self.theme();
        let secret = Password::with_theme(theme.as_ref())
            .with_prompt(question)
            .allow_empty_password(true)
            .interact();
        answered(secret.map(Some))
    }
}

/// `None` (Esc) and an interrupted read both count as cancellation.
fn answered<T>(result: Result<Option<T>, DialoguerError>) -> CoreResult<T> {
    match result {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(ApplicationError::PromptCancelled.into()),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => {
            Err(ApplicationError::PromptCancelled.into())
        }
        Err(err) => Err(CoreError::from(ApplicationError::PromptFailed {
            reason: err.to_string(),
        })),
    }
}
