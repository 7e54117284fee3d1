//! Terminal rendering of [`SessionEvent`]s.

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;

use code_daily_core::application::{GenerationStage, SessionEvent, ports::SessionPresenter};

use crate::output::OutputManager;

const SEPARATOR_WIDTH: usize = 50;

/// Prints session events through the [`OutputManager`] and shows a spinner
/// while the model is working.
pub struct TerminalPresenter {
    output: OutputManager,
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalPresenter {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            spinner: Mutex::new(None),
        }
    }

    /// Greeting shown before the first prompt.
    pub fn banner(&self) {
        let _ = self.output.header("Welcome to code-daily, your daily coding practice");
        let _ = self.output.print(&self.output.dim(
            "Pick a language and a topic; five fresh exercises land in a dated folder.",
        ));
        let _ = self.output.print("");
    }

    fn slot(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        // Poisoning leaves the Option intact.
        self.spinner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn start_spinner(&self, message: String) {
        if self.output.is_quiet() {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(message);
        if let Some(previous) = self.slot().replace(spinner) {
            previous.finish_and_clear();
        }
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self.slot().take() {
            spinner.finish_and_clear();
        }
    }

    fn separator(&self) -> String {
        let line = "─".repeat(SEPARATOR_WIDTH);
        self.output.dim(&line)
    }
}

impl SessionPresenter for TerminalPresenter {
    fn present(&self, event: &SessionEvent) {
        // Terminal write errors are dropped.
        let _ = match event {
            SessionEvent::CredentialFound { masked } => self
                .output
                .info(&format!("Checking stored API key {masked}")),
            SessionEvent::CredentialMissing => self.output.warning("No Gemini API key found"),
            SessionEvent::CredentialRejected => self
                .output
                .error("The API key was rejected, please enter another one"),
            SessionEvent::CredentialSaved { masked } => self
                .output
                .success(&format!("API key {masked} verified and saved")),

            SessionEvent::GenerationStarted(stage) => {
                self.start_spinner(progress_message(*stage).into());
                Ok(())
            }
            SessionEvent::GenerationFinished(stage) => {
                self.stop_spinner();
                self.output.success(finished_message(*stage))
            }
            SessionEvent::GenerationFailed(_) => {
                self.stop_spinner();
                Ok(())
            }

            SessionEvent::WorkspaceReady {
                root,
                starter_files,
            } => self
                .output
                .success(&format!("Workspace ready at {}", root.display()))
                .and_then(|()| {
                    if *starter_files == 0 {
                        self.output.info("Exercise folders start empty for this section")
                    } else {
                        self.output.info(&format!(
                            "Each exercise folder has {starter_files} starter file(s)"
                        ))
                    }
                }),

            SessionEvent::SolutionSaved { number, path, text } => self
                .output
                .header(&format!("Solution for Exercise {number}"))
                .and_then(|()| {
                    self.output
                        .data(&highlight_markdown(text, self.output.supports_color()))
                })
                .and_then(|()| {
                    self.output
                        .success(&format!("Solution saved to {}", path.display()))
                }),

            SessionEvent::Problem {
                message,
                suggestions,
            } => {
                self.stop_spinner();
                let mut result = self.output.error(message);
                for suggestion in suggestions {
                    result = result.and_then(|()| {
                        self.output.print(&format!("  {}", self.output.dim(suggestion)))
                    });
                }
                result
            }

            SessionEvent::RoundFinished => self.output.print(&self.separator()),
            SessionEvent::Farewell => {
                self.stop_spinner();
                self.output.print("Thanks for practicing. See you tomorrow!")
            }
        };
    }
}

fn progress_message(stage: GenerationStage) -> &'static str {
    match stage {
        GenerationStage::Exercises => "Generating exercises...",
        GenerationStage::Solution => "Generating solution...",
    }
}

fn finished_message(stage: GenerationStage) -> &'static str {
    match stage {
        GenerationStage::Exercises => "Exercises generated",
        GenerationStage::Solution => "Solution generated",
    }
}

/// Light highlighting for terminal display: headings in cyan, fenced code in
/// green with dimmed fences. Everything else is passed through.
pub fn highlight_markdown(text: &str, colorful: bool) -> String {
    if !colorful {
        return text.to_owned();
    }

    let mut in_code = false;
    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let painted = if trimmed.starts_with("```") {
            in_code = !in_code;
            line.dimmed().to_string()
        } else if in_code {
            line.green().to_string()
        } else if trimmed.starts_with('#') {
            line.cyan().bold().to_string()
        } else {
            line.to_owned()
        };
        lines.push(painted);
    }
    lines.join("\n")
}
