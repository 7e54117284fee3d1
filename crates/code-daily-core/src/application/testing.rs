//! Scripted fakes for driving services in unit tests.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::application::{
    ApplicationError,
    ports::{Clock, ContentModel, CredentialRepository, Filesystem, SessionPresenter, UserPrompt},
    services::session::SessionEvent,
};
use crate::domain::Credential;
use crate::error::CoreResult;

// ── Prompt ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Answer {
    Select(usize),
    Confirm(bool),
    Text(&'static str),
    Secret(&'static str),
    /// Esc at whatever prompt comes next.
    Cancel,
}

/// Replays answers in order. Running out of answers is a prompt failure.
#[derive(Clone, Default)]
pub struct ScriptedPrompt {
    answers: Arc<Mutex<VecDeque<Answer>>>,
    asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().collect())),
            asked: Arc::default(),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }

    fn next(&self, question: &str) -> CoreResult<Answer> {
        self.asked.lock().unwrap().push(question.to_string());
        match self.answers.lock().unwrap().pop_front() {
            Some(Answer::Cancel) => Err(ApplicationError::PromptCancelled.into()),
            Some(answer) => Ok(answer),
            None => Err(ApplicationError::PromptFailed {
                reason: format!("no scripted answer for '{question}'"),
            }
            .into()),
        }
    }
}

impl UserPrompt for ScriptedPrompt {
    fn select(&self, question: &str, choices: &[&str], _default: usize) -> CoreResult<usize> {
        match self.next(question)? {
            Answer::Select(i) if i < choices.len() => Ok(i),
            other => panic!("'{question}' expected a selection, script had {other:?}"),
        }
    }

    fn confirm(&self, question: &str, _default: bool) -> CoreResult<bool> {
        match self.next(question)? {
            Answer::Confirm(b) => Ok(b),
            other => panic!("'{question}' expected a confirmation, script had {other:?}"),
        }
    }

    fn input(&self, question: &str) -> CoreResult<String> {
        match self.next(question)? {
            Answer::Text(t) => Ok(t.to_string()),
            other => panic!("'{question}' expected text, script had {other:?}"),
        }
    }

    fn secret(&self, question: &str) -> CoreResult<String> {
        match self.next(question)? {
            Answer::Secret(t) => Ok(t.to_string()),
            other => panic!("'{question}' expected a secret, script had {other:?}"),
        }
    }
}

// ── Presenter ──────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingPresenter {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl RecordingPresenter {
    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SessionPresenter for RecordingPresenter {
    fn present(&self, event: &SessionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

// ── Model ──────────────────────────────────────────────────────────────────

/// Answers prompts from a queue and records every prompt it was sent.
#[derive(Default)]
pub struct StubModel {
    replies: Mutex<VecDeque<CoreResult<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl StubModel {
    pub fn new(replies: impl IntoIterator<Item = CoreResult<String>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into_iter().collect()),
            prompts: Mutex::default(),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ContentModel for StubModel {
    fn generate(&self, _credential: &Credential, prompt: &str) -> CoreResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(ApplicationError::ModelRequest {
                reason: "stub has no reply left".into(),
            }
            .into())
        })
    }
}

pub fn model_error(reason: &str) -> CoreResult<String> {
    Err(ApplicationError::ModelRequest {
        reason: reason.into(),
    }
    .into())
}

// ── Credentials ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct InMemoryCredentials {
    stored: Arc<Mutex<Option<Credential>>>,
    saves: Arc<Mutex<Vec<Credential>>>,
}

impl InMemoryCredentials {
    pub fn with(raw: &str) -> Self {
        let repo = Self::default();
        *repo.stored.lock().unwrap() = Some(Credential::new(raw).unwrap());
        repo
    }

    pub fn saves(&self) -> Vec<Credential> {
        self.saves.lock().unwrap().clone()
    }
}

impl CredentialRepository for InMemoryCredentials {
    fn load(&self) -> CoreResult<Option<Credential>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, credential: &Credential) -> CoreResult<()> {
        *self.stored.lock().unwrap() = Some(credential.clone());
        self.saves.lock().unwrap().push(credential.clone());
        Ok(())
    }
}

// ── Filesystem & clock ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingFilesystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    fail_on: Option<PathBuf>,
}

impl RecordingFilesystem {
    /// Writes to any path ending in `suffix` fail.
    pub fn failing_on(suffix: impl Into<PathBuf>) -> Self {
        Self {
            fail_on: Some(suffix.into()),
            ..Self::default()
        }
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }
}

impl Filesystem for RecordingFilesystem {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        if self.fail_on.as_ref().is_some_and(|s| path.ends_with(s)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path) || self.files.lock().unwrap().contains_key(path)
    }
}

pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn ymd(y: i32, m: u32, d: u32) -> Self {
        Self(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
