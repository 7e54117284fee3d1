//! Credential Store - obtains one working API key per process.
//!
//! The stored key is probed first. Until a key passes the probe the user is
//! asked again, with no upper bound. The first working key typed in is
//! persisted exactly once and then held read-only.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ContentModel, CredentialRepository, SessionPresenter, UserPrompt},
        services::session::SessionEvent,
    },
    domain::{Credential, prompts::PROBE_PROMPT},
    error::{CoreError, CoreResult},
};

pub const CREDENTIAL_QUESTION: &str = "Please enter your Gemini API key";

pub struct CredentialStore {
    repository: Box<dyn CredentialRepository>,
    model: Arc<dyn ContentModel>,
}

impl CredentialStore {
    pub fn new(repository: Box<dyn CredentialRepository>, model: Arc<dyn ContentModel>) -> Self {
        Self { repository, model }
    }

    /// Return a credential the model accepts.
    ///
    /// Fails with `CredentialUnavailable` only when the prompt itself fails,
    /// and passes `PromptCancelled` through unchanged. A rejected key always
    /// leads to another prompt.
    #[instrument(skip_all)]
    pub fn ensure_valid_credential(
        &self,
        prompt: &dyn UserPrompt,
        presenter: &dyn SessionPresenter,
    ) -> CoreResult<Credential> {
        match self.repository.load() {
            Ok(Some(stored)) => {
                presenter.present(&SessionEvent::CredentialFound {
                    masked: stored.masked(),
                });
                if self.probe(&stored) {
                    info!("Stored API key accepted");
                    return Ok(stored);
                }
                presenter.present(&SessionEvent::CredentialRejected);
            }
            Ok(None) => presenter.present(&SessionEvent::CredentialMissing),
            Err(e) => {
                warn!(error = %e, "Could not read stored API key");
                presenter.present(&SessionEvent::CredentialMissing);
            }
        }

        loop {
            let raw = prompt.secret(CREDENTIAL_QUESTION).map_err(|e| match e {
                CoreError::Application(ApplicationError::PromptCancelled) => e,
                other => ApplicationError::CredentialUnavailable {
                    reason: other.to_string(),
                }
                .into(),
            })?;

            let candidate = match Credential::new(raw) {
                Ok(c) => c,
                Err(e) => {
                    presenter.present(&SessionEvent::problem(&e.into()));
                    continue;
                }
            };

            if !self.probe(&candidate) {
                presenter.present(&SessionEvent::CredentialRejected);
                continue;
            }

            self.repository.save(&candidate)?;
            info!(key = %candidate.masked(), "API key validated and saved");
            presenter.present(&SessionEvent::CredentialSaved {
                masked: candidate.masked(),
            });
            return Ok(candidate);
        }
    }

    fn probe(&self, credential: &Credential) -> bool {
        match self.model.generate(credential, PROBE_PROMPT) {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, key = %credential.masked(), "API key probe failed");
                false
            }
        }
    }
}
