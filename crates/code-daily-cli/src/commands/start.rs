//! `code-daily start`: the interactive practice session.

use tracing::{info, instrument};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Wire the adapters into a session and run it until the user exits.
#[cfg(feature = "interactive")]
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    use std::sync::Arc;

    use code_daily_adapters::{DotenvCredentialFile, GeminiClient, LocalFilesystem, SystemClock};
    use code_daily_core::application::{
        ApplicationError, CredentialStore, SessionController, WorkspaceScaffolder,
        ports::ContentModel,
    };
    use code_daily_core::error::CoreError;

    use crate::{presenter::TerminalPresenter, prompt::TerminalPrompt};

    let model: Arc<dyn ContentModel> = Arc::new(GeminiClient::new(&config.gemini())?);
    info!(model = %config.model.name, "Content model configured");

    let credentials = CredentialStore::new(
        Box::new(DotenvCredentialFile::new(
            config.credentials.file,
            config.credentials.key_name,
        )),
        Arc::clone(&model),
    );
    let scaffolder = WorkspaceScaffolder::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemClock),
        config.workspace.output_root,
    );

    let presenter = TerminalPresenter::new(output.clone());
    presenter.banner();
    let prompt = TerminalPrompt::new(output.supports_color());

    let mut session = SessionController::new(
        credentials,
        model,
        scaffolder,
        Box::new(prompt),
        Box::new(presenter),
    );

    match session.run() {
        Ok(()) => Ok(()),
        Err(CoreError::Application(ApplicationError::PromptCancelled)) => Err(CliError::Cancelled),
        Err(err) => Err(err.into()),
    }
}

#[cfg(not(feature = "interactive"))]
#[instrument(skip_all)]
pub fn execute(_config: AppConfig, _output: OutputManager) -> CliResult<()> {
    info!("Interactive session requested without the interactive feature");
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
