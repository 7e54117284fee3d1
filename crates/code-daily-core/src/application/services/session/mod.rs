//! Session Controller - the interactive state machine.
//!
//! ```text
//! AwaitingCredential ─► SelectingLanguage ─► SelectingSection ─► Generating
//!                          ▲        │                                 │
//!                          │       Exit                          Scaffolding
//!                          │        ▼                                 │
//!   OfferingContinuation ──┴─► Terminated      OfferingSolution ◄─────┘
//!          ▲                                   (Idle ⇄ AwaitingExerciseNumber
//!          └──────────── declined ─────────────  ⇄ GeneratingSolution)
//! ```
//!
//! Each call to [`SessionController::step`] asks at most one question or
//! makes at most one outbound call, so transitions can be driven one at a
//! time with scripted answers.

mod event;
mod state;

pub use event::SessionEvent;
pub use state::{Round, SessionState, SolutionPhase};

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ContentGenerator, CredentialStore, GenerationStage, WorkspaceScaffolder,
        ports::{ContentModel, SessionPresenter, UserPrompt},
    },
    domain::{ExerciseNumber, catalog},
    error::{CoreError, CoreResult},
};

pub const LANGUAGE_QUESTION: &str = "Choose a programming language";
pub const SECTION_QUESTION: &str = "Choose a section";
pub const SOLUTION_QUESTION: &str = "Would you like to see a solution for any exercise?";
pub const NUMBER_QUESTION: &str = "Enter the exercise number (1-5)";
pub const CONTINUE_QUESTION: &str = "What would you like to do next?";
pub const CONTINUE_CHOICE: &str = "Generate More Exercises";
pub const EXIT_CHOICE: &str = "Exit";

pub struct SessionController {
    credentials: CredentialStore,
    model: Arc<dyn ContentModel>,
    scaffolder: WorkspaceScaffolder,
    prompt: Box<dyn UserPrompt>,
    presenter: Box<dyn SessionPresenter>,
    generator: Option<ContentGenerator>,
}

impl SessionController {
    pub fn new(
        credentials: CredentialStore,
        model: Arc<dyn ContentModel>,
        scaffolder: WorkspaceScaffolder,
        prompt: Box<dyn UserPrompt>,
        presenter: Box<dyn SessionPresenter>,
    ) -> Self {
        Self {
            credentials,
            model,
            scaffolder,
            prompt,
            presenter,
            generator: None,
        }
    }

    /// Drive the session from `AwaitingCredential` until the user exits.
    ///
    /// Returns the first unrecoverable error.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> CoreResult<()> {
        let mut state = SessionState::AwaitingCredential;
        while !state.is_terminal() {
            state = self.step(state)?;
        }
        self.presenter.present(&SessionEvent::Farewell);
        info!("Session finished");
        Ok(())
    }

    /// Perform one transition.
    pub fn step(&mut self, state: SessionState) -> CoreResult<SessionState> {
        debug!(state = state.name(), "Session step");

        match state {
            SessionState::AwaitingCredential => {
                let credential = self
                    .credentials
                    .ensure_valid_credential(self.prompt.as_ref(), self.presenter.as_ref())?;
                self.generator = Some(ContentGenerator::new(Arc::clone(&self.model), credential));
                Ok(SessionState::SelectingLanguage)
            }

            SessionState::SelectingLanguage => {
                let languages = catalog::languages();
                let mut choices: Vec<&str> = languages.iter().map(|p| p.display_name()).collect();
                choices.push(EXIT_CHOICE);

                let picked = self.prompt.select(LANGUAGE_QUESTION, &choices, 0)?;
                Ok(match languages.get(picked) {
                    Some(profile) => SessionState::SelectingSection {
                        language: profile.key,
                    },
                    None => SessionState::Terminated,
                })
            }

            SessionState::SelectingSection { language } => {
                let sections = catalog::sections_for(language);
                let choices: Vec<&str> = sections.iter().map(|s| s.display_name()).collect();

                let picked = self.prompt.select(SECTION_QUESTION, &choices, 0)?;
                let section = sections.get(picked).copied().ok_or_else(|| CoreError::Internal {
                    message: format!("section choice {picked} out of range"),
                })?;
                Ok(SessionState::Generating { language, section })
            }

            SessionState::Generating { language, section } => {
                let generator = self.generator()?;
                let batch = self.tracked(GenerationStage::Exercises, || {
                    generator.generate_batch(language, section)
                })?;

                Ok(SessionState::Scaffolding {
                    language,
                    section,
                    batch,
                })
            }

            SessionState::Scaffolding {
                language,
                section,
                batch,
            } => {
                let workspace = self.scaffolder.materialize(language, section, &batch)?;
                self.presenter.present(&SessionEvent::WorkspaceReady {
                    root: workspace.root().to_path_buf(),
                    starter_files: catalog::templates_for(language, section).len(),
                });
                Ok(SessionState::OfferingSolution {
                    round: Round { workspace, batch },
                    phase: SolutionPhase::Idle,
                })
            }

            SessionState::OfferingSolution { round, phase } => self.offer_solution(round, phase),

            SessionState::OfferingContinuation => {
                let picked =
                    self.prompt
                        .select(CONTINUE_QUESTION, &[CONTINUE_CHOICE, EXIT_CHOICE], 0)?;
                if picked == 0 {
                    self.presenter.present(&SessionEvent::RoundFinished);
                    Ok(SessionState::SelectingLanguage)
                } else {
                    Ok(SessionState::Terminated)
                }
            }

            SessionState::Terminated => Ok(SessionState::Terminated),
        }
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn offer_solution(&self, round: Round, phase: SolutionPhase) -> CoreResult<SessionState> {
        let next = match phase {
            SolutionPhase::Idle => {
                if !self.prompt.confirm(SOLUTION_QUESTION, false)? {
                    return Ok(SessionState::OfferingContinuation);
                }
                SolutionPhase::AwaitingExerciseNumber
            }

            SolutionPhase::AwaitingExerciseNumber => {
                let raw = self.prompt.input(NUMBER_QUESTION)?;
                match raw.parse::<ExerciseNumber>() {
                    Ok(number) => SolutionPhase::GeneratingSolution { number },
                    Err(e) => {
                        self.presenter
                            .present(&SessionEvent::problem(&CoreError::from(e)));
                        SolutionPhase::AwaitingExerciseNumber
                    }
                }
            }

            SolutionPhase::GeneratingSolution { number } => match self.solve(&round, number) {
                Ok(()) => SolutionPhase::Idle,
                Err(e) if e.is_recoverable_in_session() => {
                    warn!(error = %e, number = %number, "Solution not produced");
                    self.presenter.present(&SessionEvent::problem(&e));
                    SolutionPhase::Idle
                }
                Err(e) => return Err(e),
            },
        };

        Ok(SessionState::OfferingSolution { round, phase: next })
    }

    fn solve(&self, round: &Round, number: ExerciseNumber) -> CoreResult<()> {
        // Extraction failures never reach the model.
        let exercise = round.batch.exercise(number)?;
        let generator = self.generator()?;

        let solution = self.tracked(GenerationStage::Solution, || {
            generator.generate_solution(exercise, round.workspace.language())
        })?;

        let path = self
            .scaffolder
            .write_solution(&round.workspace, number, &solution)?;
        self.presenter.present(&SessionEvent::SolutionSaved {
            number,
            path,
            text: solution.as_str().to_string(),
        });
        Ok(())
    }

    /// Brackets a model call with start and finish (or failure) events.
    fn tracked<T>(
        &self,
        stage: GenerationStage,
        call: impl FnOnce() -> CoreResult<T>,
    ) -> CoreResult<T> {
        self.presenter.present(&SessionEvent::GenerationStarted(stage));
        let result = call();
        let outcome = match result {
            Ok(_) => SessionEvent::GenerationFinished(stage),
            Err(_) => SessionEvent::GenerationFailed(stage),
        };
        self.presenter.present(&outcome);
        result
    }

    fn generator(&self) -> CoreResult<&ContentGenerator> {
        self.generator.as_ref().ok_or_else(|| CoreError::Internal {
            message: "content generator used before a credential was obtained".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        testing::{
            Answer, FixedClock, InMemoryCredentials, RecordingFilesystem, RecordingPresenter,
            ScriptedPrompt, StubModel, model_error,
        },
    };
    use crate::domain::{LanguageKey, SectionKey};

    const BATCH: &str = "# Exercise 1\nReverse a string.\n\n\
        # Exercise 2\nMerge two sorted arrays.\n\n\
        # Exercise 3\nDebounce a function.\n\n\
        # Exercise 4\nFlatten a nested array.\n\n\
        # Exercise 5\nBuild a todo list.\n";

    const BATCH_WITHOUT_THREE: &str = "# Exercise 1\nOne.\n# Exercise 2\nTwo.\n\
        # Exercise 4\nFour.\n# Exercise 5\nFive.\n";

    struct Harness {
        model: Arc<StubModel>,
        prompt: ScriptedPrompt,
        presenter: RecordingPresenter,
        fs: RecordingFilesystem,
        credentials: InMemoryCredentials,
    }

    impl Harness {
        fn new(
            replies: impl IntoIterator<Item = CoreResult<String>>,
            answers: impl IntoIterator<Item = Answer>,
        ) -> Self {
            Self {
                model: StubModel::new(replies),
                prompt: ScriptedPrompt::new(answers),
                presenter: RecordingPresenter::default(),
                fs: RecordingFilesystem::default(),
                credentials: InMemoryCredentials::default(),
            }
        }

        fn with_stored_key(mut self) -> Self {
            self.credentials = InMemoryCredentials::with("stored-key-4242");
            self
        }

        fn controller(&self) -> SessionController {
            let model: Arc<dyn ContentModel> = self.model.clone();
            SessionController::new(
                CredentialStore::new(Box::new(self.credentials.clone()), Arc::clone(&model)),
                model,
                WorkspaceScaffolder::new(
                    Box::new(self.fs.clone()),
                    Box::new(FixedClock::ymd(2024, 5, 1)),
                    "ws",
                ),
                Box::new(self.prompt.clone()),
                Box::new(self.presenter.clone()),
            )
        }
    }

    #[test]
    fn full_round_writes_workspace_and_solution() {
        let h = Harness::new(
            [Ok("ok".into()), Ok(BATCH.into()), Ok("## Merge\nuse two pointers".into())],
            [
                Answer::Secret("fresh-key-1234"),
                Answer::Select(0), // JavaScript
                Answer::Select(0), // Frontend
                Answer::Confirm(true),
                Answer::Text("2"),
                Answer::Confirm(false),
                Answer::Select(1), // Exit
            ],
        );

        h.controller().run().unwrap();

        let root = "ws/javascript-frontend-2024-05-01";
        assert_eq!(h.fs.file(format!("{root}/exercises.md")).as_deref(), Some(BATCH));
        assert_eq!(
            h.fs.file(format!("{root}/solution-2.md")).as_deref(),
            Some("## Merge\nuse two pointers")
        );

        let prompts = h.model.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[2].contains("Merge two sorted arrays."));
        assert!(!prompts[2].contains("Debounce"));

        assert_eq!(h.prompt.remaining(), 0);
        assert_eq!(h.credentials.saves().len(), 1);
        assert_eq!(h.presenter.events().last(), Some(&SessionEvent::Farewell));
    }

    #[test]
    fn exit_from_language_menu_terminates() {
        let h = Harness::new([Ok("ok".into())], [Answer::Select(5)]).with_stored_key();

        h.controller().run().unwrap();

        assert_eq!(h.prompt.asked(), vec![LANGUAGE_QUESTION.to_string()]);
        assert!(h.fs.file_paths().is_empty());
        assert_eq!(h.model.prompts().len(), 1);
    }

    #[test]
    fn out_of_range_number_is_reprompted_without_model_call() {
        let h = Harness::new(
            [Ok("ok".into()), Ok(BATCH.into()), Ok("solution".into())],
            [
                Answer::Select(3), // Rust
                Answer::Select(0), // CLI
                Answer::Confirm(true),
                Answer::Text("7"),
                Answer::Text("zero"),
                Answer::Text("5"),
                Answer::Confirm(false),
                Answer::Select(1),
            ],
        )
        .with_stored_key();

        h.controller().run().unwrap();

        let problems = h
            .presenter
            .events()
            .into_iter()
            .filter(|e| matches!(e, SessionEvent::Problem { .. }))
            .count();
        assert_eq!(problems, 2);
        assert_eq!(h.model.prompts().len(), 3);
        assert!(h.fs.file("ws/rust-cli-2024-05-01/solution-5.md").is_some());
    }

    #[test]
    fn batch_failure_is_fatal() {
        let h = Harness::new(
            [Ok("ok".into()), model_error("quota exceeded")],
            [Answer::Select(4), Answer::Select(1)], // Go, CLI
        )
        .with_stored_key();

        let err = h.controller().run().unwrap_err();

        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::GenerationFailed {
                stage: GenerationStage::Exercises,
                ..
            })
        ));
        assert!(h.fs.file_paths().is_empty());
        let events = h.presenter.events();
        assert!(!events.contains(&SessionEvent::GenerationFinished(GenerationStage::Exercises)));
        assert_eq!(
            events.last(),
            Some(&SessionEvent::GenerationFailed(GenerationStage::Exercises))
        );
        assert!(!events.contains(&SessionEvent::Farewell));
    }

    #[test]
    fn solution_failure_keeps_offering() {
        let h = Harness::new(
            [Ok("ok".into()), Ok(BATCH.into()), model_error("timeout")],
            [
                Answer::Select(1), // Python
                Answer::Select(2), // Algorithms
                Answer::Confirm(true),
                Answer::Text("1"),
                Answer::Confirm(false),
                Answer::Select(1),
            ],
        )
        .with_stored_key();

        h.controller().run().unwrap();

        assert!(h.fs.file("ws/python-algorithms-2024-05-01/solution-1.md").is_none());
        let events = h.presenter.events();
        assert!(events.contains(&SessionEvent::GenerationFailed(GenerationStage::Solution)));
        assert!(!events.contains(&SessionEvent::GenerationFinished(GenerationStage::Solution)));
        assert!(h
            .presenter
            .events()
            .iter()
            .any(|e| matches!(e, SessionEvent::Problem { message, .. } if message.contains("timeout"))));
        assert_eq!(h.presenter.events().last(), Some(&SessionEvent::Farewell));
    }

    #[test]
    fn missing_marker_is_reported_without_model_call() {
        let h = Harness::new(
            [Ok("ok".into()), Ok(BATCH_WITHOUT_THREE.into())],
            [
                Answer::Select(2), // TypeScript
                Answer::Select(3), // React
                Answer::Confirm(true),
                Answer::Text("3"),
                Answer::Confirm(false),
                Answer::Select(1),
            ],
        )
        .with_stored_key();

        h.controller().run().unwrap();

        assert_eq!(h.model.prompts().len(), 2);
        assert!(h
            .presenter
            .events()
            .iter()
            .any(|e| matches!(e, SessionEvent::Problem { message, .. } if message.contains("exercise 3"))));
    }

    #[test]
    fn continuation_restarts_at_language_menu() {
        let h = Harness::new(
            [Ok("ok".into()), Ok(BATCH.into()), Ok(BATCH.into())],
            [
                Answer::Select(4), // Go
                Answer::Select(0), // Backend
                Answer::Confirm(false),
                Answer::Select(0), // Generate More Exercises
                Answer::Select(3), // Rust
                Answer::Select(4), // Algorithms
                Answer::Confirm(false),
                Answer::Select(1),
            ],
        )
        .with_stored_key();

        h.controller().run().unwrap();

        assert!(h.fs.file("ws/go-backend-2024-05-01/exercises.md").is_some());
        assert!(h.fs.file("ws/rust-algorithms-2024-05-01/exercises.md").is_some());
        assert!(h.presenter.events().contains(&SessionEvent::RoundFinished));
        // The credential is checked once per process.
        assert_eq!(h.model.prompts().len(), 3);
    }

    #[test]
    fn section_step_maps_choice_to_section() {
        let h = Harness::new([], [Answer::Select(1)]);
        let mut controller = h.controller();

        let next = controller
            .step(SessionState::SelectingSection {
                language: LanguageKey::Rust,
            })
            .unwrap();

        assert_eq!(
            next,
            SessionState::Generating {
                language: LanguageKey::Rust,
                section: SectionKey::WebServer,
            }
        );
    }

    #[test]
    fn generating_without_credential_is_internal_error() {
        let h = Harness::new([], []);
        let mut controller = h.controller();

        let err = controller
            .step(SessionState::Generating {
                language: LanguageKey::Go,
                section: SectionKey::Cli,
            })
            .unwrap_err();

        assert!(matches!(err, CoreError::Internal { .. }));
    }
}
