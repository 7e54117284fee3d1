//! Content Generator - prompts the model for exercises and solutions.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, GenerationStage, ports::ContentModel},
    domain::{Credential, ExerciseBatch, LanguageKey, SectionKey, Solution, prompts},
    error::CoreResult,
};

/// Wraps the model with the credential fixed at construction.
///
/// Any model error becomes `GenerationFailed`; nothing is retried here.
pub struct ContentGenerator {
    model: Arc<dyn ContentModel>,
    credential: Credential,
}

impl ContentGenerator {
    pub fn new(model: Arc<dyn ContentModel>, credential: Credential) -> Self {
        Self { model, credential }
    }

    #[instrument(skip(self), fields(language = %language, section = %section))]
    pub fn generate_batch(
        &self,
        language: LanguageKey,
        section: SectionKey,
    ) -> CoreResult<ExerciseBatch> {
        let prompt = prompts::batch_prompt(language, section);
        let text = self.call(GenerationStage::Exercises, &prompt)?;
        info!(bytes = text.len(), "Exercise batch generated");
        Ok(ExerciseBatch::new(text))
    }

    #[instrument(skip(self, exercise_text), fields(language = %language))]
    pub fn generate_solution(
        &self,
        exercise_text: &str,
        language: LanguageKey,
    ) -> CoreResult<Solution> {
        let prompt = prompts::solution_prompt(exercise_text, language);
        let text = self.call(GenerationStage::Solution, &prompt)?;
        info!(bytes = text.len(), "Solution generated");
        Ok(Solution::new(text))
    }

    fn call(&self, stage: GenerationStage, prompt: &str) -> CoreResult<String> {
        debug!(%stage, prompt_len = prompt.len(), "Calling content model");
        self.model
            .generate(&self.credential, prompt)
            .map_err(|e| {
                ApplicationError::GenerationFailed {
                    stage,
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockContentModel;
    use crate::error::CoreError;

    fn credential() -> Credential {
        Credential::new("test-key").unwrap()
    }

    #[test]
    fn batch_prompt_carries_language_and_section() {
        let mut model = MockContentModel::new();
        model
            .expect_generate()
            .withf(|cred: &Credential, prompt: &str| {
                cred.expose() == "test-key"
                    && prompt.contains("for Go focusing on Web Services")
            })
            .times(1)
            .returning(|_, _| Ok("# Exercise 1\nPing\n".into()));

        let generator = ContentGenerator::new(Arc::new(model), credential());
        let batch = generator
            .generate_batch(LanguageKey::Go, SectionKey::WebServices)
            .unwrap();

        assert_eq!(batch.as_str(), "# Exercise 1\nPing\n");
    }

    #[test]
    fn solution_prompt_embeds_exercise() {
        let mut model = MockContentModel::new();
        model
            .expect_generate()
            .withf(|_: &Credential, prompt: &str| {
                prompt.contains("following Python exercise") && prompt.contains("Invert a dict")
            })
            .times(1)
            .returning(|_, _| Ok("## Solution".into()));

        let generator = ContentGenerator::new(Arc::new(model), credential());
        let solution = generator
            .generate_solution("\nInvert a dict.\n", LanguageKey::Python)
            .unwrap();

        assert_eq!(solution.as_str(), "## Solution");
    }

    #[test]
    fn model_error_is_wrapped_once_without_retry() {
        let mut model = MockContentModel::new();
        model.expect_generate().times(1).returning(|_, _| {
            Err(ApplicationError::ModelRequest {
                reason: "503 Service Unavailable".into(),
            }
            .into())
        });

        let generator = ContentGenerator::new(Arc::new(model), credential());
        let err = generator
            .generate_batch(LanguageKey::Rust, SectionKey::Cli)
            .unwrap_err();

        match err {
            CoreError::Application(ApplicationError::GenerationFailed { stage, reason }) => {
                assert_eq!(stage, GenerationStage::Exercises);
                assert!(reason.contains("503"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
