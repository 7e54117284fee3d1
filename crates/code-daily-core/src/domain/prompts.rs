//! Fixed prompt templates sent to the content model.
//!
//! Prompts are deterministic functions of their inputs. The batch prompt
//! pins the `# Exercise [number]` heading shape that `extractor` depends on.

use crate::domain::value_objects::{EXERCISES_PER_BATCH, LanguageKey, SectionKey};

/// Prompt used to check that a credential works.
pub const PROBE_PROMPT: &str = "test";

/// Ask for a batch of exercises for a language and section.
pub fn batch_prompt(language: LanguageKey, section: SectionKey) -> String {
    format!(
        "Generate {count} coding exercises for {language} focusing on {section}.
Format each exercise in markdown as follows:

# Exercise [number]

## Problem Description
[A clear description of the problem]

## Requirements
- [Requirement 1]
- [Requirement 2]
- [Additional requirements]

## Example
[Input/Output example or usage example]

## Notes
[Any additional notes, hints, or constraints]",
        count = EXERCISES_PER_BATCH,
        language = language.display_name(),
        section = section.display_name(),
    )
}

/// Ask for a worked solution to one extracted exercise.
pub fn solution_prompt(exercise_text: &str, language: LanguageKey) -> String {
    format!(
        "Generate a detailed solution for the following {language} exercise:
{exercise}

Format your response in markdown with:
1. Solution explanation
2. Complete code with comments
3. Example usage or test cases",
        language = language.display_name(),
        exercise = exercise_text.trim().trim_end_matches('#').trim_end(),
    )
}
