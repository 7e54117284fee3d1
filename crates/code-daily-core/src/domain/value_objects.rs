//! Domain value objects: LanguageKey, SectionKey, ExerciseNumber, Credential.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! They hold NO catalog data. Which sections a language offers and which
//! files a section scaffolds lives in `catalog`. This file's only job is to
//! define the types, their string representations, and their parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` / `display_name` arms and the `FromStr` arm here
//! 3. Add a `LanguageProfile` or `SectionTemplate` entry in `catalog`
//! 4. Done

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Number of exercises every generated batch is asked to contain.
pub const EXERCISES_PER_BATCH: u8 = 5;

// ── LanguageKey ──────────────────────────────────────────────────────────────

/// A language the user can practise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LanguageKey {
    JavaScript,
    Python,
    TypeScript,
    Rust,
    Go,
}

impl LanguageKey {
    /// Lowercase identity token, used in workspace folder names.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Python => "python",
            Self::TypeScript => "typescript",
            Self::Rust => "rust",
            Self::Go => "go",
        }
    }

    /// Human-facing name shown in menus and prompts.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::JavaScript => "JavaScript",
            Self::Python => "Python",
            Self::TypeScript => "TypeScript",
            Self::Rust => "Rust",
            Self::Go => "Go",
        }
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "python" | "py" => Ok(Self::Python),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "rust" | "rs" => Ok(Self::Rust),
            "go" | "golang" => Ok(Self::Go),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

// ── SectionKey ───────────────────────────────────────────────────────────────

/// A topic section inside a language's menu.
///
/// Sections are shared across languages (both JavaScript and Go offer
/// `Algorithms`); the catalog decides which language offers which.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    Frontend,
    Backend,
    Fullstack,
    DataStructures,
    Algorithms,
    DataScience,
    MachineLearning,
    WebDevelopment,
    React,
    NodeJs,
    Cli,
    WebServer,
    SystemsProgramming,
    WebServices,
}

impl SectionKey {
    pub const ALL: [SectionKey; 14] = [
        Self::Frontend,
        Self::Backend,
        Self::Fullstack,
        Self::DataStructures,
        Self::Algorithms,
        Self::DataScience,
        Self::MachineLearning,
        Self::WebDevelopment,
        Self::React,
        Self::NodeJs,
        Self::Cli,
        Self::WebServer,
        Self::SystemsProgramming,
        Self::WebServices,
    ];

    /// Menu label.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Fullstack => "Fullstack",
            Self::DataStructures => "Data Structures",
            Self::Algorithms => "Algorithms",
            Self::DataScience => "Data Science",
            Self::MachineLearning => "Machine Learning",
            Self::WebDevelopment => "Web Development",
            Self::React => "React",
            Self::NodeJs => "Node.js",
            Self::Cli => "CLI",
            Self::WebServer => "Web Server",
            Self::SystemsProgramming => "Systems Programming",
            Self::WebServices => "Web Services",
        }
    }

    /// Lowercased menu label, used verbatim in workspace folder names.
    pub fn slug(&self) -> String {
        self.display_name().to_lowercase()
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SectionKey {
    type Err = DomainError;

    /// Accepts the menu label in any case, with spaces, hyphens or
    /// underscores between words (`data structures`, `data-structures`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        Self::ALL
            .into_iter()
            .find(|section| section.slug() == normalized)
            .ok_or_else(|| DomainError::UnknownSection(s.trim().to_string()))
    }
}

// ── ExerciseNumber ───────────────────────────────────────────────────────────

/// 1-based index of an exercise inside a batch.
///
/// Invariant: always within `1..=EXERCISES_PER_BATCH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExerciseNumber(u8);

impl ExerciseNumber {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (1..=EXERCISES_PER_BATCH).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidExerciseNumber {
                input: value.to_string(),
            })
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Every valid number, in order.
    pub fn all() -> impl Iterator<Item = ExerciseNumber> {
        (1..=EXERCISES_PER_BATCH).map(Self)
    }
}

impl fmt::Display for ExerciseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExerciseNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidExerciseNumber {
            input: s.trim().to_string(),
        };
        let value: u8 = s.trim().parse().map_err(|_| invalid())?;
        Self::new(value).map_err(|_| invalid())
    }
}

// ── Credential ───────────────────────────────────────────────────────────────

/// The model API key.
///
/// Created once when the session starts and read-only afterwards. `Debug`
/// never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw key; surrounding whitespace is dropped.
    pub fn new(raw: impl Into<String>) -> Result<Self, DomainError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyCredential);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The raw secret. Only adapters that talk to the model should call this.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `****` followed by the last four characters.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("****{tail}")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}
