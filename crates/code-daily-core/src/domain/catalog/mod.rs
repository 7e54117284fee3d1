//! Language and scaffold catalog.
//!
//! Two static registries make up the whole catalog:
//!
//! - [`LANGUAGE_REGISTRY`]: one [`LanguageProfile`] per [`LanguageKey`], with
//!   the ordered section menu offered to the user.
//! - `builtin::SECTION_TEMPLATES`: the scaffold files copied into every
//!   `exercise-{n}` folder for a (language, section) pair.
//!
//! # Adding a New Section Template
//!
//! 1. Add one [`SectionTemplate`] entry to `builtin.rs`
//! 2. That's it. The `registry_integrity` tests reject entries for sections
//!    the language does not offer, duplicate pairs, and unsafe paths.
//!
//! A section with no template entry is legal: its workspace gets
//! `exercises.md` and five empty exercise folders.

mod builtin;

use crate::domain::{
    error::DomainError,
    value_objects::{LanguageKey, SectionKey},
};

// ── Types ────────────────────────────────────────────────────────────────────

/// A language and the sections offered for it, in menu order.
#[derive(Debug, Clone, Copy)]
pub struct LanguageProfile {
    pub key: LanguageKey,
    pub sections: &'static [SectionKey],
}

impl LanguageProfile {
    pub const fn display_name(&self) -> &'static str {
        self.key.display_name()
    }

    pub fn offers(&self, section: SectionKey) -> bool {
        self.sections.contains(&section)
    }
}

/// The scaffold files for one (language, section) pair.
#[derive(Debug, Clone, Copy)]
pub struct SectionTemplate {
    pub language: LanguageKey,
    pub section: SectionKey,
    pub files: &'static [FileTemplate],
}

/// One literal file, placed at `path` relative to an exercise folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTemplate {
    pub path: &'static str,
    pub content: &'static str,
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Single source of truth for which languages exist and what they offer.
pub static LANGUAGE_REGISTRY: &[LanguageProfile] = &[
    LanguageProfile {
        key: LanguageKey::JavaScript,
        sections: &[
            SectionKey::Frontend,
            SectionKey::Backend,
            SectionKey::Fullstack,
            SectionKey::DataStructures,
            SectionKey::Algorithms,
        ],
    },
    LanguageProfile {
        key: LanguageKey::Python,
        sections: &[
            SectionKey::Backend,
            SectionKey::DataScience,
            SectionKey::Algorithms,
            SectionKey::MachineLearning,
            SectionKey::WebDevelopment,
        ],
    },
    LanguageProfile {
        key: LanguageKey::TypeScript,
        sections: &[
            SectionKey::Frontend,
            SectionKey::Backend,
            SectionKey::Fullstack,
            SectionKey::React,
            SectionKey::NodeJs,
        ],
    },
    LanguageProfile {
        key: LanguageKey::Rust,
        sections: &[
            SectionKey::Cli,
            SectionKey::WebServer,
            SectionKey::SystemsProgramming,
            SectionKey::DataStructures,
            SectionKey::Algorithms,
        ],
    },
    LanguageProfile {
        key: LanguageKey::Go,
        sections: &[
            SectionKey::Backend,
            SectionKey::Cli,
            SectionKey::WebServices,
            SectionKey::DataStructures,
            SectionKey::Algorithms,
        ],
    },
];

// ── Lookups ──────────────────────────────────────────────────────────────────

/// All languages, in menu order.
pub fn languages() -> &'static [LanguageProfile] {
    LANGUAGE_REGISTRY
}

/// Profile for a language key.
pub fn find_language(key: LanguageKey) -> Option<&'static LanguageProfile> {
    LANGUAGE_REGISTRY.iter().find(|profile| profile.key == key)
}

/// Sections offered for a language, in menu order. Empty if unknown.
pub fn sections_for(key: LanguageKey) -> &'static [SectionKey] {
    find_language(key).map_or(&[], |profile| profile.sections)
}

/// Parse a user-supplied section name and check the language offers it.
pub fn resolve_section(language: LanguageKey, raw: &str) -> Result<SectionKey, DomainError> {
    let section: SectionKey = raw.parse()?;
    if sections_for(language).contains(&section) {
        Ok(section)
    } else {
        Err(DomainError::SectionNotOffered {
            language: language.display_name().to_string(),
            section: section.display_name().to_string(),
        })
    }
}

/// The template entry for a pair, if one is registered.
pub fn section_template(
    language: LanguageKey,
    section: SectionKey,
) -> Option<&'static SectionTemplate> {
    builtin::SECTION_TEMPLATES
        .iter()
        .find(|template| template.language == language && template.section == section)
}

/// Scaffold files for a pair, in declaration order.
///
/// Never fails: a pair without a template (or one the language does not
/// offer) yields an empty slice.
pub fn templates_for(language: LanguageKey, section: SectionKey) -> &'static [FileTemplate] {
    section_template(language, section).map_or(&[], |template| template.files)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
