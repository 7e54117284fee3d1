use crate::domain::{
    catalog,
    entities::WorkspaceLayout,
    error::DomainError,
    value_objects::{LanguageKey, SectionKey},
};

/// Centralized domain validation.
pub struct DomainValidator;

impl DomainValidator {
    /// A (language, section) pair is only valid when the catalog offers it.
    pub fn validate_choice(language: LanguageKey, section: SectionKey) -> Result<(), DomainError> {
        let offered = catalog::find_language(language).is_some_and(|p| p.offers(section));
        if offered {
            Ok(())
        } else {
            Err(DomainError::SectionNotOffered {
                language: language.display_name().to_string(),
                section: section.display_name().to_string(),
            })
        }
    }

    pub fn validate_layout(layout: &WorkspaceLayout) -> Result<(), DomainError> {
        layout.validate()
    }
}
