// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// URL-safe identifier derived from a display name. Matches
/// `^[a-z0-9]+(-[a-z0-9]+)*$` whenever produced by [`Slug::derive`], which is
/// the only constructor new slugs go through before they reach storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a display name: transliterate, lowercase, collapse
    /// separators into single hyphens, trim boundary hyphens.
    ///
    /// Names that normalize to nothing (all punctuation, all symbols) are
    /// rejected; an empty slug must never be written.
    pub fn derive(name: &str) -> DomainResult<Self> {
        let normalized = slug::slugify(name);
        if normalized.is_empty() {
            return Err(DomainError::InvalidName(
                "name does not contain any sluggable characters".into(),
            ));
        }
        Ok(Self(normalized))
    }

    /// Accept an existing slug value coming back from storage or a route
    /// parameter. Lookups with a value no derivation can produce simply miss.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_lowercases_and_hyphenates() {
        let slug = Slug::derive("Oral Surgery").unwrap();
        assert_eq!(slug.as_str(), "oral-surgery");
    }

    #[test]
    fn derive_is_deterministic() {
        let name = "Oral & Maxillofacial Surgery";
        assert_eq!(Slug::derive(name).unwrap(), Slug::derive(name).unwrap());
    }

    #[test]
    fn derive_drops_punctuation_and_collapses_runs() {
        let slug = Slug::derive("Oral & Maxillofacial   Surgery").unwrap();
        assert_eq!(slug.as_str(), "oral-maxillofacial-surgery");
    }

    #[test]
    fn derive_transliterates_diacritics() {
        let slug = Slug::derive("Pédiatrie Dentaire").unwrap();
        assert_eq!(slug.as_str(), "pediatrie-dentaire");
    }

    #[test]
    fn derive_trims_boundary_separators() {
        let slug = Slug::derive("  Implants!  ").unwrap();
        assert_eq!(slug.as_str(), "implants");
    }

    #[test]
    fn derive_keeps_numeric_names() {
        let slug = Slug::derive("24x7 Emergency").unwrap();
        assert_eq!(slug.as_str(), "24x7-emergency");
    }

    #[test]
    fn derive_rejects_symbol_only_names() {
        let err = Slug::derive("!!!").unwrap_err();
        assert!(matches!(err, DomainError::InvalidName(_)));
    }

    #[test]
    fn derive_output_shape_is_kebab_case() {
        let slug = Slug::derive("Crowns, Bridges & Veneers (2024)").unwrap();
        assert!(
            slug.as_str()
                .split('-')
                .all(|seg| !seg.is_empty()
                    && seg.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()))
        );
    }

    #[test]
    fn new_rejects_empty_values() {
        assert!(Slug::new("").is_err());
        assert!(Slug::new("   ").is_err());
    }
}
