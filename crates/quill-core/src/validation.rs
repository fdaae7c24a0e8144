//! Field-level input validation.
//!
//! Violations surface as `DomainError::Validation` before anything reaches
//! the store.

use crate::error::DomainError;

pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_SLUG_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 500;

pub fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("Title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::Validation(format!(
            "Title must not be longer than {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Slugs are lowercase kebab: ASCII lowercase letters, digits and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if slug.is_empty() {
        return Err(DomainError::Validation("Slug is required".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(DomainError::Validation(format!(
            "Slug must not be longer than {MAX_SLUG_LEN} characters"
        )));
    }
    let valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(DomainError::Validation(
            "Slug must be lowercase letters, numbers, and hyphens".into(),
        ));
    }
    Ok(())
}

pub fn validate_description(description: Option<&str>) -> Result<(), DomainError> {
    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(DomainError::Validation(format!(
                "Description must not be longer than {MAX_DESCRIPTION_LEN} characters"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("Hello").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(101)).is_err());
    }

    #[test]
    fn slug_must_be_lowercase_kebab() {
        assert!(validate_slug("my-first-post").is_ok());
        assert!(validate_slug("post-2024").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has-Caps").is_err());
        assert!(validate_slug("with space").is_err());
        assert!(validate_slug("unicode-é").is_err());
    }

    #[test]
    fn description_is_optional_but_bounded() {
        assert!(validate_description(None).is_ok());
        assert!(validate_description(Some("short")).is_ok());
        assert!(validate_description(Some(&"x".repeat(501))).is_err());
    }
}
