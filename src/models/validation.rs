use super::{Category, ServiceData, ServiceSummary, ValidationError, ValidationResult};

/// Trait for validating catalog models
pub trait Validate {
    fn validate(&self) -> ValidationResult<()>;
}

/// Validation constants
pub const MAX_SLUG_LENGTH: usize = 100;
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
pub const MAX_FEATURES_COUNT: usize = 50;

impl Validate for ServiceSummary {
    fn validate(&self) -> ValidationResult<()> {
        validate_slug("id", &self.id)?;
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        validate_required("price", &self.price)?;
        Ok(())
    }
}

impl Validate for ServiceData {
    fn validate(&self) -> ValidationResult<()> {
        validate_slug("id", &self.id)?;
        validate_title(&self.title)?;
        validate_required("category", &self.category)?;
        validate_required("price", &self.price)?;
        validate_description(&self.description)?;
        if self.features.len() > MAX_FEATURES_COUNT {
            return Err(ValidationError::TooLong {
                field: "features".to_string(),
                max_length: MAX_FEATURES_COUNT,
                actual_length: self.features.len(),
            });
        }
        if self.images.is_empty() {
            return Err(ValidationError::EmptyImages {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

impl Validate for Category {
    fn validate(&self) -> ValidationResult<()> {
        validate_slug("slug", &self.slug)?;
        validate_title(&self.title)?;

        let mut seen = std::collections::HashSet::new();
        for service in &self.services {
            service.validate()?;
            if !seen.insert(service.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: format!("service id in {}", self.slug),
                    value: service.id.clone(),
                });
            }
        }
        Ok(())
    }
}

/// A slug is lowercase ASCII letters and digits in `-`-separated words
pub fn validate_slug(field: &str, value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    if value.len() > MAX_SLUG_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max_length: MAX_SLUG_LENGTH,
            actual_length: value.len(),
        });
    }
    if !is_slug(value) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            value: value.to_string(),
            expected: "lowercase words separated by single hyphens".to_string(),
        });
    }
    Ok(())
}

pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_SLUG_LENGTH
        && value.split('-').all(|word| {
            !word.is_empty()
                && word
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

fn validate_title(title: &str) -> ValidationResult<()> {
    validate_required("title", title)?;
    let length = title.chars().count();
    if length > MAX_TITLE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max_length: MAX_TITLE_LENGTH,
            actual_length: length,
        });
    }
    Ok(())
}

fn validate_description(description: &str) -> ValidationResult<()> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max_length: MAX_DESCRIPTION_LENGTH,
            actual_length: length,
        });
    }
    Ok(())
}

fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }
    Ok(())
}
