use crate::domain::{entities::Specification, error::DomainError};

/// Centralized domain validation.
///
/// Generation never starts on a specification that fails here.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_specification(spec: &Specification) -> Result<(), DomainError> {
        spec.validate()
    }
}
