use crate::domain::{entities::FeatureName, error::DomainError};

/// Entry points services use to check raw input before planning.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(name: &str) -> Result<FeatureName, DomainError> {
        FeatureName::parse(name)
    }
}
