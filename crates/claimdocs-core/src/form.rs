use crate::client::{ClientDetails, ClientField};
use crate::error::CoreError;
use crate::validation::{ValidationErrors, validate};

/// Transient form state: the details being edited plus the errors from the
/// last validation pass.
#[derive(Debug, Clone, Default)]
pub struct ClientForm {
    details: ClientDetails,
    errors: ValidationErrors,
}

impl ClientForm {
    pub fn new(details: ClientDetails) -> Self {
        Self {
            details,
            errors: ValidationErrors::default(),
        }
    }

    pub fn details(&self) -> &ClientDetails {
        &self.details
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Update one field. Any error previously reported for that field is
    /// cleared; errors on other fields stay until the next [`Self::validate`].
    pub fn set(&mut self, field: ClientField, value: impl Into<String>) {
        self.details.set(field, value);
        self.errors.clear(field);
    }

    /// Recompute all errors. Returns `true` when the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.details);
        self.errors.is_empty()
    }

    /// Validate and hand out an immutable snapshot for one generation action.
    pub fn submit(&mut self) -> Result<ClientDetails, CoreError> {
        if self.validate() {
            Ok(self.details.clone())
        } else {
            Err(CoreError::Validation(self.errors.clone()))
        }
    }
}
