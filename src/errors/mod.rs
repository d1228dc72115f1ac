use thiserror::Error;
use validator::ValidationErrors;

/// Errors surfaced by this crate. Validation is all-or-nothing per
/// payload; the wrapped [`ValidationErrors`] lists every failing field
/// together with the constraint it violated.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Validation Error: {0}")]
    Validation(#[from] ValidationErrors),
}

impl SchemaError {
    /// Names of the fields that failed validation, sorted.
    pub fn failed_fields(&self) -> Vec<String> {
        match self {
            SchemaError::Validation(errs) => {
                let mut fields: Vec<String> = errs
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                fields
            }
        }
    }
}
