use validator::ValidationErrors;

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for CoreError {
    /// Collapse field errors into a single message.
    ///
    /// Fields are visited in name order so the message is stable. A field
    /// error without a custom message falls back to `"<field> is invalid"`.
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<_> = field_errors.iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        let mut messages: Vec<String> = Vec::new();
        for (field, errs) in fields {
            for err in errs.iter() {
                let message = match &err.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid"),
                };
                if !messages.contains(&message) {
                    messages.push(message);
                }
            }
        }

        if messages.is_empty() {
            return CoreError::Validation("Request is invalid".to_string());
        }
        CoreError::Validation(messages.join("; "))
    }
}
