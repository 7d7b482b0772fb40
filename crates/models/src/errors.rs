use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        ModelError::Db(e.to_string())
    }
}

/// Column width of `title` and `name`, in characters.
pub const MAX_TEXT_LEN: usize = 200;

/// Reject blank or over-long text fields; returns the trimmed value.
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, ModelError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ModelError::Validation(format!("{field} too long")));
    }
    Ok(trimmed)
}
