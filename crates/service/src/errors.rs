use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// True for failures caused by the request itself rather than the storage layer.
    pub fn is_client_error(&self) -> bool {
        match self {
            ServiceError::Validation(_) | ServiceError::NotFound(_) => true,
            ServiceError::Model(models::errors::ModelError::Validation(_)) => true,
            ServiceError::Db(_) | ServiceError::Model(models::errors::ModelError::Db(_)) => false,
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn not_found_message_names_entity() {
        assert_eq!(ServiceError::not_found("Film").to_string(), "Film not found");
    }

    #[test]
    fn client_errors_are_classified() {
        assert!(ServiceError::Validation("name required".into()).is_client_error());
        assert!(ServiceError::not_found("Actor").is_client_error());
        assert!(ServiceError::from(ModelError::Validation("title required".into())).is_client_error());
        assert!(!ServiceError::Db("disk I/O error".into()).is_client_error());
        assert!(!ServiceError::from(ModelError::Db("locked".into())).is_client_error());
    }
}
