use thiserror::Error;

/// Failure reported by the application store when a mutation cannot be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{entity} não encontrado: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Identificador inválido: {0}")]
    InvalidId(String),

    #[error("{0}")]
    Rejected(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
