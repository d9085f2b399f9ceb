//! Error taxonomy for form actions and API calls

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Client-side check failed; never reaches the network
    #[error("{0}")]
    Validation(String),

    /// Non-2xx response
    #[error("{message}")]
    Api { status: u16, message: String },

    /// 404 on a guide or supplier lookup
    #[error("{0}")]
    NotFound(String),

    /// Request could not be sent or the body could not be read
    #[error("Falha de comunicação com o servidor: {0}")]
    Network(String),
}

impl FormError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

pub type FormResult<T> = Result<T, FormError>;
