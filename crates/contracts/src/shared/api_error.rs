use thiserror::Error;

/// Failure of a single request to the backend.
///
/// Every failure is terminal for its attempt: nothing retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("Не удалось отправить запрос: {0}")]
    Transport(String),

    #[error("{context}: HTTP {status}")]
    Status { status: u16, context: &'static str },

    #[error("Не удалось разобрать ответ: {0}")]
    Decode(String),

    #[error("Не удалось сформировать запрос: {0}")]
    Serialize(String),

    #[error("Запрос отменён")]
    Aborted,
}

impl NetworkError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }
}

impl From<serde_json::Error> for NetworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
