use common::UserId;
use thiserror::Error;

/// Failure while talking to the admin API.
///
/// The `Display` text is meant for logs; use [`ApiError::user_message`] for
/// anything shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("HTTP error: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    InvalidJson(String),
    #[error("Response has no stats section")]
    MissingStats,
}

impl ApiError {
    /// The server refused the admin key (401 or 403).
    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }

    /// Short heading for the failure view.
    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "Нет связи с сервером",
            ApiError::Status { .. } if self.is_auth_rejection() => "Доступ запрещён",
            ApiError::Status { .. } => "Ошибка сервера",
            ApiError::InvalidJson(_) | ApiError::MissingStats => "Некорректный ответ",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Сервер недоступен. Проверьте подключение.".to_string(),
            ApiError::Status {
                status,
                message: Some(message),
            } => format!("Ошибка сервера ({}): {}", status, message),
            ApiError::Status { status, message: None } => format!("Ошибка сервера ({})", status),
            ApiError::InvalidJson(_) | ApiError::MissingStats => {
                "Сервер вернул неполные данные панели.".to_string()
            }
        }
    }
}

/// Rejected balance-edit input, caught before any request is sent.
///
/// The messages are shown to the admin as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceInputError {
    #[error("Пользователь не выбран")]
    NoUserSelected,
    #[error("Пользователь {0} отсутствует в текущих данных")]
    UnknownUser(UserId),
    #[error("Введите сумму")]
    EmptyAmount,
    #[error("Сумма должна быть целым числом: {0}")]
    InvalidAmount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_rejections() {
        let forbidden = ApiError::Status { status: 403, message: None };
        assert!(forbidden.is_auth_rejection());
        assert_eq!(forbidden.title(), "Доступ запрещён");

        let server = ApiError::Status { status: 500, message: Some("boom".to_string()) };
        assert!(!server.is_auth_rejection());
        assert_eq!(server.title(), "Ошибка сервера");
        assert_eq!(server.user_message(), "Ошибка сервера (500): boom");

        assert!(!ApiError::Transport("offline".to_string()).is_auth_rejection());
        assert_eq!(ApiError::MissingStats.title(), "Некорректный ответ");
    }
}
