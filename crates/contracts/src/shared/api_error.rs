//! Ошибки обращения к REST API

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера
    #[error("Falha de rede: {0}")]
    Network(String),

    /// Токен отсутствует или отклонён (401/403); сервер может объяснить причину
    #[error("Sessão expirada. Faça login novamente.")]
    Unauthorized { message: Option<String> },

    /// Сервер ответил кодом не из диапазона 2xx
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },

    /// Ответ не удалось разобрать
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
}

/// Тело ошибки сервера: бэкенд кладёт текст то в `message`, то в `error`
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Извлекает сообщение сервера из тела ответа
pub fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

impl ApiError {
    /// Классифицирует неуспешный ответ по статусу и телу
    pub fn from_response(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Unauthorized {
                message: server_message(body),
            },
            _ => ApiError::Http {
                status,
                message: server_message(body),
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Текст для пользователя: сообщение сервера, если оно есть, иначе `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http {
                message: Some(m), ..
            }
            | ApiError::Unauthorized { message: Some(m) } => m.clone(),
            ApiError::Unauthorized { message: None } => self.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_prefers_message_then_error() {
        let err = ApiError::from_response(400, r#"{"message":"CPF já cadastrado"}"#);
        assert_eq!(err.user_message("Erro ao salvar"), "CPF já cadastrado");

        let err = ApiError::from_response(422, r#"{"error":"Credenciais inválidas"}"#);
        assert_eq!(err.user_message("Erro"), "Credenciais inválidas");
    }

    #[test]
    fn test_fallback_when_body_has_no_message() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Http {
                status: 500,
                message: None
            }
        );
        assert_eq!(err.user_message("Erro ao gerar parcelamento."), "Erro ao gerar parcelamento.");
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Erro de rede"),
            "Erro de rede"
        );
    }

    #[test]
    fn test_auth_statuses_are_unauthorized() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(ApiError::from_response(403, "{}").is_unauthorized());
        assert!(!ApiError::from_response(404, "{}").is_unauthorized());
    }

    #[test]
    fn test_auth_failure_keeps_server_message() {
        let err = ApiError::from_response(401, r#"{"error":"Credenciais inválidas"}"#);
        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: Some("Credenciais inválidas".into())
            }
        );
        assert_eq!(err.user_message("Erro"), "Credenciais inválidas");

        let err = ApiError::from_response(403, "");
        assert_eq!(err.user_message("Erro"), "Sessão expirada. Faça login novamente.");
    }
}
