//! 核心错误处理模块

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::app::product::view;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::Validation(_) => "BAD_REQUEST",
            CoreError::Database(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let user_message = match &self {
            CoreError::Database(e) => {
                error!("Database error: {}", e);
                "Error interno del servidor".to_string()
            }
            CoreError::NotFound(msg) | CoreError::Validation(msg) => msg.clone(),
        };

        let page = view::error_page(
            status,
            self.code(),
            &user_message,
            &chrono::Utc::now().to_rfc3339(),
        );

        (status, Html(page.into_string())).into_response()
    }
}

impl From<FormRejection> for CoreError {
    fn from(rejection: FormRejection) -> Self {
        CoreError::Validation(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Dato no válido".to_string())
                })
            })
            .collect();

        CoreError::Validation(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoreError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CoreError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoreError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_errors_joined() {
        let mut errors = validator::ValidationErrors::new();
        let mut error = validator::ValidationError::new("length");
        error.message = Some("El nombre es obligatorio".into());
        errors.add("name", error);

        match CoreError::from(errors) {
            CoreError::Validation(msg) => assert_eq!(msg, "El nombre es obligatorio"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
