// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::views;

pub const CLAIM_CONFLICT_FALLBACK: &str = "Este cliente ya se encuentra asignado a otro vendedor.";

#[derive(Debug, Error)]
pub enum AppError {
    // --- Resolución de identidad: nunca se muestran, redirigen a /login ---
    #[error("No hay sesión activa")]
    NoSession,

    #[error("La sesión no tiene correo electrónico")]
    NoEmail,

    #[error("No existe un vendedor para el correo de la sesión")]
    SalespersonNotFound,

    // --- Fallas remotas: el mensaje remoto se muestra tal cual ---
    #[error("{0}")]
    RemoteQueryFailure(String),

    #[error("{0}")]
    RemoteWriteConflict(String),

    #[error("{0}")]
    RemoteWriteFailure(String),

    #[error("{0}")]
    AuthRejected(String),

    #[error("Ya hay una operación en curso en esta página.")]
    OperationInProgress,

    #[error("Error de validación")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Error interno del servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl AppError {
    /// Fallas que, al entrar a una página protegida, mandan al login sin mensaje.
    pub fn is_identity_failure(&self) -> bool {
        matches!(
            self,
            AppError::NoSession | AppError::NoEmail | AppError::SalespersonNotFound
        )
    }

    /// Texto que se muestra en línea en el formulario.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(errors) => errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter())
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "Uno o más campos son inválidos.".to_string()),
            AppError::InternalServerError(_) => "Ocurrió un error inesperado.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoSession | AppError::NoEmail | AppError::SalespersonNotFound => {
                StatusCode::SEE_OTHER
            }
            AppError::RemoteWriteConflict(_) | AppError::OperationInProgress => {
                StatusCode::CONFLICT
            }
            AppError::AuthRejected(_) => StatusCode::UNAUTHORIZED,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::RemoteQueryFailure(_) | AppError::RemoteWriteFailure(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_identity_failure() {
            tracing::debug!("Redirigiendo a /login: {}", self);
            return Redirect::to("/login").into_response();
        }

        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Error interno del servidor: {:?}", self);
        }

        (status, Html(views::error_page(&self.user_message()))).into_response()
    }
}
