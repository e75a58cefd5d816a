// src/services/auth.rs

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use crate::{
    common::error::AppError,
    models::auth::{Claims, Session, SignedIn},
};

pub const SESSION_AUDIENCE: &str = "authenticated";

/// Operaciones del servicio de autenticación gestionado.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, AppError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError>;

    async fn request_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AppError>;
}

#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
    jwt_secret: String,
    app_base_url: String,
}

impl AuthService {
    pub fn new(provider: Arc<dyn AuthProvider>, jwt_secret: String, app_base_url: String) -> Self {
        Self {
            provider,
            jwt_secret,
            app_base_url,
        }
    }

    /// Sesión actual a partir del access token guardado en la cookie.
    pub fn current_session(&self, access_token: Option<&str>) -> Result<Session, AppError> {
        let token = access_token
            .filter(|t| !t.is_empty())
            .ok_or(AppError::NoSession)?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[SESSION_AUDIENCE]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!("Access token rechazado: {}", e);
            AppError::NoSession
        })?;

        Ok(Session {
            user_id: token_data.claims.sub,
            email: token_data.claims.email,
            access_token: token.to_string(),
        })
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, AppError> {
        let signed_in = self.provider.sign_in(email, password).await?;
        tracing::debug!("Inicio de sesión correcto");
        Ok(signed_in)
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        self.provider.sign_out(access_token).await
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let redirect_to = format!("{}/reset-password", self.app_base_url.trim_end_matches('/'));
        self.provider.request_password_reset(email, &redirect_to).await
    }
}
