// src/services/gotrue.rs

//! Cliente REST del servicio de autenticación (API compatible con GoTrue).
//!
//! Todas las llamadas llevan la cabecera `apikey` con la clave pública del proyecto.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use crate::{
    common::error::AppError,
    models::auth::SignedIn,
    services::auth::AuthProvider,
};

#[derive(Clone)]
pub struct GoTrueClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

// Cuerpo de error: según la versión del servidor el texto viene en un campo u otro
#[derive(Debug, Default, Deserialize)]
struct GoTrueError {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl GoTrueError {
    fn into_message(self) -> Option<String> {
        [self.msg, self.message, self.error_description, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

impl GoTrueClient {
    pub fn new(base_url: &str, anon_key: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.base_url, path)
    }

    /// Convierte una respuesta no exitosa en el mensaje remoto.
    async fn error_message(resp: Response) -> String {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        serde_json::from_str::<GoTrueError>(&body)
            .ok()
            .and_then(GoTrueError::into_message)
            .unwrap_or_else(|| format!("Error del servicio de autenticación ({})", status))
    }
}

#[async_trait]
impl AuthProvider for GoTrueClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, AppError> {
        let resp = self
            .http
            .post(self.url("/token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::AuthRejected(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::AuthRejected(Self::error_message(resp).await));
        }

        resp.json::<SignedIn>()
            .await
            .map_err(|e| AppError::AuthRejected(format!("Respuesta de sesión inválida: {}", e)))
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        let resp = self
            .http
            .post(self.url("/logout"))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::RemoteWriteFailure(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::RemoteWriteFailure(Self::error_message(resp).await));
        }
        Ok(())
    }

    async fn request_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AppError> {
        let resp = self
            .http
            .post(self.url("/recover"))
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| AppError::RemoteWriteFailure(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(AppError::RemoteWriteFailure(Self::error_message(resp).await));
        }
        Ok(())
    }
}
