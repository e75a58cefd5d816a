// src/models/auth.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Claims del access token emitido por el servicio de autenticación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,           // Id del usuario en el servicio de auth
    pub email: Option<String>,
    pub aud: String,
    pub exp: usize,
    #[serde(default)]
    pub iat: usize,
}

/// Sesión autenticada de la petición en curso.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub access_token: String,
}

// Respuesta de un inicio de sesión correcto
#[derive(Debug, Clone, Deserialize)]
pub struct SignedIn {
    pub access_token: String,
    pub expires_in: i64,
}

// Formulario de acceso. La validación de credenciales es remota.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// Sub-flujo de recuperación de contraseña
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PasswordResetForm {
    #[serde(default)]
    #[validate(length(
        min = 1,
        message = "Ingresa tu correo electrónico para recuperar la contraseña."
    ))]
    pub email: String,
}
