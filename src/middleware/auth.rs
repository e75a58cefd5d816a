// src/middleware/auth.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    common::error::AppError,
    config::AppState,
    models::{auth::Session, vendedor::Salesperson},
};

pub const SESSION_COOKIE: &str = "sb-access-token";

/// Access token de la cookie de sesión, si existe.
pub fn session_token(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|c| c.value().to_string())
}

// Cookie de sesión del navegador; la expiración real es la del token
pub fn session_cookie(access_token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, access_token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Extractor de las páginas protegidas: sesión + vendedor resueltos.
/// Si algo falla, el rechazo (`AppError` de identidad) redirige a /login.
#[derive(Debug, Clone)]
pub struct CurrentSalesperson {
    pub session: Session,
    pub vendedor: Salesperson,
}

impl<S> FromRequestParts<S> for CurrentSalesperson
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar);

        let session = app_state.auth_service.current_session(token.as_deref())?;
        let vendedor = app_state.vendedor_service.resolve(&session).await?;
        tracing::debug!("Usuario {} actúa como vendedor {}", session.user_id, vendedor.id);

        Ok(CurrentSalesperson { session, vendedor })
    }
}
