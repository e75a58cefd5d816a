// src/handlers/login.rs

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::{removal_cookie, session_cookie, session_token},
    models::auth::{LoginForm, PasswordResetForm},
    views::login::{LoginView, render},
};

const RESET_SENT: &str = "Te hemos enviado un correo para que puedas crear una nueva contraseña.";

fn login_with_error(status: StatusCode, email: &str, err: &AppError) -> Response {
    let message = err.user_message();
    let view = LoginView {
        email,
        error: Some(&message),
        message: None,
    };
    (status, Html(render(&view))).into_response()
}

// GET /login
pub async fn login_page() -> Html<String> {
    Html(render(&LoginView::default()))
}

// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    match app_state.auth_service.sign_in(&form.email, &form.password).await {
        Ok(signed_in) => {
            tracing::debug!("Sesión válida por {} s", signed_in.expires_in);
            let jar = jar.add(session_cookie(
                signed_in.access_token,
                app_state.settings.cookie_secure,
            ));
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(err) => login_with_error(err.status_code(), &form.email, &err),
    }
}

// POST /login/recuperar
pub async fn request_password_reset(
    State(app_state): State<AppState>,
    Form(form): Form<PasswordResetForm>,
) -> Response {
    if let Err(errors) = form.validate() {
        let err = AppError::ValidationError(errors);
        return login_with_error(StatusCode::BAD_REQUEST, &form.email, &err);
    }

    match app_state.auth_service.request_password_reset(&form.email).await {
        Ok(()) => {
            let view = LoginView {
                email: &form.email,
                error: None,
                message: Some(RESET_SENT),
            };
            Html(render(&view)).into_response()
        }
        Err(err) => {
            tracing::warn!("Falló la recuperación de contraseña de {}: {}", form.email, err);
            login_with_error(err.status_code(), &form.email, &err)
        }
    }
}

// POST /logout
pub async fn logout(State(app_state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(token) = session_token(&jar) {
        if let Err(err) = app_state.auth_service.sign_out(&token).await {
            tracing::warn!("Falló el cierre de sesión remoto: {}", err);
        }
    }

    (jar.remove(removal_cookie()), Redirect::to("/login"))
}
