//! Cartera comercial: asignación de prospectos a vendedores y registro de contactos.
//!
//! Las páginas se sirven con axum; los datos y las reglas de negocio viven en
//! el Postgres gestionado (consultas y procedimientos) y en su servicio de auth.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod views;

pub use crate::config::{AppState, Repositories, Settings};

pub fn build_router(app_state: AppState) -> Router {
    // Rutas públicas
    let login_routes = Router::new()
        .route("/login", get(handlers::login::login_page).post(handlers::login::login))
        .route("/login/recuperar", post(handlers::login::request_password_reset))
        .route("/logout", post(handlers::login::logout));

    // Rutas protegidas: el extractor `CurrentSalesperson` redirige a /login
    let page_routes = Router::new()
        .route("/dashboard", get(handlers::dashboard::dashboard))
        .route(
            "/dashboard/tomar-cliente",
            get(handlers::tomar_cliente::tomar_cliente_page)
                .post(handlers::tomar_cliente::claim_client),
        )
        .route(
            "/contacto/{id_vendedor_cliente}",
            get(handlers::contacto::contacto_page).post(handlers::contacto::record_contact),
        );

    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))
        .route("/api/health", get(|| async { "OK" }))
        .merge(login_routes)
        .merge(page_routes)
        .with_state(app_state)
}
