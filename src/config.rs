// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    common::{
        clock::{Clock, SystemClock},
        single_flight::SingleFlight,
    },
    db::{
        ClientRepository, ContactRepository, PgClientRepository, PgContactRepository,
        PgPortfolioRepository, PgSalespersonRepository, PortfolioRepository,
        SalespersonRepository,
    },
    services::{
        auth::{AuthProvider, AuthService},
        cartera_service::CarteraService,
        cliente_service::ClienteService,
        contacto_service::ContactoService,
        gotrue::GoTrueClient,
        vendedor_service::VendedorService,
    },
};

/// Configuración leída del entorno (y de `.env` si existe).
#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub jwt_secret: String,
    pub app_base_url: String,
    pub bind_addr: String,
    pub cookie_secure: bool,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            supabase_url: required("SUPABASE_URL")?,
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            jwt_secret: required("JWT_SECRET")?,
            app_base_url: env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            cookie_secure: env::var("COOKIE_SECURE")
                .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE"))
                .unwrap_or(false),
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("{} debe estar definida", name))
}

/// Repositorios del servicio remoto que usa la aplicación.
#[derive(Clone)]
pub struct Repositories {
    pub vendedores: Arc<dyn SalespersonRepository>,
    pub cartera: Arc<dyn PortfolioRepository>,
    pub clientes: Arc<dyn ClientRepository>,
    pub contactos: Arc<dyn ContactRepository>,
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub auth_service: AuthService,
    pub vendedor_service: VendedorService,
    pub cartera_service: CarteraService,
    pub cliente_service: ClienteService,
    pub contacto_service: ContactoService,
    pub single_flight: SingleFlight,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Conecta con Postgres y con el servicio de auth reales.
    pub async fn new(settings: Settings) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&settings.database_url)
            .await
            .context("No se pudo conectar a la base de datos")?;

        tracing::info!("✅ Conexión con la base de datos establecida");

        let repos = Repositories {
            vendedores: Arc::new(PgSalespersonRepository::new(db_pool.clone())),
            cartera: Arc::new(PgPortfolioRepository::new(db_pool.clone())),
            clientes: Arc::new(PgClientRepository::new(db_pool.clone())),
            contactos: Arc::new(PgContactRepository::new(db_pool)),
        };
        let auth_provider = Arc::new(GoTrueClient::new(
            &settings.supabase_url,
            &settings.supabase_anon_key,
        ));

        Ok(Self::from_parts(settings, repos, auth_provider, Arc::new(SystemClock)))
    }

    // --- Monta el grafo de dependencias ---
    pub fn from_parts(
        settings: Settings,
        repos: Repositories,
        auth_provider: Arc<dyn AuthProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let auth_service = AuthService::new(
            auth_provider,
            settings.jwt_secret.clone(),
            settings.app_base_url.clone(),
        );

        Self {
            auth_service,
            vendedor_service: VendedorService::new(repos.vendedores),
            cartera_service: CarteraService::new(repos.cartera),
            cliente_service: ClienteService::new(repos.clientes),
            contacto_service: ContactoService::new(repos.contactos),
            single_flight: SingleFlight::new(),
            clock,
            settings: Arc::new(settings),
        }
    }
}
