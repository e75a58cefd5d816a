#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use cartera::{
    AppState, Repositories, Settings, build_router,
    common::{clock::Clock, error::AppError},
    db::{ClientRepository, ContactRepository, PortfolioRepository, SalespersonRepository},
    models::{
        auth::{Claims, SignedIn},
        cartera::AssignmentRow,
        cliente::Client,
        contacto::ContactEvent,
        vendedor::{KpiSnapshot, Salesperson},
    },
    services::auth::{AuthProvider, SESSION_AUDIENCE},
};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-jwt-secret-with-enough-length";
pub const GOOD_PASSWORD: &str = "correcta";

// ---------------------------------------------------------------------------
//  Servicio remoto en memoria
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FakeAssignment {
    pub row: AssignmentRow,
    pub id_vendedor: i64,
    pub id_cliente: Option<Uuid>,
    pub bloqueado: bool,
    pub fecha_fin: Option<DateTime<Utc>>,
}

#[derive(Default)]
pub struct FakeBackend {
    pub vendedores: Mutex<Vec<Salesperson>>,
    pub assignments: Mutex<Vec<FakeAssignment>>,
    pub clients: Mutex<Vec<Client>>,
    pub contacts: Mutex<Vec<ContactEvent>>,
    pub kpis: Mutex<HashMap<i64, KpiSnapshot>>,
    pub claim_origins: Mutex<Vec<String>>,

    pub search_calls: AtomicUsize,
    pub claim_calls: AtomicUsize,
    pub kpi_calls: AtomicUsize,
    pub contact_calls: AtomicUsize,

    pub fail_search: AtomicBool,
    pub fail_portfolio: AtomicBool,
    pub fail_kpi: AtomicBool,
    pub contact_error: Mutex<Option<String>>,
    pub claim_delay_ms: AtomicU64,
}

impl FakeBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_salesperson(&self, id: i64, email: &str) {
        self.vendedores.lock().unwrap().push(Salesperson {
            id,
            nombres: "Ana".into(),
            apellido_paterno: Some("Quispe".into()),
            apellido_materno: Some("Rojas".into()),
            dni: Some(format!("4455{id:04}")),
            email: email.into(),
        });
    }

    pub fn add_client(&self, ruc: &str, razon_social: &str) -> Uuid {
        let id = Uuid::new_v4();
        self.clients.lock().unwrap().push(Client {
            id,
            ruc: ruc.into(),
            razon_social: razon_social.into(),
        });
        id
    }

    pub fn add_assignment(
        &self,
        id_vendedor_cliente: i64,
        id_vendedor: i64,
        fecha_estado: DateTime<Utc>,
        fecha_max_prospecto: Option<NaiveDate>,
        total_contactos: i64,
    ) {
        self.assignments.lock().unwrap().push(FakeAssignment {
            row: AssignmentRow {
                id_vendedor_cliente,
                cliente_ruc: format!("20{id_vendedor_cliente:09}"),
                cliente_razon_social: format!("Empresa {id_vendedor_cliente} S.A.C."),
                estado: "PROSPECTO".into(),
                fecha_estado,
                fecha_max_prospecto,
                total_contactos,
            },
            id_vendedor,
            id_cliente: None,
            bloqueado: false,
            fecha_fin: None,
        });
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            vendedores: self.clone(),
            cartera: self.clone(),
            clientes: self.clone(),
            contactos: self.clone(),
        }
    }

    pub fn owners_of(&self, id_cliente: Uuid) -> Vec<i64> {
        self.assignments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.id_cliente == Some(id_cliente) && a.fecha_fin.is_none() && !a.bloqueado)
            .map(|a| a.id_vendedor)
            .collect()
    }
}

// "%texto%" con escapes -> texto literal
fn unpattern(pattern: &str) -> String {
    let inner = pattern
        .strip_prefix('%')
        .and_then(|p| p.strip_suffix('%'))
        .unwrap_or(pattern);
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[async_trait]
impl SalespersonRepository for FakeBackend {
    async fn find_by_email(&self, email: &str) -> Result<Vec<Salesperson>, AppError> {
        Ok(self
            .vendedores
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.email == email)
            .take(2)
            .cloned()
            .collect())
    }

    async fn kpi(&self, id_vendedor: i64) -> Result<Option<KpiSnapshot>, AppError> {
        self.kpi_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_kpi.load(Ordering::SeqCst) {
            return Err(AppError::RemoteQueryFailure(
                "function kpi_vendedor(bigint) does not exist".into(),
            ));
        }
        Ok(self.kpis.lock().unwrap().get(&id_vendedor).cloned())
    }
}

#[async_trait]
impl PortfolioRepository for FakeBackend {
    async fn active_assignments(&self, id_vendedor: i64) -> Result<Vec<AssignmentRow>, AppError> {
        if self.fail_portfolio.load(Ordering::SeqCst) {
            return Err(AppError::RemoteQueryFailure(
                "relation \"vendedor_cliente\" does not exist".into(),
            ));
        }
        // Orden de inserción a propósito: el servicio es quien ordena
        Ok(self
            .assignments
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.id_vendedor == id_vendedor && a.fecha_fin.is_none() && !a.bloqueado)
            .map(|a| a.row.clone())
            .collect())
    }

    async fn claim_client(
        &self,
        id_vendedor: i64,
        id_cliente: Uuid,
        origen: &str,
    ) -> Result<(), AppError> {
        self.claim_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.claim_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let client = self
            .clients
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id_cliente)
            .cloned()
            .ok_or_else(|| AppError::RemoteWriteConflict("Cliente no encontrado".into()))?;

        let mut assignments = self.assignments.lock().unwrap();
        let taken = assignments
            .iter()
            .any(|a| a.id_cliente == Some(id_cliente) && a.fecha_fin.is_none() && !a.bloqueado);
        if taken {
            return Err(AppError::RemoteWriteConflict(
                "El cliente ya tiene un vendedor asignado".into(),
            ));
        }

        let next_id = assignments.len() as i64 + 100;
        assignments.push(FakeAssignment {
            row: AssignmentRow {
                id_vendedor_cliente: next_id,
                cliente_ruc: client.ruc,
                cliente_razon_social: client.razon_social,
                estado: "PROSPECTO".into(),
                fecha_estado: Utc::now(),
                fecha_max_prospecto: None,
                total_contactos: 0,
            },
            id_vendedor,
            id_cliente: Some(id_cliente),
            bloqueado: false,
            fecha_fin: None,
        });
        self.claim_origins.lock().unwrap().push(origen.to_string());
        Ok(())
    }
}

#[async_trait]
impl ClientRepository for FakeBackend {
    // El fake ignora `limit`: el tope lo tiene que garantizar el servicio
    async fn search(&self, pattern: &str, _limit: i64) -> Result<Vec<Client>, AppError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(AppError::RemoteQueryFailure(
                "canceling statement due to statement timeout".into(),
            ));
        }
        let needle = unpattern(pattern).to_lowercase();
        Ok(self
            .clients
            .lock()
            .unwrap()
            .iter()
            .filter(|c| {
                c.ruc.to_lowercase().contains(&needle)
                    || c.razon_social.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ContactRepository for FakeBackend {
    async fn record(&self, event: &ContactEvent) -> Result<(), AppError> {
        self.contact_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = self.contact_error.lock().unwrap().clone() {
            return Err(AppError::RemoteWriteFailure(msg));
        }
        // Mismos casts que hace el servidor con `$8::numeric` y `$14::date`
        if let Some(v) = &event.demanda_estimada {
            if v.trim().parse::<f64>().is_err() {
                return Err(AppError::RemoteWriteFailure(format!(
                    "invalid input syntax for type numeric: \"{v}\""
                )));
            }
        }
        if let Some(v) = &event.fecha_proximo_contacto {
            if NaiveDate::parse_from_str(v, "%Y-%m-%d").is_err() {
                return Err(AppError::RemoteWriteFailure(format!(
                    "invalid input syntax for type date: \"{v}\""
                )));
            }
        }
        self.contacts.lock().unwrap().push(event.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
//  Servicio de auth en memoria
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct FakeAuth {
    pub reset_requests: Mutex<Vec<(String, String)>>,
    pub sign_outs: Mutex<Vec<String>>,
}

impl FakeAuth {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl AuthProvider for FakeAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, AppError> {
        if password != GOOD_PASSWORD {
            return Err(AppError::AuthRejected("Invalid login credentials".into()));
        }
        Ok(SignedIn {
            access_token: issue_token(Some(email)),
            expires_in: 3600,
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AppError> {
        self.sign_outs.lock().unwrap().push(access_token.to_string());
        Ok(())
    }

    async fn request_password_reset(&self, email: &str, redirect_to: &str) -> Result<(), AppError> {
        if email.ends_with("@caido.com") {
            return Err(AppError::RemoteWriteFailure("Email rate limit exceeded".into()));
        }
        self.reset_requests
            .lock()
            .unwrap()
            .push((email.to_string(), redirect_to.to_string()));
        Ok(())
    }
}

pub fn issue_token(email: Option<&str>) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4(),
        email: email.map(str::to_string),
        aud: SESSION_AUDIENCE.to_string(),
        exp: (now + 3600) as usize,
        iat: now as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_ref()),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
//  Armado de la aplicación
// ---------------------------------------------------------------------------

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn settings() -> Settings {
    Settings {
        database_url: "postgres://localhost/unused".into(),
        supabase_url: "http://localhost:54321".into(),
        supabase_anon_key: "anon".into(),
        jwt_secret: JWT_SECRET.into(),
        app_base_url: "http://cartera.test".into(),
        bind_addr: "127.0.0.1:0".into(),
        cookie_secure: false,
    }
}

pub fn app_state(backend: &Arc<FakeBackend>, auth: &Arc<FakeAuth>, now: DateTime<Utc>) -> AppState {
    AppState::from_parts(
        settings(),
        backend.repositories(),
        auth.clone(),
        Arc::new(FixedClock(now)),
    )
}

/// Levanta el servidor en un puerto libre y devuelve la URL base.
pub async fn spawn_app(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

pub fn session_header(token: &str) -> String {
    format!("sb-access-token={}", token)
}

pub fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
