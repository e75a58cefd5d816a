pub mod cartera_repo;
pub use cartera_repo::PgPortfolioRepository;
pub mod cliente_repo;
pub use cliente_repo::PgClientRepository;
pub mod contacto_repo;
pub use contacto_repo::PgContactRepository;
pub mod vendedor_repo;
pub use vendedor_repo::PgSalespersonRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        cartera::AssignmentRow,
        cliente::Client,
        contacto::ContactEvent,
        vendedor::{KpiSnapshot, Salesperson},
    },
};

// Cada trait describe una consulta o procedimiento del servicio remoto.
// Las implementaciones `Pg*` hablan con Postgres; los tests usan fakes en memoria.

#[async_trait]
pub trait SalespersonRepository: Send + Sync {
    /// Filas de `vendedores` con ese email exacto (como mucho dos, para detectar duplicados).
    async fn find_by_email(&self, email: &str) -> Result<Vec<Salesperson>, AppError>;

    /// Primera fila de `kpi_vendedor`, si la hay.
    async fn kpi(&self, id_vendedor: i64) -> Result<Option<KpiSnapshot>, AppError>;
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn active_assignments(&self, id_vendedor: i64) -> Result<Vec<AssignmentRow>, AppError>;

    /// `vc_tomar_prospecto`: el conflicto lo detecta el servidor.
    async fn claim_client(
        &self,
        id_vendedor: i64,
        id_cliente: Uuid,
        origen: &str,
    ) -> Result<(), AppError>;
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// `pattern` ya viene como patrón ILIKE (`%texto%`).
    async fn search(&self, pattern: &str, limit: i64) -> Result<Vec<Client>, AppError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn record(&self, event: &ContactEvent) -> Result<(), AppError>;
}

/// Mensaje del servidor tal cual (sin el prefijo que agrega sqlx).
pub(crate) fn remote_message(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        other => other.to_string(),
    }
}
