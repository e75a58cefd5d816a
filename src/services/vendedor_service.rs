// src/services/vendedor_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::SalespersonRepository,
    models::{
        auth::Session,
        vendedor::{KpiSnapshot, Salesperson},
    },
};

#[derive(Clone)]
pub struct VendedorService {
    repo: Arc<dyn SalespersonRepository>,
}

impl VendedorService {
    pub fn new(repo: Arc<dyn SalespersonRepository>) -> Self {
        Self { repo }
    }

    /// Vendedor dueño de la sesión: email obligatorio y exactamente una fila en el directorio.
    pub async fn resolve(&self, session: &Session) -> Result<Salesperson, AppError> {
        let email = session
            .email
            .as_deref()
            .filter(|e| !e.is_empty())
            .ok_or(AppError::NoEmail)?;

        let rows = self.repo.find_by_email(email).await.map_err(|e| {
            tracing::warn!("Falló la búsqueda del vendedor {}: {}", email, e);
            AppError::SalespersonNotFound
        })?;

        match <[Salesperson; 1]>::try_from(rows) {
            Ok([vendedor]) => Ok(vendedor),
            Err(rows) => {
                tracing::debug!("{} filas de vendedor para {}", rows.len(), email);
                Err(AppError::SalespersonNotFound)
            }
        }
    }

    pub async fn kpi(&self, id_vendedor: i64) -> Result<Option<KpiSnapshot>, AppError> {
        self.repo.kpi(id_vendedor).await
    }
}
