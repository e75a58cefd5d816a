// src/services/cartera_service.rs

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    common::error::{AppError, CLAIM_CONFLICT_FALLBACK},
    db::PortfolioRepository,
    models::cartera::{AssignmentRow, PortfolioItem},
};

/// Canal con el que se registran las tomas hechas desde esta aplicación.
pub const CLAIM_ORIGIN: &str = "app";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// `ceil((fecha_limite - ahora) / 1 día)`, con la fecha límite a las 00:00 UTC.
/// Los valores negativos (vencidos) se conservan.
pub fn dias_para_contactar(deadline: Option<NaiveDate>, now: DateTime<Utc>) -> Option<i64> {
    let deadline = deadline?.and_hms_opt(0, 0, 0)?.and_utc();
    let diff_ms = (deadline - now).num_milliseconds();
    // ceil(a / b) para b > 0
    Some(-((-diff_ms).div_euclid(MILLIS_PER_DAY)))
}

#[derive(Clone)]
pub struct CarteraService {
    repo: Arc<dyn PortfolioRepository>,
}

impl CarteraService {
    pub fn new(repo: Arc<dyn PortfolioRepository>) -> Self {
        Self { repo }
    }

    /// Cartera vigente del vendedor, más reciente primero.
    pub async fn active_portfolio(
        &self,
        id_vendedor: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<PortfolioItem>, AppError> {
        let mut rows = self.repo.active_assignments(id_vendedor).await?;
        rows.sort_by(|a, b| b.fecha_estado.cmp(&a.fecha_estado));

        Ok(rows.into_iter().map(|row| enrich(row, now)).collect())
    }

    /// Toma el cliente sin verificar disponibilidad localmente: el procedimiento
    /// remoto es quien decide y responde con conflicto si ya tiene dueño.
    pub async fn claim(&self, id_vendedor: i64, id_cliente: Uuid) -> Result<(), AppError> {
        match self.repo.claim_client(id_vendedor, id_cliente, CLAIM_ORIGIN).await {
            Ok(()) => {
                tracing::info!("Vendedor {} tomó el cliente {}", id_vendedor, id_cliente);
                Ok(())
            }
            Err(AppError::RemoteWriteConflict(msg)) if msg.trim().is_empty() => Err(
                AppError::RemoteWriteConflict(CLAIM_CONFLICT_FALLBACK.to_string()),
            ),
            Err(e) => {
                tracing::warn!("No se pudo tomar el cliente {}: {}", id_cliente, e);
                Err(e)
            }
        }
    }
}

fn enrich(row: AssignmentRow, now: DateTime<Utc>) -> PortfolioItem {
    PortfolioItem {
        dias_para_contactar: dias_para_contactar(row.fecha_max_prospecto, now),
        id_vendedor_cliente: row.id_vendedor_cliente,
        cliente_ruc: row.cliente_ruc,
        cliente_razon_social: row.cliente_razon_social,
        estado: row.estado,
        fecha_estado: row.fecha_estado,
        fecha_max_prospecto: row.fecha_max_prospecto,
        total_contactos: row.total_contactos,
    }
}
