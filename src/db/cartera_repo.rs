// src/db/cartera_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{PortfolioRepository, remote_message},
    models::cartera::AssignmentRow,
};

#[derive(Clone)]
pub struct PgPortfolioRepository {
    pool: PgPool,
}

impl PgPortfolioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioRepository for PgPortfolioRepository {
    // Asignaciones vigentes (sin fecha_fin, no bloqueadas) con su conteo de contactos
    async fn active_assignments(&self, id_vendedor: i64) -> Result<Vec<AssignmentRow>, AppError> {
        sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT
                vc.id_vendedor_cliente::bigint AS id_vendedor_cliente,
                vc.cliente_ruc,
                vc.cliente_razon_social,
                vc.estado,
                vc.fecha_estado,
                vc.fecha_max_prospecto::date AS fecha_max_prospecto,
                COUNT(cc.id_contacto)::bigint AS total_contactos
            FROM vendedor_cliente vc
            LEFT JOIN contactos_cliente cc
                ON cc.id_vendedor_cliente = vc.id_vendedor_cliente
            WHERE vc.id_vendedor = $1
              AND vc.fecha_fin IS NULL
              AND vc.bloqueado = false
            GROUP BY vc.id_vendedor_cliente
            ORDER BY vc.fecha_estado DESC
            "#,
        )
        .bind(id_vendedor)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::RemoteQueryFailure(remote_message(&e)))
    }

    async fn claim_client(
        &self,
        id_vendedor: i64,
        id_cliente: Uuid,
        origen: &str,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            SELECT vc_tomar_prospecto(
                p_id_vendedor => $1,
                p_id_cliente => $2,
                p_origen => $3
            )
            "#,
        )
        .bind(id_vendedor)
        .bind(id_cliente)
        .bind(origen)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            // El procedimiento lanza una excepción si el cliente ya tiene dueño
            sqlx::Error::Database(_) => AppError::RemoteWriteConflict(remote_message(&e)),
            _ => AppError::RemoteWriteFailure(remote_message(&e)),
        })?;

        Ok(())
    }
}
