// src/db/vendedor_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{SalespersonRepository, remote_message},
    models::vendedor::{KpiSnapshot, Salesperson},
};

#[derive(Clone)]
pub struct PgSalespersonRepository {
    pool: PgPool,
}

impl PgSalespersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalespersonRepository for PgSalespersonRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<Salesperson>, AppError> {
        sqlx::query_as::<_, Salesperson>(
            r#"
            SELECT id::bigint AS id, nombres, apellido_paterno, apellido_materno, dni, email
            FROM vendedores
            WHERE email = $1
            LIMIT 2
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::RemoteQueryFailure(remote_message(&e)))
    }

    async fn kpi(&self, id_vendedor: i64) -> Result<Option<KpiSnapshot>, AppError> {
        sqlx::query_as::<_, KpiSnapshot>(
            r#"
            SELECT
                total_clientes::bigint AS total_clientes,
                prospectos_contactados::bigint AS prospectos_contactados
            FROM kpi_vendedor(p_id_vendedor => $1)
            LIMIT 1
            "#,
        )
        .bind(id_vendedor)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::RemoteQueryFailure(remote_message(&e)))
    }
}
