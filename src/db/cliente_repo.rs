// src/db/cliente_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{ClientRepository, remote_message},
    models::cliente::Client,
};

#[derive(Clone)]
pub struct PgClientRepository {
    pool: PgPool,
}

impl PgClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientRepository for PgClientRepository {
    async fn search(&self, pattern: &str, limit: i64) -> Result<Vec<Client>, AppError> {
        sqlx::query_as::<_, Client>(
            r#"
            SELECT id, ruc, razon_social
            FROM clientes
            WHERE ruc ILIKE $1 ESCAPE '\'
               OR razon_social ILIKE $1 ESCAPE '\'
            LIMIT $2
            "#,
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::RemoteQueryFailure(remote_message(&e)))
    }
}
