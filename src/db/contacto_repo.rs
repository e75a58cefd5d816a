// src/db/contacto_repo.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{ContactRepository, remote_message},
    models::contacto::ContactEvent,
};

#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn record(&self, event: &ContactEvent) -> Result<(), AppError> {
        // Tipos, rangos y vocabularios los valida el procedimiento; aquí solo se castea
        sqlx::query(
            r#"
            SELECT registrar_contacto(
                p_id_vendedor_cliente => $1,
                p_nombre_contacto => $2,
                p_cargo_contacto => $3,
                p_telefono => $4,
                p_email => $5,
                p_canal => $6,
                p_resultado => $7,
                p_demanda_estimada => $8::numeric,
                p_tipo_compra => $9,
                p_tipo_produccion => $10,
                p_tiene_plano => $11,
                p_plano_compartido => $12,
                p_accion_requerida => $13,
                p_fecha_proximo_contacto => $14::date,
                p_nivel_interes => $15,
                p_observaciones => $16
            )
            "#,
        )
        .bind(event.id_vendedor_cliente)
        .bind(event.nombre_contacto.as_deref())
        .bind(event.cargo_contacto.as_deref())
        .bind(event.telefono.as_deref())
        .bind(event.email.as_deref())
        .bind(event.canal.as_str())
        .bind(event.resultado.as_str())
        .bind(event.demanda_estimada.as_deref())
        .bind(event.tipo_compra.as_deref())
        .bind(event.tipo_produccion.as_deref())
        .bind(event.tiene_plano)
        .bind(event.plano_compartido)
        .bind(event.accion_requerida.as_deref())
        .bind(event.fecha_proximo_contacto.as_deref())
        .bind(event.nivel_interes.as_deref())
        .bind(event.observaciones.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::RemoteWriteFailure(remote_message(&e)))?;

        Ok(())
    }
}
