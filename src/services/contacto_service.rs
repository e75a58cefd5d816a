// src/services/contacto_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::ContactRepository,
    models::contacto::ContactForm,
};

/// Qué pasó con un envío del formulario de contacto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    Recorded,
    /// Sin id de asignación no se envía nada.
    Skipped,
}

#[derive(Clone)]
pub struct ContactoService {
    repo: Arc<dyn ContactRepository>,
}

impl ContactoService {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Agrega un contacto al historial de la asignación. Los opcionales ya llegan
    /// normalizados (vacío = `None`); cualquier otra validación es remota.
    pub async fn record(
        &self,
        id_vendedor_cliente: Option<i64>,
        form: ContactForm,
    ) -> Result<RecordOutcome, AppError> {
        let Some(id) = id_vendedor_cliente else {
            return Ok(RecordOutcome::Skipped);
        };

        let event = form.into_event(id);
        self.repo.record(&event).await.inspect_err(|e| {
            tracing::warn!("No se pudo registrar el contacto de {}: {}", id, e);
        })?;

        tracing::info!(
            "Contacto registrado para {} ({} / {})",
            id,
            event.canal,
            event.resultado
        );
        Ok(RecordOutcome::Recorded)
    }
}
