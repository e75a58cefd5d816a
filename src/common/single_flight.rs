// src/common/single_flight.rs

use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};

use crate::common::error::AppError;

/// Página que dispara una escritura remota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    TomarCliente,
    Contacto(i64),
}

/// Registro de escrituras en curso: a lo sumo una por (vendedor, página).
#[derive(Clone, Default)]
pub struct SingleFlight {
    in_flight: Arc<DashMap<(i64, PageKind), ()>>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserva la página; el token la libera al soltarse.
    pub fn acquire(&self, id_vendedor: i64, page: PageKind) -> Result<InFlightToken, AppError> {
        let key = (id_vendedor, page);
        match self.in_flight.entry(key) {
            Entry::Occupied(_) => {
                tracing::warn!("Escritura rechazada, ya hay una en curso: {:?}", key);
                Err(AppError::OperationInProgress)
            }
            Entry::Vacant(slot) => {
                slot.insert(());
                Ok(InFlightToken {
                    in_flight: self.in_flight.clone(),
                    key,
                })
            }
        }
    }
}

#[must_use = "la página queda libre en cuanto se suelta el token"]
pub struct InFlightToken {
    in_flight: Arc<DashMap<(i64, PageKind), ()>>,
    key: (i64, PageKind),
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.in_flight.remove(&self.key);
    }
}
