// src/models/vendedor.rs

use serde::Serialize;
use sqlx::FromRow;

// Fila del directorio `vendedores`
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Salesperson {
    pub id: i64,
    pub nombres: String,
    pub apellido_paterno: Option<String>,
    pub apellido_materno: Option<String>,
    pub dni: Option<String>,
    pub email: String,
}

impl Salesperson {
    pub fn full_name(&self) -> String {
        [
            Some(self.nombres.as_str()),
            self.apellido_paterno.as_deref(),
            self.apellido_materno.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

// Primera fila de `kpi_vendedor`
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct KpiSnapshot {
    pub total_clientes: i64,
    pub prospectos_contactados: i64,
}
