// src/models/cartera.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

// Asignación activa tal como la devuelve la consulta de cartera
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct AssignmentRow {
    pub id_vendedor_cliente: i64,
    pub cliente_ruc: String,
    pub cliente_razon_social: String,
    pub estado: String,
    pub fecha_estado: DateTime<Utc>,
    pub fecha_max_prospecto: Option<NaiveDate>,
    pub total_contactos: i64,
}

// Fila de "Mi cartera", con el plazo ya calculado
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioItem {
    pub id_vendedor_cliente: i64,
    pub cliente_ruc: String,
    pub cliente_razon_social: String,
    pub estado: String,
    pub fecha_estado: DateTime<Utc>,
    pub fecha_max_prospecto: Option<NaiveDate>,
    pub total_contactos: i64,
    // Negativo = vencido. `None` si no hay fecha límite.
    pub dias_para_contactar: Option<i64>,
}
