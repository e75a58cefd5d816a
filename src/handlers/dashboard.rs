// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{
    config::AppState,
    middleware::auth::CurrentSalesperson,
    views::dashboard::{DashboardView, render},
};

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub kpi: Option<String>,
}

impl DashboardQuery {
    fn wants_kpi(&self) -> bool {
        matches!(self.kpi.as_deref(), Some(v) if !v.is_empty() && v != "0")
    }
}

// GET /dashboard
pub async fn dashboard(
    State(app_state): State<AppState>,
    CurrentSalesperson { vendedor, .. }: CurrentSalesperson,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let now = app_state.clock.now();

    // Si la consulta falla se muestra la tabla vacía con el error
    let (cartera, error) = match app_state
        .cartera_service
        .active_portfolio(vendedor.id, now)
        .await
    {
        Ok(cartera) => (cartera, None),
        Err(err) => {
            tracing::warn!("Falló la carga de la cartera de {}: {}", vendedor.id, err);
            (Vec::new(), Some(err.user_message()))
        }
    };

    let kpi = if query.wants_kpi() {
        app_state
            .vendedor_service
            .kpi(vendedor.id)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!("Falló la consulta de KPIs de {}: {}", vendedor.id, err);
                None
            })
    } else {
        None
    };

    Html(render(&DashboardView {
        vendedor: &vendedor,
        cartera: &cartera,
        error: error.as_deref(),
        kpi: kpi.as_ref(),
    }))
}
