// src/handlers/tomar_cliente.rs

use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    common::single_flight::PageKind,
    config::AppState,
    middleware::auth::CurrentSalesperson,
    models::cliente::{ClaimForm, SearchQuery},
    views::tomar_cliente::{TomarClienteView, render},
};

// GET /dashboard/tomar-cliente[?q=...]
pub async fn tomar_cliente_page(
    State(app_state): State<AppState>,
    CurrentSalesperson { vendedor, .. }: CurrentSalesperson,
    Query(query): Query<SearchQuery>,
) -> Html<String> {
    let clientes = &app_state.cliente_service;

    let Some(q) = query.q else {
        // Página recién abierta (o "Limpiar"): sin resultados
        clientes.mount(vendedor.id);
        return Html(render(&TomarClienteView {
            query: "",
            results: &[],
            error: None,
            stale: false,
        }));
    };

    // Si la búsqueda falla se mantienen los resultados anteriores con un aviso
    let outcome = clientes.search(vendedor.id, &q).await;

    Html(render(&TomarClienteView {
        query: &q,
        results: &outcome.results,
        error: None,
        stale: outcome.stale,
    }))
}

// POST /dashboard/tomar-cliente
pub async fn claim_client(
    State(app_state): State<AppState>,
    CurrentSalesperson { vendedor, .. }: CurrentSalesperson,
    Form(form): Form<ClaimForm>,
) -> Response {
    let result = match app_state
        .single_flight
        .acquire(vendedor.id, PageKind::TomarCliente)
    {
        Ok(_token) => app_state.cartera_service.claim(vendedor.id, form.id_cliente).await,
        Err(busy) => Err(busy),
    };

    match result {
        Ok(()) => Redirect::to("/dashboard").into_response(),
        Err(err) => {
            let message = err.user_message();
            let results = app_state.cliente_service.current_results(vendedor.id);
            let html = render(&TomarClienteView {
                query: "",
                results: &results,
                error: Some(&message),
                stale: false,
            });
            (err.status_code(), Html(html)).into_response()
        }
    }
}
