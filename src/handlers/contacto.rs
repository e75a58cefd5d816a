// src/handlers/contacto.rs

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    common::{error::AppError, single_flight::PageKind},
    config::AppState,
    middleware::auth::CurrentSalesperson,
    models::contacto::ContactForm,
    services::contacto_service::RecordOutcome,
    views::contacto::{ContactoView, render},
};

// GET /contacto/{id_vendedor_cliente}
pub async fn contacto_page(
    _current: CurrentSalesperson,
    Path(id_segment): Path<String>,
) -> Html<String> {
    Html(render(&ContactoView {
        id_segment: &id_segment,
        form: &ContactForm::default(),
        error: None,
    }))
}

// POST /contacto/{id_vendedor_cliente}
pub async fn record_contact(
    State(app_state): State<AppState>,
    CurrentSalesperson { vendedor, .. }: CurrentSalesperson,
    Path(id_segment): Path<String>,
    Form(form): Form<ContactForm>,
) -> Response {
    // El segmento es el id numérico de la asignación; si no lo es, no se envía nada
    let id_vendedor_cliente = id_segment.parse::<i64>().ok();

    let result = match id_vendedor_cliente {
        Some(id) => match app_state
            .single_flight
            .acquire(vendedor.id, PageKind::Contacto(id))
        {
            Ok(_token) => {
                app_state
                    .contacto_service
                    .record(Some(id), form.clone())
                    .await
            }
            Err(busy) => Err(busy),
        },
        None => app_state.contacto_service.record(None, form.clone()).await,
    };

    match result {
        Ok(RecordOutcome::Recorded) => Redirect::to("/dashboard").into_response(),
        Ok(RecordOutcome::Skipped) => form_page(StatusCode::OK, &id_segment, &form, None),
        Err(err) => form_page(err.status_code(), &id_segment, &form, Some(&err)),
    }
}

// El formulario vuelve con lo que el usuario escribió
fn form_page(
    status: StatusCode,
    id_segment: &str,
    form: &ContactForm,
    err: Option<&AppError>,
) -> Response {
    let message = err.map(AppError::user_message);
    let html = render(&ContactoView {
        id_segment,
        form,
        error: message.as_deref(),
    });
    (status, Html(html)).into_response()
}
