mod support;

use std::sync::{Arc, atomic::Ordering};

use async_trait::async_trait;
use cartera::{
    common::error::{AppError, CLAIM_CONFLICT_FALLBACK},
    db::PortfolioRepository,
    models::{cartera::AssignmentRow, contacto::ContactForm},
    services::{
        cartera_service::CarteraService, cliente_service::ClienteService,
        contacto_service::{ContactoService, RecordOutcome},
    },
};
use chrono::NaiveDate;
use support::{FakeBackend, at};
use uuid::Uuid;

// --- Cartera ---

#[tokio::test]
async fn empty_portfolio_is_not_an_error() {
    let backend = FakeBackend::new();
    let service = CarteraService::new(backend.clone());

    let cartera = service.active_portfolio(7, at(2025, 1, 8, 10)).await.unwrap();
    assert!(cartera.is_empty());
}

#[tokio::test]
async fn portfolio_lists_only_own_active_assignments_newest_first() {
    let backend = FakeBackend::new();
    backend.add_assignment(1, 7, at(2025, 1, 2, 9), NaiveDate::from_ymd_opt(2025, 1, 10), 0);
    backend.add_assignment(2, 7, at(2025, 1, 6, 9), NaiveDate::from_ymd_opt(2025, 1, 5), 3);
    backend.add_assignment(3, 7, at(2025, 1, 4, 9), None, 1);
    backend.add_assignment(4, 8, at(2025, 1, 7, 9), None, 0);
    backend.add_assignment(5, 7, at(2025, 1, 7, 9), None, 0);
    backend.add_assignment(6, 7, at(2025, 1, 7, 9), None, 0);
    {
        let mut assignments = backend.assignments.lock().unwrap();
        assignments[4].fecha_fin = Some(at(2025, 1, 7, 18));
        assignments[5].bloqueado = true;
    }
    let service = CarteraService::new(backend.clone());

    let cartera = service.active_portfolio(7, at(2025, 1, 8, 10)).await.unwrap();
    let ids: Vec<i64> = cartera.iter().map(|i| i.id_vendedor_cliente).collect();
    assert_eq!(ids, vec![2, 3, 1]);

    // Vencido hace 3 días, sin fecha límite, y 2 días por delante
    assert_eq!(cartera[0].dias_para_contactar, Some(-3));
    assert_eq!(cartera[0].total_contactos, 3);
    assert_eq!(cartera[1].dias_para_contactar, None);
    assert_eq!(cartera[2].dias_para_contactar, Some(2));
}

// --- Toma de clientes ---

#[tokio::test]
async fn concurrent_claims_leave_exactly_one_owner() {
    let backend = FakeBackend::new();
    let id_cliente = backend.add_client("20100047218", "Maderas del Sur S.A.C.");
    let service = CarteraService::new(backend.clone());

    let (ana, beto) = tokio::join!(service.claim(7, id_cliente), service.claim(8, id_cliente));

    assert_eq!([ana.is_ok(), beto.is_ok()].iter().filter(|ok| **ok).count(), 1);
    let loser = if ana.is_err() { ana } else { beto };
    assert!(matches!(loser, Err(AppError::RemoteWriteConflict(_))));
    assert_eq!(backend.owners_of(id_cliente).len(), 1);
}

#[tokio::test]
async fn claim_of_owned_client_keeps_first_assignment() {
    let backend = FakeBackend::new();
    let id_cliente = backend.add_client("20100047218", "Maderas del Sur S.A.C.");
    let service = CarteraService::new(backend.clone());

    service.claim(7, id_cliente).await.unwrap();
    let err = service.claim(8, id_cliente).await.unwrap_err();

    assert_eq!(err.user_message(), "El cliente ya tiene un vendedor asignado");
    assert_eq!(backend.owners_of(id_cliente), vec![7]);
    let ana = service.active_portfolio(7, at(2025, 1, 8, 10)).await.unwrap();
    assert_eq!(ana.len(), 1);
    assert!(service.active_portfolio(8, at(2025, 1, 8, 10)).await.unwrap().is_empty());
}

struct SilentConflict;

#[async_trait]
impl PortfolioRepository for SilentConflict {
    async fn active_assignments(&self, _: i64) -> Result<Vec<AssignmentRow>, AppError> {
        Ok(Vec::new())
    }

    async fn claim_client(&self, _: i64, _: Uuid, _: &str) -> Result<(), AppError> {
        Err(AppError::RemoteWriteConflict(String::new()))
    }
}

#[tokio::test]
async fn conflict_without_remote_message_uses_fallback_text() {
    let service = CarteraService::new(Arc::new(SilentConflict));

    let err = service.claim(7, Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.user_message(), CLAIM_CONFLICT_FALLBACK);
}

// --- Búsqueda ---

fn seed_2020_matches(backend: &FakeBackend, count: usize) {
    for n in 0..count {
        backend.add_client(&format!("2020{n:07}"), &format!("Empresa {n} S.A."));
    }
    backend.add_client("10456789012", "Otra Cosa E.I.R.L.");
}

#[tokio::test]
async fn search_is_capped_at_ten_results() {
    let backend = FakeBackend::new();
    seed_2020_matches(&backend, 50);
    let service = ClienteService::new(backend.clone());

    let outcome = service.search(7, "2020").await;
    assert!(outcome.executed);
    assert!(!outcome.stale);
    assert_eq!(outcome.results.len(), 10);
    assert!(outcome.results.iter().all(|c| c.ruc.contains("2020")));
}

#[tokio::test]
async fn search_matches_name_case_insensitively() {
    let backend = FakeBackend::new();
    backend.add_client("20206018411", "TECSUR S.A.");
    backend.add_client("20100047218", "Maderas del Sur S.A.C.");
    let service = ClienteService::new(backend.clone());

    let outcome = service.search(7, "  tecsur ").await;
    let names: Vec<&str> = outcome.results.iter().map(|c| c.razon_social.as_str()).collect();
    assert_eq!(names, vec!["TECSUR S.A."]);
}

#[tokio::test]
async fn blank_search_skips_remote_and_keeps_results() {
    let backend = FakeBackend::new();
    seed_2020_matches(&backend, 3);
    let service = ClienteService::new(backend.clone());

    let first = service.search(7, "2020").await;
    assert_eq!(first.results.len(), 3);
    assert_eq!(backend.search_calls.load(Ordering::SeqCst), 1);

    for blank in ["", "   ", "\t"] {
        let outcome = service.search(7, blank).await;
        assert!(!outcome.executed);
        assert_eq!(outcome.results, first.results);
    }
    assert_eq!(backend.search_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failed_search_silently_keeps_stale_results() {
    let backend = FakeBackend::new();
    seed_2020_matches(&backend, 3);
    let service = ClienteService::new(backend.clone());

    let first = service.search(7, "2020").await;
    backend.fail_search.store(true, Ordering::SeqCst);

    let outcome = service.search(7, "empresa").await;
    assert!(outcome.executed);
    assert!(outcome.stale);
    assert_eq!(outcome.results, first.results);
    assert_eq!(service.current_results(7), first.results);
}

#[tokio::test]
async fn search_state_is_per_salesperson_and_reset_on_mount() {
    let backend = FakeBackend::new();
    seed_2020_matches(&backend, 2);
    let service = ClienteService::new(backend.clone());

    service.search(7, "2020").await;
    assert_eq!(service.current_results(7).len(), 2);
    assert!(service.current_results(8).is_empty());

    service.mount(7);
    assert!(service.current_results(7).is_empty());
}

// --- Contactos ---

#[tokio::test]
async fn contact_without_assignment_id_is_not_sent() {
    let backend = FakeBackend::new();
    let service = ContactoService::new(backend.clone());

    let outcome = service.record(None, ContactForm::default()).await.unwrap();
    assert_eq!(outcome, RecordOutcome::Skipped);
    assert!(backend.contacts.lock().unwrap().is_empty());

    let outcome = service.record(Some(31), ContactForm::default()).await.unwrap();
    assert_eq!(outcome, RecordOutcome::Recorded);
    assert_eq!(backend.contacts.lock().unwrap()[0].id_vendedor_cliente, 31);
}

#[tokio::test]
async fn remote_contact_rejection_is_returned_verbatim() {
    let backend = FakeBackend::new();
    *backend.contact_error.lock().unwrap() = Some("violates check constraint \"chk_canal\"".into());
    let service = ContactoService::new(backend.clone());

    let err = service.record(Some(31), ContactForm::default()).await.unwrap_err();
    assert_eq!(err.user_message(), "violates check constraint \"chk_canal\"");
    assert!(backend.contacts.lock().unwrap().is_empty());
}
