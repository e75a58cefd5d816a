// src/services/cliente_service.rs

use std::sync::Arc;

use dashmap::DashMap;

use crate::{common::error::AppError, db::ClientRepository, models::cliente::Client};

/// Máximo de resultados por búsqueda; no hay paginación.
pub const SEARCH_LIMIT: usize = 10;

/// Resultado de una búsqueda tal como lo ve la página "Tomar cliente".
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub results: Vec<Client>,
    /// `false` si la consulta estaba vacía y no se llamó al servidor.
    pub executed: bool,
    /// La consulta remota falló; `results` son los de la búsqueda anterior.
    pub stale: bool,
}

/// `%texto%` para ILIKE, con los comodines del usuario escapados.
pub fn ilike_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[derive(Clone)]
pub struct ClienteService {
    repo: Arc<dyn ClientRepository>,
    // Últimos resultados mostrados en la página, por vendedor
    pages: Arc<DashMap<i64, Vec<Client>>>,
}

impl ClienteService {
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        Self {
            repo,
            pages: Arc::new(DashMap::new()),
        }
    }

    /// La página se abre (o se limpia) sin resultados.
    pub fn mount(&self, id_vendedor: i64) {
        self.pages.insert(id_vendedor, Vec::new());
    }

    pub fn current_results(&self, id_vendedor: i64) -> Vec<Client> {
        self.pages
            .get(&id_vendedor)
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }

    /// Busca por RUC o razón social. Una consulta vacía no llama al servidor y una
    /// falla remota deja los resultados anteriores en pantalla.
    pub async fn search(&self, id_vendedor: i64, query: &str) -> SearchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return SearchOutcome {
                results: self.current_results(id_vendedor),
                executed: false,
                stale: false,
            };
        }

        match self.raw_search(query).await {
            Ok(results) => {
                self.pages.insert(id_vendedor, results.clone());
                SearchOutcome {
                    results,
                    executed: true,
                    stale: false,
                }
            }
            Err(e) => {
                tracing::warn!("Falló la búsqueda de clientes '{}': {}", query, e);
                SearchOutcome {
                    results: self.current_results(id_vendedor),
                    executed: true,
                    stale: true,
                }
            }
        }
    }

    async fn raw_search(&self, query: &str) -> Result<Vec<Client>, AppError> {
        let mut results = self
            .repo
            .search(&ilike_pattern(query), SEARCH_LIMIT as i64)
            .await?;
        results.truncate(SEARCH_LIMIT);
        Ok(results)
    }
}
