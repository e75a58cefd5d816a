pub mod auth;
pub mod cartera_service;
pub mod cliente_service;
pub mod contacto_service;
pub mod gotrue;
pub mod vendedor_service;
