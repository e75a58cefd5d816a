pub mod auth;
pub mod cartera;
pub mod cliente;
pub mod contacto;
pub mod vendedor;
