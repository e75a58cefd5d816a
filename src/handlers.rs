pub mod contacto;
pub mod dashboard;
pub mod login;
pub mod tomar_cliente;
