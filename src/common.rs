pub mod clock;
pub mod error;
pub mod form;
pub mod single_flight;
