pub mod date_span;
pub mod logger;
