// server/src/web/handlers/mod.rs

// Declare handler modules
pub mod data_import_handlers;
pub mod report_handlers;
