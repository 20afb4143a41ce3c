pub(crate) mod export_model;
pub(crate) mod export_service;
pub(crate) mod writers;

pub use export_model::{CategoryTable, ExportFormat, ExportRequest, ExportSummary};
pub use export_service::ExportService;

#[cfg(test)]
mod export_service_tests;
