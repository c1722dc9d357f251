pub mod enrichment;
pub mod models;
pub mod playground;
pub mod store;
