pub mod api;
pub mod config;
pub mod hooks;
pub mod observability;
pub mod shippers;
pub mod store;
pub mod tracking;
