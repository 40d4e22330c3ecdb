pub mod configuration;
pub mod database;
pub mod domain;
pub mod envelope;
pub mod extract;
pub mod models;
pub mod routes;
pub mod schema;
pub mod startup;
pub mod telemetry;
