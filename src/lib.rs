//! Employee directory page: one read query against a hosted Postgres
//! store, rendered as an HTML table with loading, error, and empty states.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
pub mod view;
