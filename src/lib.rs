//! Sky Airlens: server-rendered airline site over an external CRUD store.
//!
//! ARCHITECTURE
//! ============
//! `store` is the only I/O seam. `services` hold the flight listing and
//! contact submission logic, `pages` render HTML, and `routes` bind both to
//! an Axum router. `main.rs` only wires config, store, and listener.

pub mod config;
pub mod db;
pub mod format;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
