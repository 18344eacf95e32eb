//! Savings calculator backend.
//!
//! A small axum service that answers one question: how much has to be put
//! aside every month to close the gap between current savings and a goal
//! within a given number of years.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
