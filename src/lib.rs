// src/lib.rs

//! Food-ordering web service: browse a meal catalog, authenticate with
//! email/password credentials, place orders, and review order history.
//!
//! Layout:
//!  - `config`: environment-driven application configuration
//!  - `errors`: the application error taxonomy and its HTTP mapping
//!  - `models`: database entities (`sqlx::FromRow` structs)
//!  - `services`: business logic (catalog, credentials, sessions, orders, seeding)
//!  - `web`: Actix routes, handlers, and the authenticated-user extractor

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
