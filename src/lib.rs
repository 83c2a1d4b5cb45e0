//! Servicio de pronóstico de mantenimiento de flota
//!
//! El núcleo es el motor de pronóstico (`services`): estima el ritmo diario
//! de kilometraje, predice el próximo mantenimiento y clasifica su urgencia.
//! El resto del crate lo expone por HTTP y lo conecta a PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use routes::create_app;
pub use state::AppState;
