//! Services module
//!
//! Este módulo contiene la lógica de negocio: el motor de pronóstico de
//! mantenimiento y la clasificación de urgencia.

pub mod mileage_rate;
pub mod forecast_engine;
pub mod urgency;
pub mod maintenance_forecast_service;

pub use maintenance_forecast_service::MaintenanceForecastService;
