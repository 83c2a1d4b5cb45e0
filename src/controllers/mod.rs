pub mod forecast_controller;
pub mod mileage_controller;
