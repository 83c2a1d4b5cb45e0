pub mod api_response;
pub mod vehicle_dto;
pub mod forecast_dto;
pub mod mileage_dto;

pub use api_response::ApiResponse;
