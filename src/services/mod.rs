pub mod api_client;
pub mod browser_service;
pub mod inventory_service;
pub mod location_service;
pub mod pricing_service;
pub mod reservation_service;
