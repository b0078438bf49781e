pub mod categories_route;
pub mod health_route;
pub mod listing;
pub mod navigate;
