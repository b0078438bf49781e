pub mod navigate_request;
pub mod navigate_route;
