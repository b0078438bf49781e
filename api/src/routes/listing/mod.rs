pub mod listing_response;
pub mod listing_route;
