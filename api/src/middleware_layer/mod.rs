pub mod json_extractor;
pub mod request_id;
