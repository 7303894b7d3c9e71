pub mod json_render;
pub mod json_response;
