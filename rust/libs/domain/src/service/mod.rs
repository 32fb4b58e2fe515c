mod feed_mapper;
mod image_decoder;
mod json_decoder;
mod response_validator;

pub use feed_mapper::*;
pub use image_decoder::*;
pub use json_decoder::*;
pub use response_validator::*;
