mod content_decoder;
mod response_validator;
mod transport;

pub use content_decoder::*;
pub use response_validator::*;
pub use transport::*;
