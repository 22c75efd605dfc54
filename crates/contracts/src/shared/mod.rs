pub mod api_error;
pub mod metadata;

pub use api_error::NetworkError;
