pub mod research;
pub mod session;
pub mod config;
pub mod error;
pub mod display;


pub use error::{ApiError, TransportError};
pub type Result<T> = std::result::Result<T, ApiError>;
