pub mod error;
pub mod observer;
pub mod traits;

pub use error::{AppError, Result};
