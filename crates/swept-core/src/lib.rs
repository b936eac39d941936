pub mod error;
pub mod tolerance;

pub use error::{Result, SweptError};
pub use tolerance::Tolerance;
