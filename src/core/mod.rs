// Core error types shared by every module
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
