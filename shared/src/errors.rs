//! Shared error types for the page insights system

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Unknown strategy: {input}")]
    InvalidStrategy { input: String },
}
