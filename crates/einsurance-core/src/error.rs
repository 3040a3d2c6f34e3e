//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid page size: {0} (expected one of 1, 5, 10, 20)")]
    InvalidPageSize(u32),

    #[error("Invalid policy id: {0}")]
    InvalidPolicyId(String),
}
