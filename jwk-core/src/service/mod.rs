//! Services orchestrating key generation and output.

pub mod error;
pub mod generation_service;
pub mod output_service;
