//! Workload inventory record definitions.

pub use error::ValidationError;
pub use pod::Pod;

mod error;
mod pod;
