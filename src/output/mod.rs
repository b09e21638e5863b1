// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! This module provides a data-oriented approach to output operations,
//! separating the planning phase (pure functions) from the execution
//! phase (I/O operations).

mod paths;
mod types;
mod writer;

// Re-export the public interface
pub use paths::{final_size_line, ReleaseLayout};
pub use types::{DeliveryTarget, ExecutionStats, OutputPlan, OutputReport};
pub use writer::{deliver, deliver_all};
