//! CLI library components for the Hevy workout importer.

pub mod logging;
pub mod pipeline;
pub mod summary;
