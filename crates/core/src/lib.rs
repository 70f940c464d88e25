//! Core data types for the roadwatch alert forwarder.

pub mod alert;
pub mod location;

pub use alert::*;
pub use location::*;
