//! Live traffic alert feed client.
//!
//! Fetches the current alert snapshot for a configured geographic point
//! via the public TGeoRSS endpoint. The `AlertSource` trait is the seam
//! between the HTTP client and the polling pipeline.

pub mod error;
pub mod source;
pub mod waze;

pub use error::*;
pub use source::*;
pub use waze::*;
