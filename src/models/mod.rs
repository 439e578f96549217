//! Data transfer objects (DTOs) for API responses.
//!
//! These structs are serialized to JSON for frontend consumption.
//! - `node`: Node tree entries, replace/delete response bodies

pub mod node;

pub use node::*;
