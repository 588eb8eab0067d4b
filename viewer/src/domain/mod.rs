//! Domain layer
//!
//! Feed entities and the port traits the renderer is written against.

pub mod entities;
pub mod ports;
