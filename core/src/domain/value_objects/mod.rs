//! Value objects used by the authorization decision point.

pub mod resource;

pub use resource::{AccessDecision, ResourceType};
