//! Resource-ownership authorization module
//!
//! The single decision point consulted by every mutating request handler
//! before it touches an owned resource:
//! - Owner resolution per resource type through a registered-handler table
//! - Grant/deny decisions with the administrator override

mod resolver;
mod service;

#[cfg(test)]
mod tests;

pub use resolver::{
    AdvertisementImageOwnerLookup, AdvertisementOwnerLookup, OwnerLookup, ResourceOwnerResolver,
    UserOwnerLookup,
};
pub use service::AccessAuthorizer;
