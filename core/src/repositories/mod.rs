//! Repository interfaces for the entity lookups the core depends on.
//!
//! Concrete implementations live in the infrastructure layer; the core only
//! needs the lookup contracts plus in-memory mocks for its own tests.

pub mod advertisement;
pub mod advertisement_image;
pub mod user;

pub use advertisement::AdvertisementRepository;
pub use advertisement_image::AdvertisementImageRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use advertisement::MockAdvertisementRepository;
#[cfg(test)]
pub use advertisement_image::MockAdvertisementImageRepository;
#[cfg(test)]
pub use user::MockUserRepository;
