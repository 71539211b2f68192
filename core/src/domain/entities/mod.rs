//! Domain entities representing core business objects.

pub mod advertisement;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use advertisement::{Advertisement, AdvertisementImage};
pub use token::{Claims, TOKEN_TTL_HOURS};
pub use user::{User, UserRole};
