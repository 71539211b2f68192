//! Advertisement repository trait used by the ownership resolver.

use async_trait::async_trait;

use crate::domain::entities::advertisement::Advertisement;
use crate::errors::DomainError;

/// Repository trait for Advertisement lookup operations
#[async_trait]
pub trait AdvertisementRepository: Send + Sync {
    /// Find an advertisement by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Advertisement))` - Advertisement found
    /// * `Ok(None)` - No advertisement with the given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<Advertisement>, DomainError>;
}
