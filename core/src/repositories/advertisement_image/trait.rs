//! Advertisement image repository trait used by the ownership resolver.

use async_trait::async_trait;

use crate::domain::entities::advertisement::AdvertisementImage;
use crate::errors::DomainError;

/// Repository trait for AdvertisementImage lookup operations
#[async_trait]
pub trait AdvertisementImageRepository: Send + Sync {
    /// Find an advertisement image by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(AdvertisementImage))` - Image found
    /// * `Ok(None)` - No image with the given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: i64) -> Result<Option<AdvertisementImage>, DomainError>;
}
