//! Mock implementation of AdvertisementRepository for testing

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::advertisement::Advertisement;
use crate::errors::DomainError;

use super::trait_::AdvertisementRepository;

/// Mock advertisement repository for testing
#[derive(Default)]
pub struct MockAdvertisementRepository {
    advertisements: RwLock<HashMap<i64, Advertisement>>,
}

impl MockAdvertisementRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an advertisement
    pub fn insert(&self, advertisement: Advertisement) {
        let mut ads = self.advertisements.write().unwrap();
        ads.insert(advertisement.id, advertisement);
    }
}

#[async_trait]
impl AdvertisementRepository for MockAdvertisementRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Advertisement>, DomainError> {
        let ads = self.advertisements.read().unwrap();
        Ok(ads.get(&id).cloned())
    }
}
