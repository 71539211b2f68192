//! Mock implementation of AdvertisementImageRepository for testing

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::advertisement::AdvertisementImage;
use crate::errors::DomainError;

use super::trait_::AdvertisementImageRepository;

/// Mock advertisement image repository for testing
#[derive(Default)]
pub struct MockAdvertisementImageRepository {
    images: RwLock<HashMap<i64, AdvertisementImage>>,
}

impl MockAdvertisementImageRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with an image
    pub fn insert(&self, image: AdvertisementImage) {
        let mut images = self.images.write().unwrap();
        images.insert(image.id, image);
    }
}

#[async_trait]
impl AdvertisementImageRepository for MockAdvertisementImageRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<AdvertisementImage>, DomainError> {
        let images = self.images.read().unwrap();
        Ok(images.get(&id).cloned())
    }
}
