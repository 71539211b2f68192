//! Owner resolution for typed resource references.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::value_objects::ResourceType;
use crate::errors::DomainResult;
use crate::repositories::{AdvertisementImageRepository, AdvertisementRepository};

/// Lookup returning the owning principal's id for a resource id
///
/// One implementation per resource type; registering a lookup is all it
/// takes to make a new resource type authorizable.
#[async_trait]
pub trait OwnerLookup: Send + Sync {
    /// Resolve the owner of the resource with the given id
    ///
    /// # Returns
    /// * `Ok(Some(owner_id))` - The resource exists and is owned
    /// * `Ok(None)` - The resource (or its owning chain) does not exist
    /// * `Err(DomainError)` - The underlying lookup failed
    async fn owner_of(&self, resource_id: i64) -> DomainResult<Option<i64>>;
}

/// Identity lookup for user resources: the resource id is the owner id
pub struct UserOwnerLookup;

#[async_trait]
impl OwnerLookup for UserOwnerLookup {
    async fn owner_of(&self, resource_id: i64) -> DomainResult<Option<i64>> {
        Ok(Some(resource_id))
    }
}

/// Resolves an advertisement to the user that created it
pub struct AdvertisementOwnerLookup {
    repository: Arc<dyn AdvertisementRepository>,
}

impl AdvertisementOwnerLookup {
    /// Creates a lookup over the given advertisement repository
    pub fn new(repository: Arc<dyn AdvertisementRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OwnerLookup for AdvertisementOwnerLookup {
    async fn owner_of(&self, resource_id: i64) -> DomainResult<Option<i64>> {
        let advertisement = self.repository.find_by_id(resource_id).await?;
        Ok(advertisement.map(|ad| ad.owner_id))
    }
}

/// Resolves an image through its parent advertisement
///
/// One level of indirection: load the image, then delegate to the
/// advertisement lookup for the parent's owner.
pub struct AdvertisementImageOwnerLookup {
    repository: Arc<dyn AdvertisementImageRepository>,
    advertisement_owner: Arc<AdvertisementOwnerLookup>,
}

impl AdvertisementImageOwnerLookup {
    /// Creates a lookup delegating parent resolution to `advertisement_owner`
    pub fn new(
        repository: Arc<dyn AdvertisementImageRepository>,
        advertisement_owner: Arc<AdvertisementOwnerLookup>,
    ) -> Self {
        Self {
            repository,
            advertisement_owner,
        }
    }
}

#[async_trait]
impl OwnerLookup for AdvertisementImageOwnerLookup {
    async fn owner_of(&self, resource_id: i64) -> DomainResult<Option<i64>> {
        let image = match self.repository.find_by_id(resource_id).await? {
            Some(image) => image,
            None => return Ok(None),
        };

        self.advertisement_owner
            .owner_of(image.advertisement_id)
            .await
    }
}

/// Table of owner lookups keyed by resource type.
///
/// Unregistered resource types resolve to "not found" rather than erroring,
/// so the authorizer fails closed on anything it does not know about.
pub struct ResourceOwnerResolver {
    lookups: HashMap<ResourceType, Arc<dyn OwnerLookup>>,
}

impl ResourceOwnerResolver {
    /// Creates an empty resolver with no registered lookups
    pub fn new() -> Self {
        Self {
            lookups: HashMap::new(),
        }
    }

    /// Creates a resolver with the built-in marketplace lookups registered
    pub fn with_defaults(
        advertisements: Arc<dyn AdvertisementRepository>,
        images: Arc<dyn AdvertisementImageRepository>,
    ) -> Self {
        let advertisement_owner = Arc::new(AdvertisementOwnerLookup::new(advertisements));

        let mut resolver = Self::new();
        resolver.register(ResourceType::User, Arc::new(UserOwnerLookup));
        resolver.register(ResourceType::Advertisement, advertisement_owner.clone());
        resolver.register(
            ResourceType::AdvertisementImage,
            Arc::new(AdvertisementImageOwnerLookup::new(
                images,
                advertisement_owner,
            )),
        );
        resolver
    }

    /// Registers (or replaces) the owner lookup for a resource type
    pub fn register(&mut self, resource: ResourceType, lookup: Arc<dyn OwnerLookup>) {
        self.lookups.insert(resource, lookup);
    }

    /// Resolves the owning principal's id for a resource reference
    pub async fn resolve_owner(
        &self,
        resource: ResourceType,
        resource_id: i64,
    ) -> DomainResult<Option<i64>> {
        match self.lookups.get(&resource) {
            Some(lookup) => lookup.owner_of(resource_id).await,
            None => {
                warn!(%resource, resource_id, "no owner lookup registered for resource type");
                Ok(None)
            }
        }
    }
}

impl Default for ResourceOwnerResolver {
    fn default() -> Self {
        Self::new()
    }
}
