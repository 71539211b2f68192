//! Access-control decision point for mutating operations on owned resources.

use tracing::info;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{AccessDecision, ResourceType};
use crate::errors::{AccessError, DomainResult};

use super::resolver::ResourceOwnerResolver;

/// Decides whether a principal may mutate a resource.
///
/// A pure decision function over current state: owner or administrator gets
/// [`AccessDecision::Granted`], anyone else [`AccessDecision::Denied`].
/// A stale-ownership race between this check and the caller's subsequent
/// write is the persistence layer's concern, not retried here.
pub struct AccessAuthorizer {
    resolver: ResourceOwnerResolver,
}

impl AccessAuthorizer {
    /// Creates an authorizer over the given owner resolver
    pub fn new(resolver: ResourceOwnerResolver) -> Self {
        Self { resolver }
    }

    /// Decides whether `principal` may mutate the referenced resource
    ///
    /// # Errors
    ///
    /// [`AccessError::OwnerNotFound`] when the resource or its owning chain
    /// does not exist. That is a lookup problem, deliberately distinct from
    /// a denial, so the HTTP boundary can answer 404 instead of 403.
    pub async fn authorize(
        &self,
        resource: ResourceType,
        resource_id: i64,
        principal: &User,
    ) -> DomainResult<AccessDecision> {
        let owner_id = self
            .resolver
            .resolve_owner(resource, resource_id)
            .await?
            .ok_or_else(|| {
                info!(%resource, resource_id, "resource owner not found");
                AccessError::OwnerNotFound {
                    resource,
                    resource_id,
                }
            })?;

        if owner_id == principal.id || principal.is_admin() {
            info!(%resource, resource_id, principal_id = principal.id, "access granted");
            return Ok(AccessDecision::Granted);
        }

        info!(%resource, resource_id, principal_id = principal.id, "access denied");
        Ok(AccessDecision::Denied)
    }

    /// Like [`Self::authorize`], but turns a denial into an error
    ///
    /// The convenience form used by mutating request handlers before they
    /// touch the resource.
    pub async fn authorize_or_fail(
        &self,
        resource: ResourceType,
        resource_id: i64,
        principal: &User,
    ) -> DomainResult<()> {
        match self.authorize(resource, resource_id, principal).await? {
            AccessDecision::Granted => Ok(()),
            AccessDecision::Denied => Err(AccessError::AccessDenied {
                resource,
                resource_id,
            }
            .into()),
        }
    }
}
