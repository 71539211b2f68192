//! Resource references and access decisions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kinds of ownable resources the authorizer knows about
///
/// New kinds are added by registering an owner lookup with the resolver;
/// nothing here needs to change for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    /// A user account; the resource id is the owner id itself
    User,
    /// An advertisement, owned by the user that created it
    Advertisement,
    /// An advertisement image, owned through its parent advertisement
    AdvertisementImage,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceType::User => "USER",
            ResourceType::Advertisement => "ADVERTISEMENT",
            ResourceType::AdvertisementImage => "ADVERTISEMENT_IMAGE",
        };
        f.write_str(name)
    }
}

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessDecision {
    /// The principal may mutate the resource
    Granted,
    /// The principal is neither the owner nor an administrator
    Denied,
}

impl AccessDecision {
    /// Checks if access was granted
    pub fn is_granted(&self) -> bool {
        matches!(self, AccessDecision::Granted)
    }
}
