//! Advertisement and advertisement image entities.
//!
//! Persistence of these entities lives outside the core; the authorization
//! path only needs enough shape to walk the ownership chain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Advertisement entity owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advertisement {
    /// Unique identifier for the advertisement
    pub id: i64,

    /// Identifier of the owning user
    pub owner_id: i64,

    /// Listing title
    pub title: String,

    /// Timestamp when the advertisement was created
    pub created_at: DateTime<Utc>,
}

impl Advertisement {
    /// Creates a new Advertisement instance
    pub fn new(id: i64, owner_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            owner_id,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

/// Image attached to an advertisement
///
/// Images have no owner of their own; ownership is resolved through the
/// parent advertisement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvertisementImage {
    /// Unique identifier for the image
    pub id: i64,

    /// Identifier of the parent advertisement
    pub advertisement_id: i64,

    /// Storage URL of the image
    pub url: String,
}

impl AdvertisementImage {
    /// Creates a new AdvertisementImage instance
    pub fn new(id: i64, advertisement_id: i64, url: impl Into<String>) -> Self {
        Self {
            id,
            advertisement_id,
            url: url.into(),
        }
    }
}
