//! Typed records for the v2 API resources.
//!
//! Field shapes follow the published OpenAPI components. Remotely-identified
//! resources carry `id: Option<String>`: absent when constructed client-side,
//! populated by the service on response. Enumerated string fields are closed
//! enums, so out-of-set values are rejected at deserialization.

use crate::core::errors::ApiError;
use serde::{Deserialize, Deserializer, Serialize};

macro_rules! impl_path_segment {
    ($($model:ident),+ $(,)?) => {$(
        impl crate::core::kernel::PathSegment for $model {
            fn as_segment(&self) -> Result<&str, ApiError> {
                self.id.as_deref().ok_or_else(|| {
                    ApiError::UrlBind(concat!(
                        "Failed to extract 'id' from ",
                        stringify!($model),
                        ": record has no 'id' value"
                    )
                    .to_string())
                })
            }
        }
    )+};
}

/// Active/deleted lifecycle status shared by users, groups and projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Active,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanyStatus {
    Active,
    Cancelled,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    Processed,
    ProcessingError,
    Duplicate,
}

/// Permissions grantable to project collaborators and invitations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    CanViewContent,
    CanAddContent,
    CanComment,
    CanUseTodos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Accepted,
    Expired,
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street_address_1: Option<String>,
    pub street_address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// One rendition of an uploaded image.
///
/// `uri` is the canonical field; `url` is an assignment alias for it, usable
/// when constructing from a mapping and through the accessor pair below. Only
/// the canonical name ever appears in serialized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUri {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(alias = "url")]
    pub uri: String,
}

impl ImageUri {
    pub fn new(kind: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            uri: uri.into(),
        }
    }

    /// Alias accessor for `uri`.
    pub fn url(&self) -> &str {
        &self.uri
    }

    /// Alias mutator for `uri`.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.uri = url.into();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<String>,
    pub creator_id: Option<String>,
    pub creator_type: Option<String>,
    pub creator_name: Option<String>,
    pub commentable_id: Option<String>,
    pub commentable_type: Option<String>,
    pub status: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Option<String>,
    pub creator_id: Option<String>,
    pub creator_type: Option<String>,
    pub creator_name: Option<String>,
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub content_type: Option<String>,
    pub byte_size: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Error body the service returns alongside 4xx/5xx statuses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectCollaborator {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub project_id: Option<String>,
    pub project_invitation_id: Option<String>,
    pub permissions: Option<Vec<Permission>>,
    pub accepted_at: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectContactRequest {
    pub name: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectContactResponse {
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInvitation {
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub invite_url: Option<String>,
    pub status: Option<InvitationStatus>,
    pub accepted_at: Option<i64>,
    pub accepted_by_id: Option<String>,
    pub expires_at: Option<i64>,
    pub permissions: Option<Vec<Permission>>,
    pub creator_id: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIntegration {
    #[serde(rename = "type")]
    pub kind: String,
    pub relation_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectNotepad {
    pub notepad: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub display_value: Option<String>,
    pub value: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub url: Option<String>,
    pub scopes: Option<Vec<String>>,
    pub token: Option<String>,
    pub enabled: Option<bool>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub email_address: Option<String>,
    pub status: Option<ResourceStatus>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image: Option<Vec<ImageUri>>,
    pub phone_number: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub user_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Option<String>,
    pub name: String,
    pub status: Option<CompanyStatus>,
    pub address: Option<Address>,
    pub logo: Option<Vec<ImageUri>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub name: Option<String>,
    pub users: Option<Vec<User>>,
    pub status: Option<ResourceStatus>,
    pub group_url: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// A captured photo.
///
/// `urls` is the canonical field; `uris` is an assignment alias for it.
/// The service sometimes returns `coordinates` as a bare object instead of a
/// list; deserialization normalizes that to a one-element list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub creator_id: Option<String>,
    pub creator_type: Option<String>,
    pub creator_name: Option<String>,
    pub project_id: Option<String>,
    pub processing_status: Option<ProcessingStatus>,
    #[serde(default, deserialize_with = "coordinate_list")]
    pub coordinates: Option<Vec<Coordinate>>,
    #[serde(alias = "uris")]
    pub urls: Option<Vec<ImageUri>>,
    pub hash: Option<String>,
    pub internal: Option<bool>,
    pub photo_url: Option<String>,
    pub captured_at: Option<i64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Photo {
    /// Alias accessor for `urls`.
    pub fn uris(&self) -> Option<&[ImageUri]> {
        self.urls.as_deref()
    }

    /// Alias mutator for `urls`.
    pub fn set_uris(&mut self, uris: Option<Vec<ImageUri>>) {
        self.urls = uris;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<String>,
    pub company_id: Option<String>,
    pub creator_id: Option<String>,
    pub creator_type: Option<String>,
    pub creator_name: Option<String>,
    pub status: Option<ResourceStatus>,
    pub name: Option<String>,
    pub address: Option<Address>,
    pub coordinates: Option<Coordinate>,
    pub featured_image: Option<Vec<ImageUri>>,
    pub project_url: Option<String>,
    pub embedded_project_url: Option<String>,
    pub integrations: Option<Vec<ProjectIntegration>>,
    pub slug: Option<String>,
    pub public: Option<bool>,
    pub geofence: Option<Vec<Coordinate>>,
    pub primary_contact: Option<ProjectContactResponse>,
    pub notepad: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl_path_segment!(Comment, Document, Tag, Webhook, User, Company, Group, Photo, Project);

/// Accept either a single coordinate object or a list of them, normalizing
/// to a list.
fn coordinate_list<'de, D>(deserializer: D) -> Result<Option<Vec<Coordinate>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Coordinate>),
        One(Coordinate),
    }

    let value = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        OneOrMany::Many(coordinates) => coordinates,
        OneOrMany::One(coordinate) => vec![coordinate],
    }))
}
