use crate::core::errors::ApiError;
use crate::core::kernel::{PathSegment, RequestParts, Route, TransportConfig};
use crate::core::types::{Payload, Query};
use crate::v2::conversions::{dump, include};
use crate::v2::models::{Comment, Photo, Tag};
use serde_json::json;
use std::sync::Arc;

/// Operations on `/photos` and its sub-resources.
pub struct PhotosManager {
    transport: Arc<TransportConfig>,
}

impl PhotosManager {
    pub const LIST: Route = Route::get("/photos");
    pub const RETRIEVE: Route = Route::get("/photos/{photo}");
    pub const UPDATE: Route = Route::put("/photos/{photo}");
    pub const DELETE: Route = Route::delete("/photos/{photo}");
    pub const LIST_TAGS: Route = Route::get("/photos/{photo}/tags");
    pub const CREATE_TAGS: Route = Route::post("/photos/{photo}/tags");
    pub const LIST_COMMENTS: Route = Route::get("/photos/{photo}/comments");
    pub const CREATE_COMMENT: Route = Route::post("/photos/{photo}/comments");

    pub const ROUTES: &'static [Route] = &[
        Self::LIST,
        Self::RETRIEVE,
        Self::UPDATE,
        Self::DELETE,
        Self::LIST_TAGS,
        Self::CREATE_TAGS,
        Self::LIST_COMMENTS,
        Self::CREATE_COMMENT,
    ];

    pub(crate) fn new(transport: Arc<TransportConfig>) -> Self {
        Self { transport }
    }

    pub fn list(&self, query: Option<Query>) -> Result<Payload<Vec<Photo>>, ApiError> {
        Self::LIST.send(&self.transport, &[], RequestParts::new().with_params(query))
    }

    pub fn retrieve(&self, photo: impl PathSegment) -> Result<Payload<Photo>, ApiError> {
        Self::RETRIEVE.send(
            &self.transport,
            &[("photo", &photo as &dyn PathSegment)],
            RequestParts::new(),
        )
    }

    /// Only the `internal` flag is writable on an existing photo.
    pub fn update(&self, photo: &Photo) -> Result<Payload<Photo>, ApiError> {
        let body = include(dump(photo)?, &["internal"]);
        Self::UPDATE.send(
            &self.transport,
            &[("photo", photo as &dyn PathSegment)],
            RequestParts::new().with_json(json!({ "photo": body })),
        )
    }

    pub fn delete(&self, photo: impl PathSegment) -> Result<bool, ApiError> {
        Self::DELETE.send_ack(
            &self.transport,
            &[("photo", &photo as &dyn PathSegment)],
            RequestParts::new(),
        )
    }

    pub fn list_tags(
        &self,
        photo: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<Tag>>, ApiError> {
        Self::LIST_TAGS.send(
            &self.transport,
            &[("photo", &photo as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    pub fn create_tags(
        &self,
        photo: impl PathSegment,
        tags: &[&str],
    ) -> Result<Payload<Vec<Tag>>, ApiError> {
        Self::CREATE_TAGS.send(
            &self.transport,
            &[("photo", &photo as &dyn PathSegment)],
            RequestParts::new().with_json(json!({ "tags": tags })),
        )
    }

    pub fn list_comments(
        &self,
        photo: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<Comment>>, ApiError> {
        Self::LIST_COMMENTS.send(
            &self.transport,
            &[("photo", &photo as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    pub fn create_comment(
        &self,
        photo: impl PathSegment,
        comment: &Comment,
    ) -> Result<Payload<Comment>, ApiError> {
        let body = include(dump(comment)?, &["content"]);
        Self::CREATE_COMMENT.send(
            &self.transport,
            &[("photo", &photo as &dyn PathSegment)],
            RequestParts::new().with_json(json!({ "comment": body })),
        )
    }
}
