use crate::core::errors::ApiError;
use crate::core::kernel::{PathSegment, RequestParts, Route, TransportConfig};
use crate::core::types::{Payload, Query};
use crate::v2::conversions::{dump, include};
use crate::v2::models::Tag;
use serde_json::json;
use std::sync::Arc;

/// Operations on `/tags`.
pub struct TagsManager {
    transport: Arc<TransportConfig>,
}

impl TagsManager {
    pub const LIST: Route = Route::get("/tags");
    pub const CREATE: Route = Route::post("/tags");
    pub const RETRIEVE: Route = Route::get("/tags/{tag}");
    pub const UPDATE: Route = Route::put("/tags/{tag}");
    pub const DELETE: Route = Route::delete("/tags/{tag}");

    pub const ROUTES: &'static [Route] = &[
        Self::LIST,
        Self::CREATE,
        Self::RETRIEVE,
        Self::UPDATE,
        Self::DELETE,
    ];

    pub(crate) fn new(transport: Arc<TransportConfig>) -> Self {
        Self { transport }
    }

    pub fn list(&self, query: Option<Query>) -> Result<Payload<Vec<Tag>>, ApiError> {
        Self::LIST.send(&self.transport, &[], RequestParts::new().with_params(query))
    }

    /// Only `display_value` is writable; the service derives `value` from it.
    pub fn create(&self, tag: &Tag) -> Result<Payload<Tag>, ApiError> {
        let body = include(dump(tag)?, &["display_value"]);
        Self::CREATE.send(
            &self.transport,
            &[],
            RequestParts::new().with_json(json!({ "tag": body })),
        )
    }

    pub fn retrieve(&self, tag: impl PathSegment) -> Result<Payload<Tag>, ApiError> {
        Self::RETRIEVE.send(
            &self.transport,
            &[("tag", &tag as &dyn PathSegment)],
            RequestParts::new(),
        )
    }

    pub fn update(&self, tag: &Tag) -> Result<Payload<Tag>, ApiError> {
        let body = include(dump(tag)?, &["display_value"]);
        Self::UPDATE.send(
            &self.transport,
            &[("tag", tag as &dyn PathSegment)],
            RequestParts::new().with_json(json!({ "tag": body })),
        )
    }

    pub fn delete(&self, tag: impl PathSegment) -> Result<bool, ApiError> {
        Self::DELETE.send_ack(
            &self.transport,
            &[("tag", &tag as &dyn PathSegment)],
            RequestParts::new(),
        )
    }
}
