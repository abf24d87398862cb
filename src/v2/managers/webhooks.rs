use crate::core::errors::ApiError;
use crate::core::kernel::{PathSegment, RequestParts, Route, TransportConfig};
use crate::core::types::{Payload, Query};
use crate::v2::conversions::{dump, include};
use crate::v2::models::Webhook;
use serde_json::Value;
use std::sync::Arc;

/// Operations on `/webhooks`.
pub struct WebhooksManager {
    transport: Arc<TransportConfig>,
}

impl WebhooksManager {
    pub const LIST: Route = Route::get("/webhooks");
    pub const CREATE: Route = Route::post("/webhooks");
    pub const RETRIEVE: Route = Route::get("/webhooks/{webhook}");
    pub const UPDATE: Route = Route::put("/webhooks/{webhook}");
    pub const DELETE: Route = Route::delete("/webhooks/{webhook}");

    pub const ROUTES: &'static [Route] = &[
        Self::LIST,
        Self::CREATE,
        Self::RETRIEVE,
        Self::UPDATE,
        Self::DELETE,
    ];

    pub const WRITE_FIELDS: &'static [&'static str] = &["url", "scopes", "enabled", "token"];

    pub(crate) fn new(transport: Arc<TransportConfig>) -> Self {
        Self { transport }
    }

    pub fn list(&self, query: Option<Query>) -> Result<Payload<Vec<Webhook>>, ApiError> {
        Self::LIST.send(&self.transport, &[], RequestParts::new().with_params(query))
    }

    pub fn create(&self, webhook: &Webhook) -> Result<Payload<Webhook>, ApiError> {
        let body = include(dump(webhook)?, Self::WRITE_FIELDS);
        Self::CREATE.send(
            &self.transport,
            &[],
            RequestParts::new().with_json(Value::Object(body)),
        )
    }

    pub fn retrieve(&self, webhook: impl PathSegment) -> Result<Payload<Webhook>, ApiError> {
        Self::RETRIEVE.send(
            &self.transport,
            &[("webhook", &webhook as &dyn PathSegment)],
            RequestParts::new(),
        )
    }

    pub fn update(&self, webhook: &Webhook) -> Result<Payload<Webhook>, ApiError> {
        let body = include(dump(webhook)?, Self::WRITE_FIELDS);
        Self::UPDATE.send(
            &self.transport,
            &[("webhook", webhook as &dyn PathSegment)],
            RequestParts::new().with_json(Value::Object(body)),
        )
    }

    pub fn delete(&self, webhook: impl PathSegment) -> Result<bool, ApiError> {
        Self::DELETE.send_ack(
            &self.transport,
            &[("webhook", &webhook as &dyn PathSegment)],
            RequestParts::new(),
        )
    }
}
