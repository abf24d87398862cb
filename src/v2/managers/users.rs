use crate::core::errors::ApiError;
use crate::core::kernel::{PathSegment, RequestParts, Route, TransportConfig};
use crate::core::types::{Payload, Query};
use crate::v2::conversions::{dump, include};
use crate::v2::models::User;
use serde_json::Value;
use std::sync::Arc;

/// Operations on `/users`.
pub struct UsersManager {
    transport: Arc<TransportConfig>,
}

impl UsersManager {
    pub const RETRIEVE_CURRENT: Route = Route::get("/users/current");
    pub const LIST: Route = Route::get("/users");
    pub const CREATE: Route = Route::post("/users");
    pub const RETRIEVE: Route = Route::get("/users/{user}");
    pub const UPDATE: Route = Route::put("/users/{user}");
    pub const DELETE: Route = Route::delete("/users/{user}");

    pub const ROUTES: &'static [Route] = &[
        Self::RETRIEVE_CURRENT,
        Self::LIST,
        Self::CREATE,
        Self::RETRIEVE,
        Self::UPDATE,
        Self::DELETE,
    ];

    /// Fields transmitted by create/update; everything else is read-only.
    pub const WRITE_FIELDS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email_address",
        "phone_number",
        "password",
    ];

    pub(crate) fn new(transport: Arc<TransportConfig>) -> Self {
        Self { transport }
    }

    pub fn retrieve_current(&self) -> Result<Payload<User>, ApiError> {
        Self::RETRIEVE_CURRENT.send(&self.transport, &[], RequestParts::new())
    }

    pub fn list(&self, query: Option<Query>) -> Result<Payload<Vec<User>>, ApiError> {
        Self::LIST.send(&self.transport, &[], RequestParts::new().with_params(query))
    }

    pub fn create(&self, user: &User) -> Result<Payload<User>, ApiError> {
        let body = include(dump(user)?, Self::WRITE_FIELDS);
        Self::CREATE.send(
            &self.transport,
            &[],
            RequestParts::new().with_json(Value::Object(body)),
        )
    }

    pub fn retrieve(&self, user: impl PathSegment) -> Result<Payload<User>, ApiError> {
        Self::RETRIEVE.send(&self.transport, &[("user", &user as &dyn PathSegment)], RequestParts::new())
    }

    pub fn update(&self, user: &User) -> Result<Payload<User>, ApiError> {
        let body = include(dump(user)?, Self::WRITE_FIELDS);
        Self::UPDATE.send(
            &self.transport,
            &[("user", user as &dyn PathSegment)],
            RequestParts::new().with_json(Value::Object(body)),
        )
    }

    pub fn delete(&self, user: impl PathSegment) -> Result<bool, ApiError> {
        Self::DELETE.send_ack(&self.transport, &[("user", &user as &dyn PathSegment)], RequestParts::new())
    }
}
