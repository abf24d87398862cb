use crate::core::errors::ApiError;
use crate::core::kernel::{PathSegment, RequestParts, Route, TransportConfig};
use crate::core::types::{Payload, Query};
use crate::v2::conversions::{dump, include};
use crate::v2::models::Group;
use serde_json::{json, Value};
use std::sync::Arc;

/// Operations on `/groups`.
pub struct GroupsManager {
    transport: Arc<TransportConfig>,
}

impl GroupsManager {
    pub const LIST: Route = Route::get("/groups");
    pub const CREATE: Route = Route::post("/groups");
    pub const RETRIEVE: Route = Route::get("/groups/{group}");
    pub const UPDATE: Route = Route::put("/groups/{group}");
    pub const DELETE: Route = Route::delete("/groups/{group}");

    pub const ROUTES: &'static [Route] = &[
        Self::LIST,
        Self::CREATE,
        Self::RETRIEVE,
        Self::UPDATE,
        Self::DELETE,
    ];

    pub const WRITE_FIELDS: &'static [&'static str] = &["name", "users"];

    pub(crate) fn new(transport: Arc<TransportConfig>) -> Self {
        Self { transport }
    }

    /// The write shape wants member ids, not embedded user records; users
    /// without an id are skipped.
    fn write_body(group: &Group) -> Result<Value, ApiError> {
        let mut body = include(dump(group)?, Self::WRITE_FIELDS);
        if let Some(Value::Array(users)) = body.remove("users") {
            let ids: Vec<Value> = users
                .into_iter()
                .filter_map(|user| user.get("id").cloned())
                .filter(|id| !id.is_null())
                .collect();
            body.insert("users".to_string(), Value::Array(ids));
        }
        Ok(json!({ "group": body }))
    }

    pub fn list(&self, query: Option<Query>) -> Result<Payload<Vec<Group>>, ApiError> {
        Self::LIST.send(&self.transport, &[], RequestParts::new().with_params(query))
    }

    pub fn create(&self, group: &Group) -> Result<Payload<Group>, ApiError> {
        Self::CREATE.send(
            &self.transport,
            &[],
            RequestParts::new().with_json(Self::write_body(group)?),
        )
    }

    pub fn retrieve(&self, group: impl PathSegment) -> Result<Payload<Group>, ApiError> {
        Self::RETRIEVE.send(
            &self.transport,
            &[("group", &group as &dyn PathSegment)],
            RequestParts::new(),
        )
    }

    pub fn update(&self, group: &Group) -> Result<Payload<Group>, ApiError> {
        Self::UPDATE.send(
            &self.transport,
            &[("group", group as &dyn PathSegment)],
            RequestParts::new().with_json(Self::write_body(group)?),
        )
    }

    pub fn delete(&self, group: impl PathSegment) -> Result<bool, ApiError> {
        Self::DELETE.send_ack(
            &self.transport,
            &[("group", &group as &dyn PathSegment)],
            RequestParts::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::v2::models::User;

    #[test]
    fn test_write_body_flattens_users_to_ids() {
        let group = Group {
            name: Some("Crew".to_string()),
            users: Some(vec![
                User {
                    id: Some("101".to_string()),
                    ..User::default()
                },
                User::default(), // unsaved, skipped
            ]),
            ..Group::default()
        };
        let body = GroupsManager::write_body(&group).unwrap();
        assert_eq!(body, json!({"group": {"name": "Crew", "users": ["101"]}}));
    }

    #[test]
    fn test_write_body_without_users() {
        let group = Group {
            name: Some("Crew".to_string()),
            ..Group::default()
        };
        let body = GroupsManager::write_body(&group).unwrap();
        assert_eq!(body, json!({"group": {"name": "Crew"}}));
    }
}
