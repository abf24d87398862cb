use crate::core::errors::ApiError;
use crate::core::kernel::{PathSegment, RequestParts, Route, TransportConfig};
use crate::core::types::{Payload, Query};
use crate::v2::conversions::{dump, include};
use crate::v2::models::{
    Comment, Coordinate, Document, Photo, Project, ProjectCollaborator, ProjectInvitation,
    ProjectNotepad, Tag, User,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Operations on `/projects` and its sub-resources.
pub struct ProjectsManager {
    transport: Arc<TransportConfig>,
}

impl ProjectsManager {
    pub const LIST: Route = Route::get("/projects");
    pub const CREATE: Route = Route::post("/projects");
    pub const RETRIEVE: Route = Route::get("/projects/{project}");
    pub const UPDATE: Route = Route::put("/projects/{project}");
    pub const DELETE: Route = Route::delete("/projects/{project}");
    pub const RESTORE: Route = Route::put("/projects/{project}/restore");
    pub const LIST_PHOTOS: Route = Route::get("/projects/{project}/photos");
    pub const CREATE_PHOTO: Route = Route::post("/projects/{project}/photos");
    pub const LIST_ASSIGNED_USERS: Route = Route::get("/projects/{project}/assigned_users");
    pub const ASSIGN_USER: Route = Route::put("/projects/{project}/assigned_users/{user}");
    pub const REMOVE_ASSIGNED_USER: Route =
        Route::delete("/projects/{project}/assigned_users/{user}");
    pub const UPDATE_NOTEPAD: Route = Route::put("/projects/{project}/notepad");
    pub const LIST_COLLABORATORS: Route = Route::get("/projects/{project}/collaborators");
    pub const LIST_INVITATIONS: Route = Route::get("/projects/{project}/invitations");
    pub const CREATE_INVITATION: Route = Route::post("/projects/{project}/invitations");
    pub const LIST_LABELS: Route = Route::get("/projects/{project}/labels");
    pub const CREATE_LABELS: Route = Route::post("/projects/{project}/labels");
    pub const DELETE_LABEL: Route = Route::delete("/projects/{project}/labels/{label}");
    pub const LIST_DOCUMENTS: Route = Route::get("/projects/{project}/documents");
    pub const CREATE_DOCUMENT: Route = Route::post("/projects/{project}/documents");
    pub const LIST_COMMENTS: Route = Route::get("/projects/{project}/comments");
    pub const CREATE_COMMENT: Route = Route::post("/projects/{project}/comments");

    pub const ROUTES: &'static [Route] = &[
        Self::LIST,
        Self::CREATE,
        Self::RETRIEVE,
        Self::UPDATE,
        Self::DELETE,
        Self::RESTORE,
        Self::LIST_PHOTOS,
        Self::CREATE_PHOTO,
        Self::LIST_ASSIGNED_USERS,
        Self::ASSIGN_USER,
        Self::REMOVE_ASSIGNED_USER,
        Self::UPDATE_NOTEPAD,
        Self::LIST_COLLABORATORS,
        Self::LIST_INVITATIONS,
        Self::CREATE_INVITATION,
        Self::LIST_LABELS,
        Self::CREATE_LABELS,
        Self::DELETE_LABEL,
        Self::LIST_DOCUMENTS,
        Self::CREATE_DOCUMENT,
        Self::LIST_COMMENTS,
        Self::CREATE_COMMENT,
    ];

    pub const CREATE_FIELDS: &'static [&'static str] =
        &["name", "address", "coordinates", "geofence", "primary_contact"];

    /// `primary_contact` can only be set at creation time.
    pub const UPDATE_FIELDS: &'static [&'static str] =
        &["name", "address", "coordinates", "geofence"];

    pub(crate) fn new(transport: Arc<TransportConfig>) -> Self {
        Self { transport }
    }

    pub fn list(&self, query: Option<Query>) -> Result<Payload<Vec<Project>>, ApiError> {
        Self::LIST.send(&self.transport, &[], RequestParts::new().with_params(query))
    }

    pub fn create(&self, project: &Project) -> Result<Payload<Project>, ApiError> {
        let body = include(dump(project)?, Self::CREATE_FIELDS);
        Self::CREATE.send(
            &self.transport,
            &[],
            RequestParts::new().with_json(Value::Object(body)),
        )
    }

    pub fn retrieve(&self, project: impl PathSegment) -> Result<Payload<Project>, ApiError> {
        Self::RETRIEVE.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new(),
        )
    }

    pub fn update(&self, project: &Project) -> Result<Payload<Project>, ApiError> {
        let body = include(dump(project)?, Self::UPDATE_FIELDS);
        Self::UPDATE.send(
            &self.transport,
            &[("project", project as &dyn PathSegment)],
            RequestParts::new().with_json(Value::Object(body)),
        )
    }

    pub fn delete(&self, project: impl PathSegment) -> Result<bool, ApiError> {
        Self::DELETE.send_ack(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new(),
        )
    }

    /// Restore a deleted project.
    pub fn restore(&self, project: impl PathSegment) -> Result<Payload<Project>, ApiError> {
        Self::RESTORE.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new(),
        )
    }

    pub fn list_photos(
        &self,
        project: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<Photo>>, ApiError> {
        Self::LIST_PHOTOS.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    /// Add a photo to a project from an already-uploaded image URI.
    pub fn create_photo(
        &self,
        project: impl PathSegment,
        uri: &str,
        captured_at: i64,
        coordinates: Option<Coordinate>,
    ) -> Result<Payload<Photo>, ApiError> {
        let mut photo = Map::new();
        photo.insert("captured_at".to_string(), json!(captured_at));
        photo.insert("uri".to_string(), json!(uri));
        if let Some(coordinates) = coordinates {
            photo.insert(
                "coordinates".to_string(),
                serde_json::to_value(coordinates)
                    .map_err(|e| ApiError::Encode(e.to_string()))?,
            );
        }
        Self::CREATE_PHOTO.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_json(json!({ "photo": photo })),
        )
    }

    pub fn list_assigned_users(
        &self,
        project: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<User>>, ApiError> {
        Self::LIST_ASSIGNED_USERS.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    pub fn assign_user(
        &self,
        project: impl PathSegment,
        user: impl PathSegment,
    ) -> Result<Payload<User>, ApiError> {
        Self::ASSIGN_USER.send(
            &self.transport,
            &[
                ("project", &project as &dyn PathSegment),
                ("user", &user as &dyn PathSegment),
            ],
            RequestParts::new(),
        )
    }

    pub fn remove_assigned_user(
        &self,
        project: impl PathSegment,
        user: impl PathSegment,
    ) -> Result<bool, ApiError> {
        Self::REMOVE_ASSIGNED_USER.send_ack(
            &self.transport,
            &[
                ("project", &project as &dyn PathSegment),
                ("user", &user as &dyn PathSegment),
            ],
            RequestParts::new(),
        )
    }

    pub fn update_notepad(&self, project: &Project) -> Result<Payload<ProjectNotepad>, ApiError> {
        let body = include(dump(project)?, &["notepad"]);
        Self::UPDATE_NOTEPAD.send(
            &self.transport,
            &[("project", project as &dyn PathSegment)],
            RequestParts::new().with_json(Value::Object(body)),
        )
    }

    pub fn list_collaborators(
        &self,
        project: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<ProjectCollaborator>>, ApiError> {
        Self::LIST_COLLABORATORS.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    pub fn list_invitations(
        &self,
        project: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<ProjectInvitation>>, ApiError> {
        Self::LIST_INVITATIONS.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    pub fn create_invitation(
        &self,
        project: impl PathSegment,
        invitation: &ProjectInvitation,
    ) -> Result<Payload<ProjectInvitation>, ApiError> {
        let body = include(dump(invitation)?, &["permissions"]);
        Self::CREATE_INVITATION.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_json(Value::Object(body)),
        )
    }

    pub fn list_labels(
        &self,
        project: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<Tag>>, ApiError> {
        Self::LIST_LABELS.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    pub fn create_labels(
        &self,
        project: impl PathSegment,
        labels: &[&str],
    ) -> Result<Payload<Vec<Tag>>, ApiError> {
        Self::CREATE_LABELS.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_json(json!({ "project": { "labels": labels } })),
        )
    }

    pub fn delete_label(
        &self,
        project: impl PathSegment,
        label: impl PathSegment,
    ) -> Result<bool, ApiError> {
        Self::DELETE_LABEL.send_ack(
            &self.transport,
            &[
                ("project", &project as &dyn PathSegment),
                ("label", &label as &dyn PathSegment),
            ],
            RequestParts::new(),
        )
    }

    pub fn list_documents(
        &self,
        project: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<Document>>, ApiError> {
        Self::LIST_DOCUMENTS.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    /// Upload a document as a base64-embedded attachment.
    pub fn create_document(
        &self,
        project: impl PathSegment,
        name: &str,
        contents: &[u8],
    ) -> Result<Payload<Document>, ApiError> {
        let document = json!({
            "name": name,
            "attachment": BASE64.encode(contents),
        });
        Self::CREATE_DOCUMENT.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_json(json!({ "document": document })),
        )
    }

    pub fn list_comments(
        &self,
        project: impl PathSegment,
        query: Option<Query>,
    ) -> Result<Payload<Vec<Comment>>, ApiError> {
        Self::LIST_COMMENTS.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_params(query),
        )
    }

    pub fn create_comment(
        &self,
        project: impl PathSegment,
        comment: &Comment,
    ) -> Result<Payload<Comment>, ApiError> {
        let body = include(dump(comment)?, &["content"]);
        Self::CREATE_COMMENT.send(
            &self.transport,
            &[("project", &project as &dyn PathSegment)],
            RequestParts::new().with_json(json!({ "comment": body })),
        )
    }
}
