use crate::core::config::ApiConfig;
use crate::core::kernel::TransportConfig;
use crate::v2::managers::{
    CompanyManager, GroupsManager, PhotosManager, ProjectsManager, TagsManager, UsersManager,
    WebhooksManager,
};
use std::sync::Arc;

/// Top-level API client.
///
/// ```rust,no_run
/// use companycam::Api;
///
/// # fn example() -> Result<(), companycam::ApiError> {
/// let api = Api::new("YOUR_ACCESS_TOKEN");
/// let company = api.company.retrieve()?;
/// # Ok(())
/// # }
/// ```
///
/// All managers share one immutable [`TransportConfig`]; every call spawns
/// its own single-use transport, so an `Api` can be shared across threads.
pub struct Api {
    pub company: CompanyManager,
    pub users: UsersManager,
    pub projects: ProjectsManager,
    pub photos: PhotosManager,
    pub tags: TagsManager,
    pub groups: GroupsManager,
    pub webhooks: WebhooksManager,
}

impl Api {
    /// Create a client with the default API version and server URL.
    pub fn new(token: impl Into<String>) -> Self {
        Self::from_config(&ApiConfig::new(token))
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        let transport = Arc::new(TransportConfig::new(config));
        Self {
            company: CompanyManager::new(Arc::clone(&transport)),
            users: UsersManager::new(Arc::clone(&transport)),
            projects: ProjectsManager::new(Arc::clone(&transport)),
            photos: PhotosManager::new(Arc::clone(&transport)),
            tags: TagsManager::new(Arc::clone(&transport)),
            groups: GroupsManager::new(Arc::clone(&transport)),
            webhooks: WebhooksManager::new(transport),
        }
    }
}
