//! Resource managers: thin per-resource method collections.
//!
//! Each method builds the request parameters for one operation and delegates
//! the full request/response cycle to its [`Route`]. Routes are associated
//! consts so tests (and callers) can introspect the declared verb and URL
//! template of any operation.

pub mod company;
pub mod groups;
pub mod photos;
pub mod projects;
pub mod tags;
pub mod users;
pub mod webhooks;

pub use company::CompanyManager;
pub use groups::GroupsManager;
pub use photos::PhotosManager;
pub use projects::ProjectsManager;
pub use tags::TagsManager;
pub use users::UsersManager;
pub use webhooks::WebhooksManager;

use crate::core::kernel::Route;

/// Every route declared across the v2 managers, in declaration order.
///
/// Acceptance tests check this inventory against the published API contract.
pub fn all_routes() -> Vec<Route> {
    [
        CompanyManager::ROUTES,
        UsersManager::ROUTES,
        ProjectsManager::ROUTES,
        PhotosManager::ROUTES,
        TagsManager::ROUTES,
        GroupsManager::ROUTES,
        WebhooksManager::ROUTES,
    ]
    .concat()
}
