use crate::core::errors::ApiError;
use crate::core::kernel::{RequestParts, Route, TransportConfig};
use crate::core::types::Payload;
use crate::v2::models::Company;
use std::sync::Arc;

/// Operations on `/company`.
pub struct CompanyManager {
    transport: Arc<TransportConfig>,
}

impl CompanyManager {
    pub const RETRIEVE: Route = Route::get("/company");

    pub const ROUTES: &'static [Route] = &[Self::RETRIEVE];

    pub(crate) fn new(transport: Arc<TransportConfig>) -> Self {
        Self { transport }
    }

    /// Retrieve the authenticated user's company.
    pub fn retrieve(&self) -> Result<Payload<Company>, ApiError> {
        Self::RETRIEVE.send(&self.transport, &[], RequestParts::new())
    }
}
