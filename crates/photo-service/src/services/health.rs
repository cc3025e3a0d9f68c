//! Health checks

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The process is up
    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// The store answers within the operation deadline
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let database_healthy = match self
            .ctx
            .run("readiness", self.ctx.store_health().ping())
            .await
        {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store not ready");
                false
            }
        };

        ReadinessResponse::ready(database_healthy)
    }
}
