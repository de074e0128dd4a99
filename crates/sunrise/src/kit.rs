//! One-stop wiring of store, controller and router.

use crate::SunriseConfig;
use sunrise_cache::ActionStore;
use sunrise_error::SunriseResult;
use sunrise_interaction::{Dispatch, InteractionEvent, InteractionResponder, InteractionRouter};
use sunrise_pagination::PaginationController;
use tracing::{info, instrument};

/// A pagination controller and a router with its routes registered.
///
/// Construct one per process. Further routes for other token prefixes can be
/// registered through [`router_mut`](Self::router_mut); the pagination routes
/// are evaluated first.
#[derive(Debug, Clone)]
pub struct InteractionKit {
    controller: PaginationController,
    router: InteractionRouter,
}

impl InteractionKit {
    /// Build a kit from configuration.
    pub fn new(config: &SunriseConfig) -> Self {
        let store = ActionStore::new(config.action_store().clone());
        let controller = PaginationController::new(store, config.pagination().clone());

        let mut router = InteractionRouter::new();
        router.register_all(controller.routes());

        info!(
            capacity = *config.action_store().capacity(),
            default_ttl_ms = *config.action_store().default_ttl_ms(),
            "Interaction kit ready"
        );
        Self { controller, router }
    }

    /// The pagination controller.
    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    /// The router.
    pub fn router(&self) -> &InteractionRouter {
        &self.router
    }

    /// Mutable router, for registering additional routes.
    pub fn router_mut(&mut self) -> &mut InteractionRouter {
        &mut self.router
    }

    /// Deliver an inbound event.
    #[instrument(skip(self, event, responder))]
    pub async fn dispatch(
        &self,
        event: &InteractionEvent,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Dispatch> {
        self.router.dispatch(event, responder).await
    }
}

impl Default for InteractionKit {
    fn default() -> Self {
        Self::new(&SunriseConfig::default())
    }
}
