//! Ordered dispatch of inbound events to guarded handlers.

use crate::event::{InteractionEvent, InteractionKind};
use crate::guard::{DispatchGuard, GuardMatch};
use crate::responder::InteractionResponder;
use crate::token::Token;
use async_trait::async_trait;
use std::sync::Arc;
use sunrise_error::{SunriseError, SunriseResult};
use tracing::{debug, error, instrument, warn};

/// Message shown to the user when an interaction fails internally.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong... Sorry!";

/// Whether an event was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// A handler took the event.
    Handled,
    /// No handler applied; the event can be ignored.
    Unhandled,
}

/// Receives events whose token passed a route's guard.
#[async_trait]
pub trait InteractionHandler: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Handle a matched event.
    ///
    /// Returning [`Dispatch::Unhandled`] lets later routes try the event,
    /// e.g. when the token's store entry no longer exists.
    async fn handle(
        &self,
        token: Token,
        event: &InteractionEvent,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Dispatch>;
}

/// A guard paired with the handler it protects.
#[derive(Clone)]
pub struct Route {
    kind: InteractionKind,
    guard: DispatchGuard,
    handler: Arc<dyn InteractionHandler>,
}

impl Route {
    /// Route events of `kind` whose token carries `prefix` to `handler`.
    pub fn new(
        kind: InteractionKind,
        prefix: impl Into<String>,
        handler: Arc<dyn InteractionHandler>,
    ) -> Self {
        Self {
            kind,
            guard: DispatchGuard::new(prefix),
            handler,
        }
    }

    /// Event kind this route accepts.
    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    /// The route's guard.
    pub fn guard(&self) -> &DispatchGuard {
        &self.guard
    }

    /// Name of the route's handler.
    pub fn name(&self) -> &str {
        self.handler.name()
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("kind", &self.kind)
            .field("prefix", &self.guard.prefix())
            .field("handler", &self.handler.name())
            .finish()
    }
}

/// Evaluates routes in registration order; the first that takes an event wins.
///
/// Errors a user can fix (bad page numbers and the like) are reported to the
/// user through the responder and the event counts as handled. Any other
/// failure is logged, answered with [`GENERIC_ERROR_MESSAGE`] and returned.
#[derive(Debug, Clone, Default)]
pub struct InteractionRouter {
    routes: Vec<Route>,
}

impl InteractionRouter {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route.
    pub fn register(&mut self, route: Route) -> &mut Self {
        debug!(
            handler = route.name(),
            prefix = route.guard.prefix(),
            "Registering interaction route"
        );
        self.routes.push(route);
        self
    }

    /// Append several routes, keeping their order.
    pub fn register_all(&mut self, routes: impl IntoIterator<Item = Route>) -> &mut Self {
        for route in routes {
            self.register(route);
        }
        self
    }

    /// Registered routes in evaluation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Deliver an event to the first applicable handler.
    #[instrument(
        skip(self, event, responder),
        fields(kind = ?event.kind(), user_id = event.user_id())
    )]
    pub async fn dispatch(
        &self,
        event: &InteractionEvent,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Dispatch> {
        for route in self.routes.iter().filter(|r| r.kind == event.kind()) {
            let token = match route.guard.check(event.custom_id(), event.user_id()) {
                Ok(GuardMatch::Matched(token)) => token,
                Ok(GuardMatch::NotApplicable(reason)) => {
                    debug!(handler = route.name(), %reason, "Route not applicable");
                    continue;
                }
                Err(err) => {
                    return Err(fail(route.name(), err.into(), responder).await);
                }
            };

            match route.handler.handle(token, event, responder).await {
                Ok(Dispatch::Handled) => {
                    debug!(handler = route.name(), "Interaction handled");
                    return Ok(Dispatch::Handled);
                }
                Ok(Dispatch::Unhandled) => {
                    debug!(handler = route.name(), "Handler declined interaction");
                }
                Err(err) => {
                    if let Some(message) = err.user_message() {
                        debug!(handler = route.name(), error = %err, "Rejected user input");
                        responder.send_error(message).await?;
                        return Ok(Dispatch::Handled);
                    }
                    return Err(fail(route.name(), err, responder).await);
                }
            }
        }

        debug!(custom_id = event.custom_id(), "No route for interaction");
        Ok(Dispatch::Unhandled)
    }
}

async fn fail(
    handler: &str,
    err: SunriseError,
    responder: &dyn InteractionResponder,
) -> SunriseError {
    error!(handler, error = %err, "Interaction handler failed");
    if let Err(send_err) = responder.send_error(GENERIC_ERROR_MESSAGE).await {
        warn!(handler, error = %send_err, "Failed to report interaction error");
    }
    err
}
