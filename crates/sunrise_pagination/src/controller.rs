//! Creation of pagination instances and handling of their events.

use crate::{
    PageRenderer, PaginationAction, PaginationConfig, PaginationSession, PaginationState,
    build_control_row,
};
use async_trait::async_trait;
use std::sync::Arc;
use sunrise_cache::ActionStore;
use sunrise_error::{PaginationError, PaginationErrorKind, SunriseResult};
use sunrise_interaction::{
    Dispatch, DispatchGuard, GuardMatch, InteractionEvent, InteractionHandler,
    InteractionKind, InteractionResponder, JumpPrompt, PageContent, RenderedPage, Route, Token,
    TokenContext, encode,
};
use tracing::{debug, error, info, instrument};

/// Store holding one session per live pagination instance.
pub type SessionStore = ActionStore<Arc<PaginationSession>>;

/// What an entry point did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A page was rendered and presented.
    Rendered(PaginationState),
    /// The jump prompt was opened.
    PromptOpened,
    /// The token was not addressed to this controller or user.
    NotApplicable,
    /// The token's session expired or was evicted. Nothing changed.
    SessionNotFound,
}

impl Outcome {
    fn dispatch(self) -> Dispatch {
        match self {
            Self::Rendered(_) | Self::PromptOpened => Dispatch::Handled,
            Self::NotApplicable | Self::SessionNotFound => Dispatch::Unhandled,
        }
    }
}

/// Drives pagination instances stored in a [`SessionStore`].
///
/// Cloning is cheap; clones share the store.
#[derive(Debug, Clone)]
pub struct PaginationController {
    store: SessionStore,
    config: PaginationConfig,
    move_guard: DispatchGuard,
    jump_guard: DispatchGuard,
}

impl PaginationController {
    /// Controller over `store` presenting pages per `config`.
    pub fn new(store: SessionStore, config: PaginationConfig) -> Self {
        let move_guard = DispatchGuard::new(config.move_prefix().as_str());
        let jump_guard = DispatchGuard::new(config.jump_prefix().as_str());
        Self {
            store,
            config,
            move_guard,
            jump_guard,
        }
    }

    /// The session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Presentation settings.
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Render the first page of a new instance and present it.
    ///
    /// Returns the store id of the new session. If the first page cannot be
    /// rendered nothing is stored; if it cannot be presented the session is
    /// removed again.
    #[instrument(skip(self, renderer, initial, responder), fields(page = initial.current_page))]
    pub async fn create_pagination_handler(
        &self,
        user_id: &str,
        renderer: Arc<dyn PageRenderer>,
        initial: PaginationState,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<String> {
        let mut state = initial;
        state.clamp();
        let content = renderer.render(&mut state).await?;
        state.clamp();

        let store_id = self
            .store
            .set(Arc::new(PaginationSession::new(renderer, state)));

        if let Err(err) = self
            .show(&store_id, user_id, &state, content, responder)
            .await
        {
            self.store.delete(&store_id);
            return Err(err);
        }

        info!(
            store_id = %store_id,
            total_pages = state.total_pages,
            "Created pagination session"
        );
        Ok(store_id)
    }

    /// Handle a navigation button press carrying `raw` from `user_id`.
    #[instrument(skip(self, responder))]
    pub async fn handle_move(
        &self,
        raw: &str,
        user_id: &str,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Outcome> {
        let result = match self.move_guard.check(raw, user_id) {
            Ok(GuardMatch::Matched(token)) => self.move_with_token(token, responder).await,
            Ok(GuardMatch::NotApplicable(_)) => Ok(Outcome::NotApplicable),
            Err(err) => Err(err.into()),
        };
        logged(result)
    }

    /// Handle a jump-prompt submission of `input` carrying `raw` from `user_id`.
    #[instrument(skip(self, responder))]
    pub async fn handle_jump(
        &self,
        raw: &str,
        user_id: &str,
        input: &str,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Outcome> {
        let result = match self.jump_guard.check(raw, user_id) {
            Ok(GuardMatch::Matched(token)) => self.jump_with_token(token, input, responder).await,
            Ok(GuardMatch::NotApplicable(_)) => Ok(Outcome::NotApplicable),
            Err(err) => Err(err.into()),
        };
        logged(result)
    }

    /// Router entries for the navigation buttons and the jump prompt.
    pub fn routes(&self) -> [Route; 2] {
        let shared = Arc::new(self.clone());
        [
            Route::new(
                InteractionKind::Component,
                self.config.move_prefix().as_str(),
                Arc::new(MoveRoute(Arc::clone(&shared))),
            ),
            Route::new(
                InteractionKind::ModalSubmit,
                self.config.jump_prefix().as_str(),
                Arc::new(JumpRoute(shared)),
            ),
        ]
    }

    async fn move_with_token(
        &self,
        token: Token,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Outcome> {
        let (Some(store_id), Some(raw_action)) =
            (token.ctx.store_id.as_deref(), token.ctx.payload.first())
        else {
            debug!("Move token without session or action");
            return Ok(Outcome::NotApplicable);
        };

        let Some(session) = self.store.get(store_id) else {
            debug!(store_id, "Pagination session not found");
            return Ok(Outcome::SessionNotFound);
        };

        let action: PaginationAction = raw_action.parse().map_err(|_| {
            PaginationError::new(PaginationErrorKind::UnexpectedAction(raw_action.clone()))
        })?;

        if action == PaginationAction::Jump {
            let ctx = TokenContext::with_store_id(store_id);
            let prompt = JumpPrompt {
                custom_id: encode(self.config.jump_prefix(), &token.user_id, &ctx)?,
                title: self.config.jump_title().clone(),
                label: self.config.jump_label().clone(),
                placeholder: self.config.jump_placeholder().clone(),
                field_id: self.config.jump_field_id().clone(),
            };
            responder.open_jump_prompt(&prompt).await?;
            return Ok(Outcome::PromptOpened);
        }

        let next = session.state().apply(action);
        debug!(%action, page = next.current_page, "Applying transition");
        self.present(store_id, &token.user_id, &session, next, responder)
            .await
    }

    async fn jump_with_token(
        &self,
        token: Token,
        input: &str,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Outcome> {
        let Some(store_id) = token.ctx.store_id.as_deref() else {
            debug!("Jump token without session");
            return Ok(Outcome::NotApplicable);
        };

        let Some(session) = self.store.get(store_id) else {
            debug!(store_id, "Pagination session not found");
            return Ok(Outcome::SessionNotFound);
        };

        let next = session.state().jump_to(input)?;
        debug!(page = next.current_page, "Jumping to page");
        self.present(store_id, &token.user_id, &session, next, responder)
            .await
    }

    async fn present(
        &self,
        store_id: &str,
        user_id: &str,
        session: &PaginationSession,
        mut next: PaginationState,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Outcome> {
        responder.show_placeholder(self.config.placeholder()).await?;

        let content = session.renderer().render(&mut next).await?;
        next.clamp();
        session.commit(next);

        self.show(store_id, user_id, &next, content, responder)
            .await?;
        Ok(Outcome::Rendered(next))
    }

    async fn show(
        &self,
        store_id: &str,
        user_id: &str,
        state: &PaginationState,
        content: PageContent,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<()> {
        let controls = build_control_row(state, self.config.move_prefix(), user_id, store_id)?;
        responder
            .update_page(&RenderedPage { content, controls })
            .await?;
        Ok(())
    }
}

/// Log an entry point's failure: input errors at debug, everything else at error.
fn logged(result: SunriseResult<Outcome>) -> SunriseResult<Outcome> {
    if let Err(err) = &result {
        match err.user_message() {
            Some(message) => debug!(error = %err, message, "Rejected pagination input"),
            None => error!(error = %err, "Pagination event failed"),
        }
    }
    result
}

/// Router adapter for navigation buttons.
#[derive(Debug, Clone)]
pub struct MoveRoute(Arc<PaginationController>);

#[async_trait]
impl InteractionHandler for MoveRoute {
    fn name(&self) -> &str {
        self.0.config.move_prefix()
    }

    async fn handle(
        &self,
        token: Token,
        _event: &InteractionEvent,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Dispatch> {
        let outcome = self.0.move_with_token(token, responder).await?;
        Ok(outcome.dispatch())
    }
}

/// Router adapter for jump-prompt submissions.
#[derive(Debug, Clone)]
pub struct JumpRoute(Arc<PaginationController>);

#[async_trait]
impl InteractionHandler for JumpRoute {
    fn name(&self) -> &str {
        self.0.config.jump_prefix()
    }

    async fn handle(
        &self,
        token: Token,
        event: &InteractionEvent,
        responder: &dyn InteractionResponder,
    ) -> SunriseResult<Dispatch> {
        let input = event.field(self.0.config.jump_field_id()).unwrap_or_default();
        let outcome = self.0.jump_with_token(token, input, responder).await?;
        Ok(outcome.dispatch())
    }
}
