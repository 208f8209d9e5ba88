//! Wizard controller.
//!
//! This module coordinates the wizard state machine and its side effects.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, info_span, Instrument};

use mc_core::ids::MemberId;
use mc_core::ports::MemberDetailCachePort;
use mc_core::wizard::{
    WizardAction, WizardError, WizardEvent, WizardRoute, WizardState, WizardStateMachine,
    WizardStep,
};

use super::context::WizardContext;

/// Controller that drives one wizard page.
///
/// Construct one per wizard page and drop it when the page goes away. All
/// step use cases of that page share it.
pub struct WizardController {
    context: Arc<WizardContext>,
    member_detail_cache: Arc<dyn MemberDetailCachePort>,
}

impl WizardController {
    pub fn new(member_detail_cache: Arc<dyn MemberDetailCachePort>) -> Self {
        Self {
            context: Arc::new(WizardContext::default()),
            member_detail_cache,
        }
    }

    pub async fn state(&self) -> WizardState {
        self.context.get_state().await
    }

    /// Token every request of the current generation should race against.
    pub async fn cancellation_token(&self) -> CancellationToken {
        self.context.cancellation_token().await
    }

    /// Route mount: `/member/add` or `/member/update/<id>`.
    pub async fn enter_route(&self, path: &str) -> Result<WizardState, WizardError> {
        let route = WizardRoute::parse(path);
        self.dispatch(WizardEvent::RouteEntered { route }).await
    }

    /// Route unmount; `next_path` is where navigation is heading.
    pub async fn leave_route(&self, next_path: &str) -> Result<WizardState, WizardError> {
        let next = WizardRoute::parse(next_path);
        self.dispatch(WizardEvent::RouteLeft { next }).await
    }

    /// Advance without persisting.
    pub async fn skip(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::Skip).await
    }

    /// Step-indicator navigation. Any in-range step is allowed.
    pub async fn set_current_step(&self, index: usize) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::JumpTo { index }).await
    }

    /// Record a successful save made under `token`. Returns `None` without
    /// touching the state when that token's page has since been torn down.
    pub async fn step_saved(
        &self,
        step: WizardStep,
        token: &CancellationToken,
    ) -> Result<Option<WizardState>, WizardError> {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        if token.is_cancelled() {
            debug!(step = step.title(), "save landed after cancellation; ignored");
            return Ok(None);
        }
        self.apply(WizardEvent::StepSaved { step }).await.map(Some)
    }

    /// Drop the cached detail after writes that did not end in `StepSaved`.
    pub async fn invalidate_member_detail(&self, member_id: &MemberId) {
        self.member_detail_cache.invalidate(member_id).await;
    }

    pub async fn assign_member_id(&self, member_id: MemberId) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::MemberIdAssigned { member_id }).await
    }

    pub async fn mark_step_completed(&self, index: usize) -> Result<WizardState, WizardError> {
        self.mutate(|state| state.mark_step_completed(index)).await
    }

    pub async fn set_update_mode(&self, enabled: bool) -> Result<WizardState, WizardError> {
        self.mutate(|state| state.set_update_mode(enabled)).await
    }

    pub async fn dispatch(&self, event: WizardEvent) -> Result<WizardState, WizardError> {
        // Serialize dispatch calls so two steps never interleave a
        // read-transition-write cycle.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        self.apply(event).await
    }

    /// Run one transition. Callers hold the dispatch lock.
    async fn apply(&self, event: WizardEvent) -> Result<WizardState, WizardError> {
        let span = info_span!("usecase.wizard_controller.dispatch", event = ?event);
        async {
            let from = self.context.get_state().await;
            let (next, actions) = WizardStateMachine::transition(from.clone(), event)?;
            info!(
                from_step = from.current_step(),
                to_step = next.current_step(),
                update_mode = next.is_update_mode(),
                member_id = next.member_id().map(MemberId::as_str).unwrap_or(""),
                "wizard state transition"
            );
            self.execute_actions(actions).await;
            self.context.set_state(next.clone()).await;
            Ok(next)
        }
        .instrument(span)
        .await
    }

    async fn mutate<F>(&self, apply: F) -> Result<WizardState, WizardError>
    where
        F: FnOnce(&mut WizardState) -> Result<(), WizardError>,
    {
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;
        let mut state = self.context.get_state().await;
        apply(&mut state)?;
        self.context.set_state(state.clone()).await;
        Ok(state)
    }

    async fn execute_actions(&self, actions: Vec<WizardAction>) {
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::InvalidateMemberDetail { member_id } => {
                    self.member_detail_cache.invalidate(&member_id).await;
                }
                WizardAction::CancelInFlight => {
                    self.context.cancel_in_flight().await;
                }
            }
        }
    }
}
